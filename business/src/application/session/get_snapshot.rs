use async_trait::async_trait;

use crate::domain::session::model::{SessionSnapshot, SharedSession};
use crate::domain::session::use_cases::get_snapshot::GetSessionSnapshotUseCase;

pub struct GetSessionSnapshotUseCaseImpl {
    pub session: SharedSession,
}

#[async_trait]
impl GetSessionSnapshotUseCase for GetSessionSnapshotUseCaseImpl {
    async fn execute(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }
}
