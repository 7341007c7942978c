use tokio::task::JoinHandle;

use crate::domain::shared::identity::ItemId;

/// A recommendation fetch decided by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub sequence: u64,
    pub basket: Vec<ItemId>,
    pub query: String,
}

/// What happened to the suggestion store when a fetch finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied { count: usize },
    Cleared,
    /// A newer fetch was issued before this one finished; its result was dropped.
    Superseded,
}

/// Handle to a fetch running in the background.
///
/// Dropping it leaves the fetch running.
#[derive(Debug)]
pub struct ScheduledFetch {
    sequence: u64,
    handle: JoinHandle<FetchOutcome>,
}

impl ScheduledFetch {
    pub fn new(sequence: u64, handle: JoinHandle<FetchOutcome>) -> Self {
        Self { sequence, handle }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Waits for the fetch to finish. `None` if the task was aborted or panicked.
    pub async fn wait(self) -> Option<FetchOutcome> {
        self.handle.await.ok()
    }
}
