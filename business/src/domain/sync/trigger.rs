/// Generation counter that forces the fetch condition to be re-evaluated
/// when the query text has not changed.
///
/// Only a change of generation matters. The value is never sent to the
/// recommendation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncTrigger(u64);

impl SyncTrigger {
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn regenerate(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_change_on_every_regeneration() {
        let first = SyncTrigger::initial();
        let second = first.regenerate();
        let third = second.regenerate();

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(third.generation(), 2);
    }
}
