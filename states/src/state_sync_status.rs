/// Freshness of a recorded compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Recorded but never computed.
    #[default]
    Init,
    /// A dependency changed since the last run.
    Dirty,
    Clean,
}

impl StateSyncStatus {
    pub fn needs_run(self) -> bool {
        !matches!(self, Self::Clean)
    }
}
