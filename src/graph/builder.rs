use super::{DuplicatePolicy, Indexer};

/// Configures an [`Indexer`].
#[derive(Debug, Clone, Default)]
pub struct IndexerBuilder {
    duplicates: DuplicatePolicy,
}

impl IndexerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how screens sharing an id are handled. Defaults to [`DuplicatePolicy::Reject`].
    pub fn duplicate_screens(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn build(self) -> Indexer {
        Indexer {
            duplicates: self.duplicates,
        }
    }
}
