use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Tag of one load request. Only the most recent ticket may complete a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTicket {
    generation: u64,
    dataset: String,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }
}

/// Records of one dashboard page.
///
/// Every region/tab switch starts a new load; completions carrying a
/// superseded ticket are dropped, so a slow earlier load can never overwrite
/// the data of a later one.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R> {
    records: Vec<R>,
    state: LoadState,
    generation: u64,
    dataset: Option<String>,
}

impl<R> RecordStore<R> {
    /// Empty store waiting for its first load
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            state: LoadState::Loading,
            generation: 0,
            dataset: None,
        }
    }

    /// Store populated synchronously
    pub fn with_records(dataset: &str, records: Vec<R>) -> Self {
        let mut store = Self::new();
        store.replace(dataset, records);
        store
    }

    /// Start a load of `dataset`, superseding any load still in flight.
    ///
    /// Records of the previous dataset are dropped right away, so nothing
    /// is shown or exported under the new dataset's name while it loads.
    pub fn begin_load(&mut self, dataset: &str) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.records.clear();
        self.dataset = Some(dataset.to_string());
        LoadTicket {
            generation: self.generation,
            dataset: dataset.to_string(),
        }
    }

    /// Apply the result of a load. Returns `false` when `ticket` was superseded.
    pub fn complete_load(&mut self, ticket: &LoadTicket, records: Vec<R>) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "discarding stale load of '{}' (generation {}, current {})",
                ticket.dataset,
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.records = records;
        self.state = LoadState::Ready;
        true
    }

    /// Synchronous population, also supersedes pending loads
    pub fn replace(&mut self, dataset: &str, records: Vec<R>) {
        let ticket = self.begin_load(dataset);
        self.complete_load(&ticket, records);
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    pub fn dataset(&self) -> Option<&str> {
        self.dataset.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_lifecycle() {
        let mut store: RecordStore<u32> = RecordStore::new();
        assert_eq!(store.state(), LoadState::Loading);

        let ticket = store.begin_load("global");
        assert!(store.complete_load(&ticket, vec![1, 2, 3]));
        assert!(store.is_ready());
        assert_eq!(store.records(), &[1, 2, 3]);
        assert_eq!(store.dataset(), Some("global"));
    }

    #[test]
    fn test_superseded_load_is_discarded() {
        let mut store: RecordStore<&str> = RecordStore::new();
        let slow = store.begin_load("global");
        let fast = store.begin_load("asia");

        assert!(store.complete_load(&fast, vec!["asia"]));
        assert!(!store.complete_load(&slow, vec!["global"]));
        assert_eq!(store.records(), &["asia"]);
        assert_eq!(store.dataset(), Some("asia"));
    }

    #[test]
    fn test_pending_load_drops_previous_records() {
        let mut store = RecordStore::with_records("global", vec![1u8, 2, 3]);
        let ticket = store.begin_load("india");
        assert!(!store.is_ready());
        assert!(store.is_empty());
        assert_eq!(store.dataset(), Some("india"));

        assert!(store.complete_load(&ticket, vec![9]));
        assert_eq!(store.records(), &[9]);
    }
}
