use super::store::KeyValueStore;
use crate::core::{
    InputId,
    ShareMathError,
};

pub const KEY_PREFIX: &str = "share-math-";

/// Saves and restores the raw text of each input, exactly as typed.
#[derive(Debug)]
pub struct InputStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> InputStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn key(id: InputId) -> String {
        format!("{KEY_PREFIX}{}", id.as_str())
    }

    pub fn save(&mut self, id: InputId, raw: &str) -> Result<(), ShareMathError> {
        self.store.set(&Self::key(id), raw)
    }

    /// Stored text for `id`, or an empty string when nothing was saved.
    pub fn load(&self, id: InputId) -> String {
        self.store.get(&Self::key(id)).unwrap_or_default()
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{
        store::INPUTS_FILE,
        JsonFileStore,
        MemoryStore,
    };

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(InputStore::<MemoryStore>::key(InputId::Valuation), "share-math-valuation");
        assert_eq!(
            InputStore::<MemoryStore>::key(InputId::DilutedShares),
            "share-math-num-diluted-shares"
        );
        assert_eq!(InputStore::<MemoryStore>::key(InputId::StrikePrice), "share-math-strike-price");
    }

    #[test]
    fn test_round_trip_keeps_raw_text() {
        let mut inputs = InputStore::new(MemoryStore::new());
        inputs.save(InputId::Valuation, "$1,000,000").unwrap();
        assert_eq!(inputs.load(InputId::Valuation), "$1,000,000");
        assert_eq!(inputs.inner().get("share-math-valuation"), Some("$1,000,000".to_string()));
    }

    #[test]
    fn test_missing_value_loads_empty() {
        let inputs = InputStore::new(MemoryStore::new());
        assert_eq!(inputs.load(InputId::Revenue), "");
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INPUTS_FILE);

        let mut inputs = InputStore::new(JsonFileStore::open(&path).unwrap());
        inputs.save(InputId::Valuation, "$1,000,000").unwrap();
        inputs.save(InputId::Shares, "not a number").unwrap();
        drop(inputs);

        let reopened = InputStore::new(JsonFileStore::open(&path).unwrap());
        assert_eq!(reopened.load(InputId::Valuation), "$1,000,000");
        assert_eq!(reopened.load(InputId::Shares), "not a number");
        assert_eq!(reopened.load(InputId::StrikePrice), "");
    }
}
