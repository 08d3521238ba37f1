// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{io::BufRead, sync::Arc};

use dashmap::{mapref::entry::Entry, DashMap};
use log::trace;

use super::{prefix_file::PrefixFileError, prefix_map::PrefixMap};

/// Prefix maps keyed by language, safe to read and load concurrently.
///
/// Readers get an `Arc` snapshot, so a load running in parallel never
/// blocks or changes an ongoing lookup.
pub struct PrefixMapStore {
    maps: DashMap<String, Arc<PrefixMap>>,
}

impl PrefixMapStore {
    pub fn new() -> Self {
        Self {
            maps: DashMap::new(),
        }
    }

    pub fn get(&self, language: &str) -> Option<Arc<PrefixMap>> {
        self.maps.get(language).map(|map| map.value().clone())
    }

    pub fn contains(&self, language: &str) -> bool {
        self.maps.contains_key(language)
    }

    /// Adds `map` to the entries of `language`. Prefixes already stored
    /// for the language get the new description.
    pub fn insert(&self, language: &str, map: PrefixMap) {
        trace!("Loading {} prefixes for language '{}'", map.len(), language);
        match self.maps.entry(language.to_owned()) {
            Entry::Occupied(mut entry) => {
                let mut merged = PrefixMap::clone(entry.get());
                merged.extend(map);
                entry.insert(Arc::new(merged));
            }
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(map));
            }
        }
    }

    pub fn load<R: BufRead>(&self, language: &str, reader: R) -> Result<(), PrefixFileError> {
        let map = PrefixMap::from_reader(reader)?;
        self.insert(language, map);
        Ok(())
    }

    pub fn load_str(&self, language: &str, data: &str) -> Result<(), PrefixFileError> {
        self.load(language, data.as_bytes())
    }

    pub fn clear(&self) {
        self.maps.clear();
    }
}

impl Default for PrefixMapStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::PrefixMapStore;

    #[test]
    fn test_load_merges_per_language() {
        let store = PrefixMapStore::new();
        store.load_str("en", "1201|New Jersey\n1212|New York").unwrap();
        store.load_str("en", "1212|New York, NY\n44|United Kingdom").unwrap();
        store.load_str("de", "44|Vereinigtes Königreich").unwrap();

        let en = store.get("en").unwrap();
        assert_eq!(en.len(), 3);
        assert_eq!(en.lookup(12125551212), Some("New York, NY"));
        assert_eq!(en.lookup(442087654321), Some("United Kingdom"));

        let de = store.get("de").unwrap();
        assert_eq!(de.lookup(442087654321), Some("Vereinigtes Königreich"));
        assert!(!store.contains("fr"));
        assert!(store.get("fr").is_none());
    }

    #[test]
    fn test_failed_load_keeps_existing_entries() {
        let store = PrefixMapStore::new();
        store.load_str("en", "1201|New Jersey").unwrap();
        assert!(store.load_str("en", "1212 New York").is_err());
        assert_eq!(store.get("en").unwrap().len(), 1);

        store.clear();
        assert!(!store.contains("en"));
    }

    #[test]
    fn test_snapshot_survives_concurrent_load() {
        let store = Arc::new(PrefixMapStore::new());
        store.load_str("en", "1201|New Jersey").unwrap();
        let snapshot = store.get("en").unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.load_str("en", &format!("4{}|Region {}", i, i)).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.get("en").unwrap().len(), 5);
    }
}
