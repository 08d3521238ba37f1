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

use std::{
    collections::{BTreeMap, BTreeSet},
    io::BufRead,
    str::FromStr,
};

use super::prefix_file::{parse_prefixes, PrefixFileError};

/// Number of decimal digits in `value`.
fn digit_count(value: u64) -> usize {
    let mut buf = itoa::Buffer::new();
    buf.format(value).len()
}

/// A mapping from phone number prefixes to descriptions, answering
/// longest-prefix queries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PrefixMap {
    prefixes: BTreeMap<u64, String>,
    /// Digit lengths of the stored prefixes, so lookups only probe lengths
    /// that can match.
    possible_lengths: BTreeSet<usize>,
}

impl PrefixMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, PrefixFileError> {
        let mut prefixes = BTreeMap::new();
        parse_prefixes(reader, &mut prefixes)?;
        Ok(Self::from(prefixes))
    }

    pub fn insert(&mut self, prefix: u64, description: impl Into<String>) {
        self.possible_lengths.insert(digit_count(prefix));
        self.prefixes.insert(prefix, description.into());
    }

    /// Adds all entries of `other`, replacing descriptions of prefixes
    /// present in both.
    pub fn extend(&mut self, other: PrefixMap) {
        self.possible_lengths.extend(other.possible_lengths);
        self.prefixes.extend(other.prefixes);
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Returns the description of the longest prefix of `number`, where
    /// `number` is the country calling code followed by the national
    /// significant number.
    pub fn lookup(&self, number: u64) -> Option<&str> {
        let number_length = digit_count(number);
        for &possible_length in self.possible_lengths.iter().rev() {
            if possible_length > number_length {
                continue;
            }
            let prefix = number / 10u64.pow((number_length - possible_length) as u32);
            if let Some(description) = self.prefixes.get(&prefix) {
                return Some(description);
            }
        }
        None
    }

    /// Same as [`PrefixMap::lookup`] for the digits of an E164 formatted
    /// number. Returns `None` when `e164` is not made of digits only after
    /// the leading `+`.
    pub fn lookup_e164(&self, e164: &str) -> Option<&str> {
        let digits = e164.strip_prefix('+').unwrap_or(e164);
        let number = digits.parse::<u64>().ok()?;
        self.lookup(number)
    }
}

impl From<BTreeMap<u64, String>> for PrefixMap {
    fn from(prefixes: BTreeMap<u64, String>) -> Self {
        let possible_lengths = prefixes.keys().map(|&prefix| digit_count(prefix)).collect();
        Self { prefixes, possible_lengths }
    }
}

impl FromStr for PrefixMap {
    type Err = PrefixFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::PrefixMap;

    fn us_map() -> PrefixMap {
        "1|United States\n1201|New Jersey\n1212|New York, NY\n1212555|Manhattan"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_longest_prefix_wins() {
        let map = us_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map.lookup(12125551212), Some("Manhattan"));
        assert_eq!(map.lookup(12125561212), Some("New York, NY"));
        assert_eq!(map.lookup(12015550123), Some("New Jersey"));
        assert_eq!(map.lookup(16505550123), Some("United States"));
        assert_eq!(map.lookup(442087654321), None);
    }

    #[test]
    fn test_number_shorter_than_prefixes() {
        let map = us_map();
        assert_eq!(map.lookup(121), Some("United States"));
        assert_eq!(map.lookup(1212), Some("New York, NY"));
    }

    #[test]
    fn test_lookup_e164() {
        let map = us_map();
        assert_eq!(map.lookup_e164("+12125551212"), Some("Manhattan"));
        assert_eq!(map.lookup_e164("12015550123"), Some("New Jersey"));
        assert_eq!(map.lookup_e164("+1 201"), None);
        assert_eq!(map.lookup_e164(""), None);
    }

    #[test]
    fn test_extend_replaces_descriptions() {
        let mut map = us_map();
        let mut other = PrefixMap::new();
        other.insert(1212, "New York");
        other.insert(44, "United Kingdom");
        map.extend(other);

        assert_eq!(map.lookup(12125561212), Some("New York"));
        assert_eq!(map.lookup(442087654321), Some("United Kingdom"));
        assert!(!map.is_empty());
    }
}
