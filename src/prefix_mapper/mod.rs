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

//! Longest-prefix lookup tables for geocoding, carrier and timezone data.
//!
//! Tables are read from libphonenumber's text format, one
//! `<prefix>|<description>` entry per line where the prefix starts with the
//! country calling code:
//!
//! ```text
//! # United States
//! 1201|New Jersey
//! 1212|New York, NY
//! ```

mod prefix_file;
mod prefix_map;
mod prefix_map_store;

pub use prefix_file::{parse_prefixes, PrefixFileError};
pub use prefix_map::PrefixMap;
pub use prefix_map_store::PrefixMapStore;
