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

pub(crate) mod helper_constants;
pub mod helper_functions;
pub mod config;
pub mod enums;
pub mod errors;
pub mod record;
pub mod record_builder;

use std::sync::LazyLock;

use crate::backend::PhoneNumberBackend;
use self::{errors::ParseError, record::Record, record_builder::RecordBuilder};

/// Process-wide builder backed by [`PhoneNumberBackend`].
///
/// Lookup tables may be loaded into its backend at any time, e.g.
/// `PHONE_RECORD_BUILDER.backend().geocoding().load_str("en", data)`.
pub static PHONE_RECORD_BUILDER: LazyLock<RecordBuilder<PhoneNumberBackend>> = LazyLock::new(|| {
    RecordBuilder::new(PhoneNumberBackend::new())
});

/// Takes a phone number in national or international format and returns a
/// [`Record`] with everything known about it: formats, type, geocode,
/// timezone, carrier and the separate segments of the number.
///
/// `region` is usually a two letter country code and defaults to `"US"`
/// when empty. `language` selects the geocoding and carrier descriptions
/// and defaults to `"en"` when empty.
pub fn parse_phone(number: &str, region: &str, language: &str) -> Result<Record, ParseError> {
    PHONE_RECORD_BUILDER.parse_phone(number, region, language)
}
