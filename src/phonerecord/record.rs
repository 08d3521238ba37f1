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

use super::enums::PhoneNumberType;

/// Everything known or inferred about a phone number after parsing and
/// deconstructing it.
///
/// Optional data (geocode, timezone, carrier) is an empty string when it
/// could not be determined.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Record {
    /// The usual `+<country code> <number>` display format.
    pub international: String,

    pub number_type: PhoneNumberType,

    /// Usually the town or city where the number is registered, including
    /// the state or province.
    pub geocode: String,

    /// First timezone candidate of the number.
    pub timezone: String,

    /// Usually the country, though some countries have more than one region.
    pub region: String,

    /// Language the geocode and carrier are returned in.
    pub language: String,

    /// `+` prefixed country calling code.
    pub country_code: String,

    /// National Destination Code, which is the area code in the US for
    /// instance but varies a little nation to nation.
    pub ndc: String,

    /// Local exchange code. Not always present, UK numbers for instance
    /// only have the local part.
    pub ldc: String,

    /// Subscriber number. For countries without a local exchange code this
    /// is the whole of the non NDC part of the number.
    pub local: String,

    pub carrier: String,

    /// The number in E164 format, often used as a storage key.
    pub e164: String,

    /// Whether the parser thinks the number is valid for its region.
    pub valid: bool,
}

impl Record {
    /// Returns the national significant number as decomposed into
    /// segments: NDC, LDC and local part joined together.
    pub fn national_significant_number(&self) -> String {
        fast_cat::concat_str!(&self.ndc, &self.ldc, &self.local)
    }

    /// Returns whether the segment decomposition reached the subscriber
    /// number. False when the international format had a segment count
    /// the builder could not interpret.
    pub fn has_local_segments(&self) -> bool {
        !self.local.is_empty()
    }
}
