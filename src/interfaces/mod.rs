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

use crate::{LookupError, PhoneNumberFormat, PhoneNumberType};

/// Number intelligence API used to isolate the underlying parsing
/// library from the record builder and allow different implementations
/// to be swapped in easily.
///
/// Every query except [`NumberIntelligence::parse`] is a read-only lookup
/// over an already parsed number.
pub trait NumberIntelligence {
    /// Opaque parsed representation of a phone number.
    type Number;
    /// Error returned when raw input can not be interpreted as a number.
    type Error: std::error::Error;

    /// Parses `raw` using `region` as the default region for numbers
    /// written in national format.
    fn parse(&self, raw: &str, region: &str) -> Result<Self::Number, Self::Error>;

    /// Returns whether the number is valid for the region it belongs to.
    fn is_valid_number(&self, number: &Self::Number) -> bool;

    fn format(&self, number: &Self::Number, number_format: PhoneNumberFormat) -> String;

    fn get_number_type(&self, number: &Self::Number) -> PhoneNumberType;

    /// Returns a human readable locality for the number in `language`.
    fn get_geocoding_for_number(
        &self,
        number: &Self::Number,
        language: &str,
    ) -> Result<String, LookupError>;

    /// Returns timezone candidates for the number, most specific first.
    /// An empty list is allowed and means nothing is known.
    fn get_timezones_for_number(&self, number: &Self::Number) -> Result<Vec<String>, LookupError>;

    fn get_region_code_for_number(&self, number: &Self::Number) -> String;

    fn get_carrier_for_number(
        &self,
        number: &Self::Number,
        language: &str,
    ) -> Result<String, LookupError>;
}
