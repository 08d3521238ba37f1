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

use thiserror::Error;

use super::enums::PhoneNumberType;

/// Hard failure of [`crate::parse_phone`]: the input can not be
/// interpreted as a number under the given region's numbering plan.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0}")]
    FailedToParse(#[from] phonenumber::ParseError),
    #[error("Number parser panicked while parsing '{0}'")]
    ParserPanicked(String),
}

/// Soft failure of a geocode, timezone or carrier lookup.
///
/// The record builder absorbs these; they only surface when the
/// backend is queried directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No lookup data loaded for language '{language}'")]
    NoData { language: String },
    #[error("No timezone data loaded")]
    NoTimezoneData,
    #[error("No prefix matches the number")]
    NoMatch,
    #[error("Number is not valid for its region")]
    InvalidNumber,
    #[error("Lookup is not supported for numbers of type {0}")]
    UnsupportedNumberType(PhoneNumberType),
}
