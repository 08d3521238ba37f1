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

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use super::{
    helper_constants::{
        SEGMENTS_WITH_LOCAL_EXCHANGE, SEGMENTS_WITHOUT_LOCAL_EXCHANGE, SEGMENT_SEPARATOR,
    },
    record::Record,
};

static SEGMENT_SEPARATOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a compile time constant.
    Regex::new(SEGMENT_SEPARATOR).unwrap_or_else(|err| {
        panic!("A valid separator regex is expected; this indicates a library bug! {}", err)
    })
});

/// Splits a number in international format into its separate parts.
///
/// Splits on anything that is not numeric (`+` counts as numeric) and
/// never returns empty parts. Taking the US number `+1 212-555-1212`:
///
/// ```
/// assert_eq!(phonerecord::split_phone("+1 212-555-1212"), ["+1", "212", "555", "1212"]);
/// ```
///
/// the parts are the country code, the National Destination Code (the
/// area code), the local exchange code and the subscriber number. Taiwan
/// formats `+886 255 555 1212` with spaces but has the same four parts,
/// while the UK number `+44 7911 123456` has no local exchange code and
/// yields three parts.
///
/// No validation of the number or meaning of the parts is done here.
pub fn split_phone(phone: &str) -> Vec<&str> {
    SEGMENT_SEPARATOR_PATTERN
        .split(phone)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Assigns the parts of `international` to the segment fields of `record`.
///
/// The first two parts are always the country code and NDC. Four parts
/// fill LDC and local, three parts fill local only. For any other count
/// LDC and local stay empty.
pub(super) fn assign_segments(record: &mut Record, international: &str) {
    let parts = split_phone(international);
    trace!("Number '{}' split into {} parts", international, parts.len());

    let mut parts_iter = parts.iter().map(|part| part.to_string());
    record.country_code = parts_iter.next().unwrap_or_default();
    record.ndc = parts_iter.next().unwrap_or_default();

    match parts.len() {
        SEGMENTS_WITHOUT_LOCAL_EXCHANGE => {
            record.local = parts[2].to_owned();
        }
        SEGMENTS_WITH_LOCAL_EXCHANGE => {
            record.ldc = parts[2].to_owned();
            record.local = parts[3].to_owned();
        }
        count => {
            debug!(
                "Number '{}' has {} parts; local segments left empty",
                international, count
            );
        }
    }
}
