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

use strum::{AsRefStr, Display, EnumIter};

/// Defines the various standardized formats for representing phone numbers.
///
/// For example, the Google Switzerland office number would be:
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **E164**: `+41446681800`
/// - **RFC3966**: `tel:+41-44-668-1800`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// Standardized storage format with no spaces or symbols, always
    /// starting with a `+` followed by the country code.
    E164,
    /// Includes the country code and separators for display.
    International,
    /// Format used for dialing within the number's own country.
    National,
    /// `tel:` URI format with hyphen separators.
    RFC3966,
}

/// Categorizes phone numbers based on their primary use.
///
/// `Display` and `AsRef<str>` render the libphonenumber constant names,
/// e.g. `FIXED_LINE_OR_MOBILE`.
#[derive(Debug, Default, EnumIter, Display, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PhoneNumberType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// Used in regions (e.g. the USA) where fixed-line and mobile numbers
    /// can not be told apart from the number itself.
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    #[strum(serialize = "VOIP")]
    VoIP,
    /// Number associated with a person rather than a location or device.
    PersonalNumber,
    Pager,
    /// Universal Access Numbers.
    #[strum(serialize = "UAN")]
    UAN,
    #[strum(serialize = "VOICEMAIL")]
    VoiceMail,
    /// The number does not match any of the known patterns for its region.
    #[default]
    Unknown,
}

impl PhoneNumberType {
    /// Number types carrier names are resolved for.
    pub fn is_mobile(&self) -> bool {
        matches!(
            self,
            PhoneNumberType::Mobile | PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Pager
        )
    }
}
