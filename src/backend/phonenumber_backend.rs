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

use std::{io::BufRead, panic};

use log::{error, trace};
use phonenumber::{
    country,
    metadata::{Descriptor, Metadata, DATABASE},
    Mode, PhoneNumber,
};

use crate::{
    i18n::{LanguageCode, RegionCode},
    interfaces::NumberIntelligence,
    phonerecord::helper_constants::PLUS_CHARS,
    prefix_mapper::{PrefixFileError, PrefixMapStore},
    LookupError, ParseError, PhoneNumberFormat, PhoneNumberType,
};

// Timezone tables are language independent and live under a single key.
const TIMEZONES_KEY: &'static str = "";
// Separates the zones of a prefix in timezone tables, e.g.
// `1|America/New_York&America/Chicago`.
const TIMEZONE_SEPARATOR: char = '&';

/// [`NumberIntelligence`] over the `phonenumber` crate.
///
/// Parsing, validation, formatting and classification use the metadata
/// compiled into `phonenumber`. Geocoding, carrier and timezone queries are
/// answered from prefix tables loaded at runtime; until a table is loaded
/// the corresponding lookup fails softly.
pub struct PhoneNumberBackend {
    geocoding: PrefixMapStore,
    carriers: PrefixMapStore,
    timezones: PrefixMapStore,
}

impl PhoneNumberBackend {
    pub fn new() -> Self {
        Self {
            geocoding: PrefixMapStore::new(),
            carriers: PrefixMapStore::new(),
            timezones: PrefixMapStore::new(),
        }
    }

    /// Geocoding descriptions keyed by language.
    pub fn geocoding(&self) -> &PrefixMapStore {
        &self.geocoding
    }

    /// Carrier names keyed by language.
    pub fn carriers(&self) -> &PrefixMapStore {
        &self.carriers
    }

    pub fn load_timezones<R: BufRead>(&self, reader: R) -> Result<(), PrefixFileError> {
        self.timezones.load(TIMEZONES_KEY, reader)
    }

    pub fn load_timezones_str(&self, data: &str) -> Result<(), PrefixFileError> {
        self.timezones.load_str(TIMEZONES_KEY, data)
    }

    fn lookup_description(
        store: &PrefixMapStore,
        e164: &str,
        language: &str,
    ) -> Result<String, LookupError> {
        let map = store.get(language).ok_or_else(|| LookupError::NoData {
            language: language.to_owned(),
        })?;
        map.lookup_e164(e164)
            .filter(|description| !description.is_empty())
            .map(str::to_owned)
            .ok_or(LookupError::NoMatch)
    }

    /// Metadata of the region `number` belongs to.
    ///
    /// Works on the national significant number including its leading
    /// zeros, so Italian fixed-line numbers resolve to their region.
    fn get_metadata_for_number(number: &PhoneNumber) -> Option<&'static Metadata> {
        let code = number.code().value();
        let national_number = number.national().to_string();
        let regions = DATABASE.region(&code)?;

        if let [region] = regions.as_slice() {
            return if *region == RegionCode::un001() {
                DATABASE.by_code(&code)?.into_iter().next()
            } else {
                DATABASE.by_id(*region)
            };
        }
        // main region of the calling code comes first
        regions
            .into_iter()
            .filter_map(|region| DATABASE.by_id(region))
            .find(|metadata| match metadata.leading_digits() {
                Some(leading_digits) => leading_digits
                    .find(&national_number)
                    .is_some_and(|found| found.start() == 0),
                None => {
                    Self::get_number_type_helper(&national_number, metadata)
                        != PhoneNumberType::Unknown
                }
            })
    }

    fn get_number_type_helper(national_number: &str, metadata: &Metadata) -> PhoneNumberType {
        let descriptors = metadata.descriptors();
        let matches = |descriptor: Option<&Descriptor>| {
            descriptor.is_some_and(|descriptor| descriptor.is_match(national_number))
        };

        if !descriptors.general().is_match(national_number) {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return PhoneNumberType::Unknown;
        }
        let specific = [
            (descriptors.premium_rate(), PhoneNumberType::PremiumRate),
            (descriptors.toll_free(), PhoneNumberType::TollFree),
            (descriptors.shared_cost(), PhoneNumberType::SharedCost),
            (descriptors.voip(), PhoneNumberType::VoIP),
            (descriptors.personal_number(), PhoneNumberType::PersonalNumber),
            (descriptors.pager(), PhoneNumberType::Pager),
            (descriptors.uan(), PhoneNumberType::UAN),
            (descriptors.voicemail(), PhoneNumberType::VoiceMail),
        ];
        if let Some((_, number_type)) = specific
            .into_iter()
            .find(|(descriptor, _)| matches(*descriptor))
        {
            trace!("Number '{national_number}' is of type {number_type}");
            return number_type;
        }

        let same_mobile_and_fixed_line_pattern = descriptors
            .fixed_line()
            .map(|descriptor| descriptor.national_number().as_str())
            == descriptors
                .mobile()
                .map(|descriptor| descriptor.national_number().as_str());

        if matches(descriptors.fixed_line()) {
            if same_mobile_and_fixed_line_pattern || matches(descriptors.mobile()) {
                trace!("Number '{national_number}' is fixed-line or mobile");
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national_number}' is a fixed line number");
            return PhoneNumberType::FixedLine;
        }
        if !same_mobile_and_fixed_line_pattern && matches(descriptors.mobile()) {
            trace!("Number '{national_number}' is a mobile number");
            return PhoneNumberType::Mobile;
        }
        trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern");
        PhoneNumberType::Unknown
    }
}

impl Default for PhoneNumberBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberIntelligence for PhoneNumberBackend {
    type Number = PhoneNumber;
    type Error = ParseError;

    fn parse(&self, raw: &str, region: &str) -> Result<PhoneNumber, ParseError> {
        let input = dec_from_char::normalize_decimals(raw);

        let country = if input.trim_start().starts_with(|c: char| PLUS_CHARS.contains(c)) {
            // the calling code is part of the input, a default region would
            // only strip its national prefix from the number
            None
        } else {
            match region.to_ascii_uppercase().parse::<country::Id>() {
                Ok(id) => Some(id),
                Err(_) => {
                    trace!("Unknown region '{}'; parsing '{}' without default region", region, raw);
                    None
                }
            }
        };

        match panic::catch_unwind(move || phonenumber::parse(country, input)) {
            Ok(result) => Ok(result?),
            Err(_) => {
                error!("phonenumber crate panicked while parsing '{}'", raw);
                Err(ParseError::ParserPanicked(raw.to_owned()))
            }
        }
    }

    fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn format(&self, number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        let mode = match number_format {
            PhoneNumberFormat::E164 => Mode::E164,
            PhoneNumberFormat::International => Mode::International,
            PhoneNumberFormat::National => Mode::National,
            PhoneNumberFormat::RFC3966 => Mode::Rfc3966,
        };
        phonenumber::format(number).mode(mode).to_string()
    }

    fn get_number_type(&self, number: &PhoneNumber) -> PhoneNumberType {
        match Self::get_metadata_for_number(number) {
            Some(metadata) => {
                Self::get_number_type_helper(&number.national().to_string(), metadata)
            }
            None => PhoneNumberType::Unknown,
        }
    }

    fn get_geocoding_for_number(
        &self,
        number: &PhoneNumber,
        language: &str,
    ) -> Result<String, LookupError> {
        if !self.is_valid_number(number) {
            return Err(LookupError::InvalidNumber);
        }
        let e164 = self.format(number, PhoneNumberFormat::E164);
        let fallback = LanguageCode::get_default();

        match Self::lookup_description(&self.geocoding, &e164, language) {
            Err(err) if language != fallback && LanguageCode::may_fall_back_to_english(language) => {
                trace!("Geocoding '{}' in {} failed ({}); trying {}", e164, language, err, fallback);
                Self::lookup_description(&self.geocoding, &e164, fallback)
            }
            result => result,
        }
    }

    fn get_timezones_for_number(&self, number: &PhoneNumber) -> Result<Vec<String>, LookupError> {
        let map = self
            .timezones
            .get(TIMEZONES_KEY)
            .ok_or(LookupError::NoTimezoneData)?;
        let e164 = self.format(number, PhoneNumberFormat::E164);
        let zones = map.lookup_e164(&e164).ok_or(LookupError::NoMatch)?;

        Ok(zones
            .split(TIMEZONE_SEPARATOR)
            .map(str::trim)
            .filter(|zone| !zone.is_empty())
            .map(str::to_owned)
            .collect())
    }

    fn get_region_code_for_number(&self, number: &PhoneNumber) -> String {
        match Self::get_metadata_for_number(number) {
            Some(metadata) => metadata.id().to_owned(),
            None => {
                trace!("No region for calling code {}", number.code().value());
                RegionCode::get_unknown().to_owned()
            }
        }
    }

    fn get_carrier_for_number(
        &self,
        number: &PhoneNumber,
        language: &str,
    ) -> Result<String, LookupError> {
        let number_type = self.get_number_type(number);
        if !number_type.is_mobile() {
            return Err(LookupError::UnsupportedNumberType(number_type));
        }
        let e164 = self.format(number, PhoneNumberFormat::E164);
        Self::lookup_description(&self.carriers, &e164, language)
    }
}
