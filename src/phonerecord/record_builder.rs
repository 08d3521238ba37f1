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

use log::{debug, trace};

use super::{
    config::RecordBuilderConfig, enums::PhoneNumberFormat, helper_functions::assign_segments,
    record::Record,
};
use crate::interfaces::NumberIntelligence;

/// Builds [`Record`]s by querying a [`NumberIntelligence`] backend.
pub struct RecordBuilder<B> {
    backend: B,
    config: RecordBuilderConfig,
}

impl<B: NumberIntelligence> RecordBuilder<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, RecordBuilderConfig::default())
    }

    pub fn with_config(backend: B, config: RecordBuilderConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &RecordBuilderConfig {
        &self.config
    }

    /// Parses `number` and collects everything the backend knows about it.
    ///
    /// Empty `region` and `language` are replaced with the configured
    /// defaults. Only a parse failure is returned as an error; geocode,
    /// timezone and carrier lookups that fail leave their field empty.
    pub fn parse_phone(&self, number: &str, region: &str, language: &str) -> Result<Record, B::Error> {
        let region = self.config.resolve_region(region);
        let language = self.config.resolve_language(language);

        let parsed = self.backend.parse(number, region)?;
        trace!("Parsed '{}' with region {}", number, region);

        let international = self.backend.format(&parsed, PhoneNumberFormat::International);
        let mut record = Record {
            valid: self.backend.is_valid_number(&parsed),
            number_type: self.backend.get_number_type(&parsed),
            language: language.to_owned(),
            ..Default::default()
        };

        match self.backend.get_geocoding_for_number(&parsed, language) {
            Ok(geocode) => record.geocode = geocode,
            Err(err) => debug!("No geocode for '{}': {}", number, err),
        }

        match self.backend.get_timezones_for_number(&parsed) {
            Ok(timezones) => match timezones.into_iter().next() {
                Some(timezone) => record.timezone = timezone,
                None => debug!("No timezone candidates for '{}'", number),
            },
            Err(err) => debug!("No timezone for '{}': {}", number, err),
        }

        record.region = self.backend.get_region_code_for_number(&parsed);
        record.e164 = self.backend.format(&parsed, PhoneNumberFormat::E164);

        assign_segments(&mut record, &international);
        record.international = international;

        match self.backend.get_carrier_for_number(&parsed, language) {
            Ok(carrier) => record.carrier = carrier,
            Err(err) => debug!("No carrier for '{}': {}", number, err),
        }

        Ok(record)
    }
}
