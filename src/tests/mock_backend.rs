use std::sync::Mutex;

use thiserror::Error;

use crate::{interfaces::NumberIntelligence, LookupError, PhoneNumberFormat, PhoneNumberType};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Mock parse failure: {0}")]
pub struct MockParseError(pub &'static str);

/// Backend answering every query with scripted values and remembering the
/// arguments it was called with.
pub struct MockBackend {
    pub parse_error: Option<MockParseError>,
    pub valid: bool,
    pub international: String,
    pub e164: String,
    pub number_type: PhoneNumberType,
    pub region: String,
    pub geocode: Result<String, LookupError>,
    pub timezones: Result<Vec<String>, LookupError>,
    pub carrier: Result<String, LookupError>,

    pub parse_calls: Mutex<Vec<(String, String)>>,
    pub lookup_languages: Mutex<Vec<String>>,
}

impl MockBackend {
    /// A backend describing the US number `+1 212-555-1212` with every
    /// lookup succeeding.
    pub fn us_number() -> Self {
        Self {
            parse_error: None,
            valid: true,
            international: "+1 212-555-1212".to_owned(),
            e164: "+12125551212".to_owned(),
            number_type: PhoneNumberType::FixedLineOrMobile,
            region: "US".to_owned(),
            geocode: Ok("New York, NY".to_owned()),
            timezones: Ok(vec!["America/New_York".to_owned(), "America/Chicago".to_owned()]),
            carrier: Ok("Verizon".to_owned()),
            parse_calls: Mutex::new(Vec::new()),
            lookup_languages: Mutex::new(Vec::new()),
        }
    }

    /// A backend describing the UK mobile number `+44 7911 123456`.
    pub fn gb_number() -> Self {
        Self {
            international: "+44 7911 123456".to_owned(),
            e164: "+447911123456".to_owned(),
            number_type: PhoneNumberType::Mobile,
            region: "GB".to_owned(),
            geocode: Ok("United Kingdom".to_owned()),
            timezones: Ok(vec!["Europe/London".to_owned()]),
            carrier: Ok("Vodafone".to_owned()),
            ..Self::us_number()
        }
    }

    pub fn failing_parse(error: MockParseError) -> Self {
        Self {
            parse_error: Some(error),
            ..Self::us_number()
        }
    }

    pub fn with_international(mut self, international: &str) -> Self {
        self.international = international.to_owned();
        self
    }

    fn remember_language(&self, language: &str) {
        self.lookup_languages.lock().unwrap().push(language.to_owned());
    }
}

impl NumberIntelligence for MockBackend {
    type Number = String;
    type Error = MockParseError;

    fn parse(&self, raw: &str, region: &str) -> Result<String, MockParseError> {
        self.parse_calls.lock().unwrap().push((raw.to_owned(), region.to_owned()));
        match &self.parse_error {
            Some(err) => Err(err.clone()),
            None => Ok(raw.to_owned()),
        }
    }

    fn is_valid_number(&self, _number: &String) -> bool {
        self.valid
    }

    fn format(&self, _number: &String, number_format: PhoneNumberFormat) -> String {
        match number_format {
            PhoneNumberFormat::International => self.international.clone(),
            _ => self.e164.clone(),
        }
    }

    fn get_number_type(&self, _number: &String) -> PhoneNumberType {
        self.number_type
    }

    fn get_geocoding_for_number(&self, _number: &String, language: &str) -> Result<String, LookupError> {
        self.remember_language(language);
        self.geocode.clone()
    }

    fn get_timezones_for_number(&self, _number: &String) -> Result<Vec<String>, LookupError> {
        self.timezones.clone()
    }

    fn get_region_code_for_number(&self, _number: &String) -> String {
        self.region.clone()
    }

    fn get_carrier_for_number(&self, _number: &String, language: &str) -> Result<String, LookupError> {
        self.remember_language(language);
        self.carrier.clone()
    }
}
