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

use std::borrow::Cow;

use crate::i18n::{LanguageCode, RegionCode};

/// Values substituted for empty `region` and `language` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBuilderConfig {
    default_region: Cow<'static, str>,
    default_language: Cow<'static, str>,
}

impl Default for RecordBuilderConfig {
    fn default() -> Self {
        Self {
            default_region: Cow::Borrowed(RegionCode::get_default()),
            default_language: Cow::Borrowed(LanguageCode::get_default()),
        }
    }
}

impl RecordBuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_region(mut self, region: impl Into<Cow<'static, str>>) -> Self {
        self.default_region = region.into();
        self
    }

    pub fn with_default_language(mut self, language: impl Into<Cow<'static, str>>) -> Self {
        self.default_language = language.into();
        self
    }

    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Returns `region` unless it is empty.
    pub(crate) fn resolve_region<'a>(&'a self, region: &'a str) -> &'a str {
        if region.is_empty() { self.default_region.as_ref() } else { region }
    }

    /// Returns `language` unless it is empty.
    pub(crate) fn resolve_language<'a>(&'a self, language: &'a str) -> &'a str {
        if language.is_empty() { self.default_language.as_ref() } else { language }
    }
}

#[cfg(test)]
mod tests {
    use super::RecordBuilderConfig;

    #[test]
    fn test_defaults() {
        let config = RecordBuilderConfig::default();
        assert_eq!(config.default_region(), "US");
        assert_eq!(config.default_language(), "en");
        assert_eq!(config.resolve_region(""), "US");
        assert_eq!(config.resolve_region("GB"), "GB");
        assert_eq!(config.resolve_language(""), "en");
        assert_eq!(config.resolve_language("de"), "de");
    }

    #[test]
    fn test_overrides() {
        let config = RecordBuilderConfig::new()
            .with_default_region("GB")
            .with_default_language(String::from("fr"));
        assert_eq!(config.resolve_region(""), "GB");
        assert_eq!(config.resolve_language(""), "fr");
    }
}
