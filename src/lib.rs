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

mod interfaces;
mod phonerecord;
mod backend;
pub mod prefix_mapper;
pub mod i18n;

#[cfg(test)]
mod tests;

pub use interfaces::NumberIntelligence;
pub use backend::PhoneNumberBackend;
pub use phonerecord::{
    parse_phone, PHONE_RECORD_BUILDER,
    config::RecordBuilderConfig,
    enums::{PhoneNumberFormat, PhoneNumberType},
    errors::{LookupError, ParseError},
    helper_functions::split_phone,
    record::Record,
    record_builder::RecordBuilder,
};
