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

use std::{collections::BTreeMap, io::BufRead, num::ParseIntError};

use log::warn;
use thiserror::Error;

const MAX_LINE_LENGTH: usize = 2 * 1024;

#[derive(Debug, Error)]
pub enum PrefixFileError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Failed to parse prefix '{prefix}' on line {line_num}: {source}")]
    PrefixParseError {
        prefix: String,
        line_num: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("Line {line_num} has no '|' separator")]
    MissingSeparator { line_num: usize },
}

/// Reads `<prefix>|<description>` lines into `prefixes`.
///
/// Blank lines and lines starting with `#` are ignored. Entries with an
/// empty prefix are skipped; a repeated prefix overwrites the earlier one.
pub fn parse_prefixes<R: BufRead>(
    mut reader: R,
    prefixes: &mut BTreeMap<u64, String>,
) -> Result<(), PrefixFileError> {
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if bytes_read > MAX_LINE_LENGTH {
            return Err(PrefixFileError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((prefix_str, desc)) = line.split_once('|') else {
            return Err(PrefixFileError::MissingSeparator { line_num: line_number });
        };
        if prefix_str.is_empty() {
            warn!("Skipping entry with empty prefix on line {}", line_number);
            continue;
        }
        let prefix_code = prefix_str.parse().map_err(|e| PrefixFileError::PrefixParseError {
            prefix: prefix_str.to_string(),
            line_num: line_number,
            source: e,
        })?;
        prefixes.insert(prefix_code, desc.to_string());
    }

    Ok(())
}
