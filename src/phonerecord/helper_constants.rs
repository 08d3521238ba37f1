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

// ASCII and full-width plus signs leading an international number.
pub const PLUS_CHARS: &'static str = "+\u{FF0B}";

// Any run of characters that is neither a numeric character nor a plus sign.
// Regions format international numbers with different separators (hyphens
// in the US, spaces in Taiwan and the UK), so the segments are whatever is
// left between such runs.
pub const SEGMENT_SEPARATOR: &'static str = r"[^+\p{N}]+";

// Segment counts of the numbering plans the record builder can decompose.
// US, Canada, Mexico et al. use country code, NDC, LDC and subscriber number.
pub const SEGMENTS_WITH_LOCAL_EXCHANGE: usize = 4;
// UK and most others have no separate local exchange code.
pub const SEGMENTS_WITHOUT_LOCAL_EXCHANGE: usize = 3;
