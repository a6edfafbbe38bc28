// Copyright 2024, The Horizen Foundation
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use core::fmt;

/// Token emitted for an index past the end of the input.
pub const FILL: &str = "0";

/// One line of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexLine {
    /// A byte from the input, printed as two lowercase hex digits.
    Byte(u8),
    /// Padding past the end of the input, printed as a bare `0`.
    Fill,
}

impl HexLine {
    pub fn at(data: &[u8], index: usize) -> Self {
        data.get(index).copied().map_or(HexLine::Fill, HexLine::Byte)
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, HexLine::Fill)
    }
}

impl fmt::Display for HexLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexLine::Byte(b) => f.write_str(&hex::encode([*b])),
            HexLine::Fill => f.write_str(FILL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0x00, "00")]
    #[case(0x05, "05")]
    #[case(0x0a, "0a")]
    #[case(0xab, "ab")]
    #[case(0xff, "ff")]
    fn byte_is_two_lowercase_digits(#[case] byte: u8, #[case] expected: &str) {
        assert_eq!(HexLine::Byte(byte).to_string(), expected);
    }

    #[test]
    fn fill_is_single_zero() {
        assert_eq!(HexLine::Fill.to_string(), "0");
    }

    #[rstest]
    #[case(0, HexLine::Byte(0x00))]
    #[case(2, HexLine::Byte(0x05))]
    #[case(3, HexLine::Fill)]
    #[case(usize::MAX, HexLine::Fill)]
    fn at_checks_bounds(#[case] index: usize, #[case] expected: HexLine) {
        let data = [0x00, 0xff, 0x05];
        assert_eq!(HexLine::at(&data, index), expected);
    }

    #[test]
    fn every_byte_matches_hex_pattern() {
        for b in 0..=u8::MAX {
            let s = HexLine::Byte(b).to_string();
            assert_eq!(s.len(), 2);
            assert!(s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
            assert!(!HexLine::Byte(b).is_fill());
        }
    }
}
