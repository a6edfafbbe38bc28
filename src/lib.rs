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

//! Turns a binary file into a listing of one hex byte per line, padded
//! with `0` lines up to a fixed count. The result is suitable for
//! `$readmemh`-style ROM initialisation.

pub mod dump;
pub mod errors;
pub mod line;

pub use dump::{dump_file, lines, read_input, write_lines};
pub use errors::DumpError;
pub use line::{HexLine, FILL};
