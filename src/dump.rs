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

use crate::errors::{DumpError, ReadSnafu, WriteSnafu};
use crate::line::HexLine;
use log::{debug, info};
use snafu::ResultExt;
use std::io::Write;
use std::path::Path;

/// Yields exactly `count` lines: the input bytes first, then fill lines
/// once the input runs out. Bytes past `count` are never visited.
pub fn lines(data: &[u8], count: usize) -> impl ExactSizeIterator<Item = HexLine> + '_ {
    (0..count).map(move |i| HexLine::at(data, i))
}

pub fn write_lines<W: Write>(w: &mut W, data: &[u8], count: usize) -> std::io::Result<()> {
    for line in lines(data, count) {
        writeln!(w, "{line}")?;
    }
    Ok(())
}

pub fn read_input(path: &Path) -> Result<Vec<u8>, DumpError> {
    let data = std::fs::read(path).context(ReadSnafu { path })?;
    debug!("Read {} bytes from {:?}", data.len(), path);
    Ok(data)
}

/// Reads `path` completely, then writes `count` lines to `w`.
pub fn dump_file<W: Write>(path: &Path, count: usize, w: &mut W) -> Result<(), DumpError> {
    let data = read_input(path)?;

    if count > data.len() {
        info!("Padding {} bytes with {} fill lines", data.len(), count - data.len());
    } else if count < data.len() {
        info!("Truncating {} bytes to {}", data.len(), count);
    }

    write_lines(w, &data, count).context(WriteSnafu)
}
