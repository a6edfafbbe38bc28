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

use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::PathBuf;

use crate::utils::out_file;

pub fn hexdump(input: &PathBuf, count: usize, output: &Option<PathBuf>) -> Result<()> {
    info!("Reading input file: {input:?}");
    let data = makehex::read_input(input)?;

    let mut w = out_file(output.as_ref())?;
    info!("Writing {count} lines");
    makehex::write_lines(&mut w, &data, count)
        .and_then(|_| w.flush())
        .with_context(|| format!("Failed to write output: {output:?}"))?;

    Ok(())
}
