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
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub fn out_file(output: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    let from_path = output
        .map(|p| File::create(p).with_context(|| format!("Failed to create output file {p:?}")))
        .transpose()?
        .map(|f| Box::new(BufWriter::new(f)) as Box<dyn Write>);

    // If no path is specified, default to stdout
    Ok(from_path.unwrap_or_else(|| Box::new(BufWriter::new(std::io::stdout())) as Box<dyn Write>))
}

pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{prelude::*, EnvFilter};

    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}
