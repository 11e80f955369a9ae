/*
 * Copyright © 2026, the sbsplot project contributors. All rights reserved.
 *
 * The “sbsplot” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sbsplot::config::{load_config, RenderConfig};
use sbsplot::{plot_sbs_file, LatLng};

/// plot aircraft tracks and receiver range from SBS ("BaseStation") logs
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// latitude of the receiver in degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// longitude of the receiver in degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// directory the HTML pages are written to
    #[arg(long, default_value = ".")]
    dest_dir: PathBuf,

    /// Google Maps API key (overrides the config file)
    #[arg(long)]
    apikey: Option<String>,

    /// optional RON render configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// SBS CSV log files to plot, one page per file
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main ()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config( path)?,
        None => RenderConfig::default()
    };
    if let Some(key) = &args.apikey { config.api_key = key.clone(); }

    let center = LatLng{ lat: args.lat, lng: args.lon };

    let mut n_plotted = 0;
    for input in &args.inputs {
        let output = args.dest_dir.join( page_file_name( input));
        match plot_sbs_file( input, &output, center, &config) {
            Ok(n_fixes) => {
                info!("{} position fixes from {} plotted to {}", n_fixes, input.display(), output.display());
                n_plotted += 1;
            }
            Err(e) => warn!("skipping {}: {}", input.display(), e) // one bad input does not abort the batch
        }
    }

    if n_plotted > 0 { Ok(()) } else { Err( anyhow!("no input file could be plotted")) }
}

fn page_file_name (input: &Path)->String {
    let base = match input.file_name() {
        Some(name) => name.to_string_lossy(),
        None => input.to_string_lossy()
    };
    format!("plot-{}.html", base)
}
