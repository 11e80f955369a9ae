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

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::Result;

/// presentation settings for the generated map page, passed explicitly into the
/// render call. All fields have defaults so a config file only has to override
/// what it changes
#[derive(Debug,Clone,Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Google Maps JavaScript API key embedded into the page
    pub api_key: String,

    /// initial map zoom level
    pub zoom: u32,

    /// radii of the fixed reference rings around the receiver, in nautical miles
    pub ring_radii_nm: Vec<f64>,

    /// stroke/fill color of the range envelope polygon
    pub envelope_color: String,

    /// stroke color of the track polylines
    pub track_color: String,
}

impl Default for RenderConfig {
    fn default ()->Self {
        RenderConfig {
            api_key: String::new(),
            zoom: 8,
            ring_radii_nm: vec![100.0, 150.0, 200.0],
            envelope_color: "#ffff00".to_string(),
            track_color: "#ff0000".to_string(),
        }
    }
}

/// load a RenderConfig from a RON file
pub fn load_config (path: &Path)->Result<RenderConfig> {
    let input = fs::read_to_string( path)?;
    let config: RenderConfig = ron::from_str( &input)?;
    Ok(config)
}
