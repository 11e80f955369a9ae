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

/// sbsplot turns SBS ("BaseStation") position logs into self contained map pages showing
/// per-aircraft track polylines and the maximum reception range around the receiver.
/// The aggregation core is a single pass over the fix stream - per-aircraft state plus a
/// fixed array of direction bins, independent of input size.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use sbsplot_common::geo::GeoPoint;

pub mod config;
pub mod html;
pub mod range;
pub mod sbs;

pub mod errors;
use errors::Result;

use crate::config::RenderConfig;
use crate::range::RangeEnvelope;

/// geographic point in the form consumed by the map renderer
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<&GeoPoint> for LatLng {
    fn from (p: &GeoPoint)->Self {
        LatLng{ lat: p.latitude_degrees(), lng: p.longitude_degrees() }
    }
}

pub type Polyline = Vec<LatLng>;

/// single position steps larger than this indicate a reception gap and split the track
pub const MAX_STEP_KM: f64 = 2.5;

/// bearing change below which the previous position is considered to be on a straight line
pub const MAX_BEARING_DELTA_DEG: f64 = 2.5;

/// the open track segment of one aircraft
#[derive(Debug)]
struct AircraftTrack {
    positions: Vec<GeoPoint>, // the current open segment, never empty between updates
    azimuth: f64,             // bearing of the most recently appended step
    has_azimuth: bool,
}

impl AircraftTrack {
    fn new (pt: GeoPoint)->Self {
        AircraftTrack{ positions: vec![pt], azimuth: 0.0, has_azimuth: false }
    }
}

/// accumulates per-aircraft track polylines from a stream of position fixes.
/// Fixes of the same aircraft have to arrive in chronological order; fixes of
/// different aircraft can be interleaved arbitrarily since track state is
/// disjoint per ICAO 24 bit id
pub struct TrackStore {
    aircraft: HashMap<String,AircraftTrack>,
    completed: Vec<Polyline>,
}

impl TrackStore {
    pub fn new ()->Self {
        TrackStore{ aircraft: HashMap::new(), completed: Vec::new() }
    }

    /// number of aircraft currently tracked
    pub fn len (&self)->usize { self.aircraft.len() }

    /// process the next position fix for the given aircraft
    pub fn update (&mut self, icao24: &str, lat: f64, lon: f64) {
        let pt = GeoPoint::from_lat_lon_degrees( lat, lon);

        if let Some(track) = self.aircraft.get_mut( icao24) {
            let last = track.positions[track.positions.len()-1];
            let dist_km = last.distance_km( &pt);
            let az = last.bearing_to( &pt);

            if dist_km > MAX_STEP_KM {
                // implausible jump - the open segment is complete and pt starts a new one
                self.completed.push( track.positions.iter().map( LatLng::from).collect());
                track.positions.clear();
                track.has_azimuth = false;

            } else if track.positions.len() >= 2 && track.has_azimuth {
                // drop the previous position if the step continues an (almost) straight line.
                // The raw difference is not folded into [0,180] - a near-zero bearing change
                // that computes as ~360 deg does not count as straight (see DESIGN.md)
                if (track.azimuth - az).abs() % 360.0 < MAX_BEARING_DELTA_DEG {
                    track.positions.pop();
                }
            }

            track.positions.push( pt);
            track.azimuth = az;
            track.has_azimuth = true;

        } else {
            self.aircraft.insert( icao24.to_string(), AircraftTrack::new( pt));
        }
    }

    /// close all open segments and return the accumulated polylines.
    /// Consuming the store makes further updates unrepresentable
    pub fn finish (mut self)->Vec<Polyline> {
        for (_,track) in self.aircraft.drain() {
            if !track.positions.is_empty() {
                self.completed.push( track.positions.iter().map( LatLng::from).collect());
            }
        }
        self.completed
    }
}

impl Default for TrackStore {
    fn default ()->Self { TrackStore::new() }
}

/// single pass over one SBS log: feed every position fix to both aggregators,
/// then render the result page
pub fn plot_sbs_file (input: &Path, output: &Path, center: LatLng, config: &RenderConfig)->Result<u64> {
    let center_pt = GeoPoint::from_lat_lon_degrees( center.lat, center.lng);

    let mut tracks = TrackStore::new();
    let mut envelope = RangeEnvelope::new( center_pt, range::DEFAULT_BINS);

    let file = File::open( input)?;
    let n_fixes = sbs::read_fixes( file, |fix| {
        tracks.update( &fix.icao24, fix.lat, fix.lon);
        envelope.update( fix.lat, fix.lon);
    })?;

    debug!("{}: {} position fixes for {} aircraft", input.display(), n_fixes, tracks.len());

    let edges: Vec<LatLng> = envelope.polygon().iter().map( LatLng::from).collect();
    let polys = tracks.finish();

    let title = input.display().to_string();
    let mut writer = BufWriter::new( File::create( output)?);
    html::write_page( &mut writer, &title, center, &polys, &edges, config)?;

    Ok(n_fixes)
}
