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

use sbsplot_common::angle::normalize_360;
use sbsplot_common::geo::GeoPoint;

/// default number of direction bins (0.25 deg sectors)
pub const DEFAULT_BINS: usize = 1440;

/// farthest position observed in one compass sector
#[derive(Debug,Clone,Copy)]
struct RangeBin {
    max_distance_km: f64,
    farthest: Option<GeoPoint>,
}

/// records the farthest position ever observed from a fixed center per compass
/// direction bin. The materialized polygon approximates the boundary of the
/// receiver coverage
pub struct RangeEnvelope {
    center: GeoPoint,
    bins: Vec<RangeBin>,
}

impl RangeEnvelope {
    /// `n_bins` sets the angular resolution (sectors of 360/n_bins degrees) and has to be positive
    pub fn new (center: GeoPoint, n_bins: usize)->Self {
        assert!( n_bins > 0, "range envelope needs at least one direction bin");
        RangeEnvelope{ center, bins: vec![ RangeBin{ max_distance_km: 0.0, farthest: None }; n_bins] }
    }

    pub fn center (&self)->GeoPoint { self.center }
    pub fn n_bins (&self)->usize { self.bins.len() }

    /// map a bearing from the center to the index of the nearest bin.
    /// Bearings that round up to n_bins wrap around to bin 0
    fn bin_index (&self, azimuth_deg: f64)->usize {
        let n = self.bins.len();
        ((n as f64 * normalize_360(azimuth_deg) / 360.0).round() as usize) % n
    }

    /// record a position if it is the farthest seen so far in its direction bin.
    /// Bin maxima only ever grow; exact ties keep the first observation
    pub fn update (&mut self, lat: f64, lon: f64) {
        let pt = GeoPoint::from_lat_lon_degrees( lat, lon);
        let dist_km = self.center.distance_km( &pt);
        let az = self.center.bearing_to( &pt);

        let idx = self.bin_index( az);
        let bin = &mut self.bins[idx];
        if dist_km > bin.max_distance_km {
            bin.max_distance_km = dist_km;
            bin.farthest = Some(pt);
        }
    }

    /// max distance currently recorded for the bin holding `azimuth_deg` (0 while unset)
    pub fn max_distance_km (&self, azimuth_deg: f64)->f64 {
        self.bins[ self.bin_index(azimuth_deg)].max_distance_km
    }

    /// one vertex per bin in index order; bins without observations collapse to the
    /// center so the polygon stays closed. Idempotent, valid at any point of ingestion
    pub fn polygon (&self)->Vec<GeoPoint> {
        self.bins.iter().map( |b| b.farthest.unwrap_or( self.center)).collect()
    }
}
