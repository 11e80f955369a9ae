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

/// this module provides support for point geometries on a spherical earth surface.
/// We use the [geo](https://docs.rs/geo/latest/geo/index.html) crate for the underlying
/// great-circle algorithms and employ the Rust new type pattern to pin down the value
/// semantics (geodetic degrees, normalized latitude/longitude) the foundation crate
/// leaves open.

use std::fmt;

use geo::{Bearing, Distance, Point};
use geo::algorithm::line_measures::metric_spaces::Haversine;
use serde::ser::{Serialize as SerializeTrait, SerializeStruct, Serializer};

use crate::angle::{normalize_180, normalize_360, normalize_90};

/// a wrapper for geo::Point that uses geodetic degrees stored as f64.
/// Note that geo::Point stores (x,y), i.e. longitude comes first
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lat_lon_degrees (lat: f64, lon: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    #[inline] pub fn latitude_degrees (&self)->f64 { self.0.y() }
    #[inline] pub fn longitude_degrees (&self)->f64 { self.0.x() }

    pub fn point<'a> (&'a self) -> &'a Point { &self.0 }

    /// great-circle distance to `other` in kilometers
    pub fn distance_km (&self, other: &GeoPoint)->f64 {
        Haversine.distance( self.0, other.0) / 1000.0
    }

    /// initial bearing towards `other` in degrees [0,360), with 0 = north, increasing clockwise
    pub fn bearing_to (&self, other: &GeoPoint)->f64 {
        normalize_360( Haversine.bearing( self.0, other.0))
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.latitude_degrees(), self.longitude_degrees())
    }
}

// serialized in the {lat,lng} order map renderers consume
impl SerializeTrait for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPoint", 2)?;
        state.serialize_field("lat", &self.latitude_degrees())?;
        state.serialize_field("lng", &self.longitude_degrees())?;
        state.end()
    }
}
