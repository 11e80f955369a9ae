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

#![allow(unused)]

use sbsplot_common::geo::GeoPoint;

// run with  cargo test --test test_geo -- --nocapture

#[test]
fn test_distance () {
    let origin = GeoPoint::from_lat_lon_degrees( 0.0, 0.0);
    let p = GeoPoint::from_lat_lon_degrees( 0.0, 1.0);

    let d = origin.distance_km( &p);
    println!("1 deg of longitude at the equator = {d} km");
    assert!( (d - 111.195).abs() < 0.01); // one degree of arc on the mean earth radius

    assert_eq!( origin.distance_km( &origin), 0.0);
    assert!( (origin.distance_km( &p) - p.distance_km( &origin)).abs() < 1e-9);
}

#[test]
fn test_bearing () {
    let origin = GeoPoint::from_lat_lon_degrees( 0.0, 0.0);

    let east = GeoPoint::from_lat_lon_degrees( 0.0, 1.0);
    let north = GeoPoint::from_lat_lon_degrees( 1.0, 0.0);
    let west = GeoPoint::from_lat_lon_degrees( 0.0, -1.0);
    let south = GeoPoint::from_lat_lon_degrees( -1.0, 0.0);

    assert!( (origin.bearing_to( &east) - 90.0).abs() < 1e-6);
    assert!( origin.bearing_to( &north).abs() < 1e-6);
    assert!( (origin.bearing_to( &west) - 270.0).abs() < 1e-6);
    assert!( (origin.bearing_to( &south) - 180.0).abs() < 1e-6);
}

#[test]
fn test_constructor_normalization () {
    let p = GeoPoint::from_lat_lon_degrees( 0.0, 190.0);
    assert_eq!( p.longitude_degrees(), -170.0);

    let p = GeoPoint::from_lat_lon_degrees( 100.0, 0.0);
    assert_eq!( p.latitude_degrees(), 80.0);
}

#[test]
fn test_serialize () {
    let p = GeoPoint::from_lat_lon_degrees( 37.17274, -122.03935);
    let json = serde_json::to_string( &p).unwrap();
    assert_eq!( json, r#"{"lat":37.17274,"lng":-122.03935}"#);
}
