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

use sbsplot_common::angle::{normalize_180, normalize_360, normalize_90};

#[test]
fn test_normalize_360 () {
    assert_eq!( normalize_360(0.0), 0.0);
    assert_eq!( normalize_360(359.9), 359.9);
    assert_eq!( normalize_360(360.0), 0.0);
    assert_eq!( normalize_360(720.0), 0.0);
    assert_eq!( normalize_360(-90.0), 270.0);
    assert_eq!( normalize_360(-360.0), 0.0);
}

#[test]
fn test_normalize_180 () {
    assert_eq!( normalize_180(170.0), 170.0);
    assert_eq!( normalize_180(190.0), -170.0);
    assert_eq!( normalize_180(-190.0), 170.0);
    assert_eq!( normalize_180(540.0), 180.0);
}

#[test]
fn test_normalize_90 () {
    assert_eq!( normalize_90(45.0), 45.0);
    assert_eq!( normalize_90(100.0), 80.0);
    assert_eq!( normalize_90(-100.0), -80.0);
}
