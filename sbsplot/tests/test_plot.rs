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

use std::fs;

use sbsplot::config::RenderConfig;
use sbsplot::{plot_sbs_file, LatLng};

const SBS_LOG: &'static str = "\
MSG,3,111,11111,A04424,111111,2016/03/11,13:07:05.343,2016/03/11,13:07:05.288,,11025,,,0.0,0.0,,,,,,0
MSG,3,111,11111,A04424,111111,2016/03/11,13:07:06.343,2016/03/11,13:07:06.288,,11025,,,0.0,0.01,,,,,,0
MSG,3,111,11111,A04424,111111,2016/03/11,13:07:55.343,2016/03/11,13:07:55.288,,11025,,,0.0,5.0,,,,,,0
";

#[test]
fn test_plot_sbs_file () {
    // names include the process id so concurrent test runs do not collide in temp_dir
    let dir = std::env::temp_dir();
    let base = format!("test_plot-{}.sbs", std::process::id());
    let input = dir.join( &base);
    let output = dir.join( format!("plot-{}.html", base));
    fs::write( &input, SBS_LOG).unwrap();

    let center = LatLng{ lat: 0.0, lng: 0.0 };
    let n_fixes = plot_sbs_file( &input, &output, center, &RenderConfig::default()).unwrap();
    assert_eq!( n_fixes, 3);

    let page = fs::read_to_string( &output).unwrap();

    // the gap between the 2nd and 3rd fix splits the track into two polylines
    assert!( page.contains( r#"const polys = [[{"lat":0.0,"lng":0.0},{"lat":0.0,"lng":0.01}],[{"lat":0.0,"lng":5.0}]]"#));
    assert!( page.contains("const edges = ["));

    fs::remove_file( &input);
    fs::remove_file( &output);
}

#[test]
fn test_missing_input_is_reported () {
    let dir = std::env::temp_dir();
    let input = dir.join( format!("no_such_file-{}.sbs", std::process::id()));
    let output = dir.join("plot-no_such_file.sbs.html");

    let center = LatLng{ lat: 0.0, lng: 0.0 };
    assert!( plot_sbs_file( &input, &output, center, &RenderConfig::default()).is_err());
}
