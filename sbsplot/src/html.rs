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

/// generator for the self contained Google Maps page. The computed geometries are
/// embedded as JSON consts; the page needs no server besides the maps API itself

use std::io::Write;

use crate::config::RenderConfig;
use crate::errors::Result;
use crate::{LatLng, Polyline};

/// write the map page showing track polylines, the range envelope polygon and
/// fixed-radius reference rings around the receiver
pub fn write_page<W: Write> (w: &mut W, title: &str, center: LatLng, tracks: &[Polyline],
                             envelope: &[LatLng], config: &RenderConfig)->Result<()>
{
    let polys = serde_json::to_string( tracks)?;
    let edges = serde_json::to_string( envelope)?;
    let center = serde_json::to_string( &center)?;
    let radii = serde_json::to_string( &config.ring_radii_nm)?;

    write!( w, r#"<!DOCTYPE html>
<html>
<head>
	<meta name="viewport" content="initial-scale=1.0, user-scalable=no">
	<meta charset="utf-8">
	<title>{title}</title>
	<style>
		html, body {{
			height: 100%;
			margin: 0;
			padding: 0;
		}}
		#map {{
			height: 100%;
		}}
	</style>
</head>
<body>
	<div id="map"></div>
	<script>
function initMap() {{
	const polys = {polys};
	const edges = {edges};
	const center = {center};

	const map = new google.maps.Map(document.getElementById('map'), {{
		zoom: {zoom},
		center: center,
		mapTypeId: google.maps.MapTypeId.TERRAIN
	}});

	const rangeCircles = {radii}
		.map(r => r * 1852)
		.map(r => new google.maps.Circle({{
			map,
			center: center,
			radius: r,
			strokeColor: '#000000',
			strokeOpacity: 0.5,
			strokeWeight: 1,
			fillColor: '#000000',
			fillOpacity: 0
		}}));

	const edgePolygon = new google.maps.Polygon({{
		path: edges,
		strokeColor: '{envelope_color}',
		strokeOpacity: 0.8,
		strokeWeight: 1,
		fillColor: '{envelope_color}',
		fillOpacity: 0.3,
		map: map
	}});

	const trackPolyLines = polys.map(p => new google.maps.Polyline({{
		path: p,
		strokeColor: '{track_color}',
		strokeOpacity: 0.25,
		strokeWeight: 1,
		map
	}}));
}}
	</script>
	<script async defer
	    src="https://maps.googleapis.com/maps/api/js?key={api_key}&callback=initMap"></script>
	</body>
</html>
"#,
        title = title,
        polys = polys,
        edges = edges,
        center = center,
        zoom = config.zoom,
        radii = radii,
        envelope_color = config.envelope_color,
        track_color = config.track_color,
        api_key = config.api_key
    )?;

    Ok(())
}
