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

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::errors::Result;

/// one validated aircraft position report
#[derive(Debug,Clone,PartialEq)]
pub struct Fix {
    pub icao24: String,
    pub lat: f64,
    pub lon: f64,
}

/// SBS as documented on http://woodair.net/SBS/Article/Barebones42_Socket_Data.htm
///
/// Message examples:
///  MSG,1,111,11111,AA2BC2,111111,2016/03/11,13:07:16.663,2016/03/11,13:07:16.626,UAL814  ,,,,,,,,,,,0
///  MSG,3,111,11111,A04424,111111,2016/03/11,13:07:05.343,2016/03/11,13:07:05.288,,11025,,,37.17274,-122.03935,,,,,,0
///
/// fields:
///   0: message type (MSG, SEL, ID, AIR, STA, CLK)
///   1: transmission type (MSG only: 1-8, 2: surface position, 3: ES airborne position)
///   4: ICAO 24 bit id (mode S transponder code, hex)
///  14: latitude
///  15: longitude
///
/// only MSG 2 and MSG 3 carry coordinates; everything else - and records with an
/// unparseable id or coordinates - yields None
pub fn parse_fix (rec: &StringRecord)->Option<Fix> {
    if rec.get(0)? != "MSG" { return None }

    let tt = rec.get(1)?;
    if tt != "2" && tt != "3" { return None }

    let icao24 = rec.get(4)?;
    u32::from_str_radix( icao24, 16).ok()?; // id has to be a valid hex transponder code

    let lat: f64 = rec.get(14)?.parse().ok()?;
    let lon: f64 = rec.get(15)?.parse().ok()?;

    Some( Fix{ icao24: icao24.to_string(), lat, lon })
}

/// read SBS messages from `reader` and pass every position fix to `f`, returning the
/// number of fixes forwarded. Malformed records are skipped silently; IO errors abort
/// the input (callers decide whether that aborts the batch)
pub fn read_fixes<R: Read> (reader: R, mut f: impl FnMut(Fix))->Result<u64> {
    let mut csv = ReaderBuilder::new()
        .has_headers( false)
        .flexible( true)
        .from_reader( reader);

    let mut n_fixes: u64 = 0;
    let mut rec = StringRecord::new();
    loop {
        match csv.read_record( &mut rec) {
            Ok(true) => {
                if let Some(fix) = parse_fix( &rec) {
                    f(fix);
                    n_fixes += 1;
                }
            }
            Ok(false) => return Ok(n_fixes),
            Err(e) => {
                if e.is_io_error() { return Err(e.into()) }
                // framing errors only invalidate this record
            }
        }
    }
}
