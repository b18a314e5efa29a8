//! Reference scan demo for facelet_match
//!
//! Matches a recorded set of 54 facelet samples against the learned
//! confidence table and prints the resulting face string with timing.

use facelet_match::{Bgr, ColorMatcher, MatcherConfig};
use std::{env, process, time::Instant};

/// 54 BGR means extracted from one reference camera frame.
const SAMPLE_BGRS: [[u8; 3]; 54] = [
    [96, 149, 75],
    [117, 31, 10],
    [227, 203, 198],
    [17, 221, 245],
    [0, 114, 214],
    [25, 155, 165],
    [180, 225, 236],
    [92, 24, 5],
    [20, 159, 174],
    [169, 147, 149],
    [139, 184, 130],
    [70, 142, 248],
    [110, 137, 180],
    [10, 199, 226],
    [254, 255, 251],
    [111, 142, 182],
    [88, 115, 165],
    [17, 35, 135],
    [111, 169, 250],
    [133, 142, 208],
    [98, 129, 212],
    [162, 255, 254],
    [80, 44, 22],
    [204, 212, 228],
    [104, 168, 99],
    [93, 129, 84],
    [113, 83, 80],
    [136, 139, 139],
    [161, 159, 158],
    [174, 167, 164],
    [91, 42, 26],
    [4, 10, 71],
    [134, 140, 100],
    [66, 134, 134],
    [126, 132, 93],
    [133, 143, 106],
    [74, 162, 184],
    [87, 112, 204],
    [120, 79, 63],
    [113, 88, 85],
    [152, 159, 162],
    [67, 66, 116],
    [90, 60, 56],
    [152, 171, 179],
    [38, 40, 98],
    [160, 193, 97],
    [58, 65, 119],
    [91, 120, 192],
    [52, 113, 232],
    [93, 122, 41],
    [87, 172, 177],
    [91, 218, 218],
    [79, 115, 202],
    [100, 100, 115],
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config = MatcherConfig::default();
    match args.len() {
        1 => {}
        2 => config.table_path = args[1].clone().into(),
        _ => {
            eprintln!("Usage: {} [table_path]", args[0]);
            eprintln!();
            eprintln!("Match the built-in reference scan against a confidence table");
            eprintln!("(default: scan.tbl in the working directory).");
            process::exit(1);
        }
    }

    let matcher = match ColorMatcher::from_config(&config) {
        Ok(matcher) => matcher,
        Err(error) => {
            eprintln!("Failed to initialize matcher: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    let bgrs = SAMPLE_BGRS.map(Bgr::from);
    let start = Instant::now();
    match matcher.match_colors(&bgrs) {
        Ok(cube) => {
            let elapsed = start.elapsed();
            println!("{}", cube);
            eprintln!();
            eprintln!("Match Summary:");
            eprintln!("  Physically valid: {}", cube.is_physically_valid());
            eprintln!("  Elapsed: {:.3}ms", elapsed.as_secs_f64() * 1000.0);
        }
        Err(error) => {
            eprintln!("Matching failed: {}", error);
            if error.is_scan_error() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}
