//! # Facelet Match
//!
//! A Rust crate for matching raw Rubik's cube color samples to a
//! physically realizable cube.
//!
//! Given 54 per-facelet BGR samples, the matcher produces the 54-letter
//! face string a cube solver consumes, or reports a scan error. Naive
//! per-facelet nearest-color classification fails under strong reflections
//! and uneven lighting; robustness here comes from combining:
//! - a learned per-pixel confidence table (BGR -> six per-color scores),
//! - constraint propagation over the cube's corner and edge cubies, and
//! - best-first search with bounded backtracking that tries colors in
//!   descending confidence order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use facelet_match::{Bgr, ColorMatcher, ConfidenceTable};
//!
//! let table = ConfidenceTable::load("scan.tbl")?;
//! let matcher = ColorMatcher::new(table);
//!
//! let bgrs = [Bgr::new(96, 149, 75); 54]; // one sample per facelet
//! match matcher.match_colors(&bgrs) {
//!     Ok(cube) => println!("{}", cube),
//!     Err(e) if e.is_scan_error() => eprintln!("please rescan: {}", e),
//!     Err(e) => return Err(e),
//! }
//! # Ok::<(), facelet_match::MatchError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod facecube;
pub mod matcher;
pub mod propagation;
pub mod table;

pub use color::{Color, ColorSet, COLOR_COUNT};
pub use config::MatcherConfig;
pub use constants::N_FACELETS;
pub use error::{MatchError, Result};
pub use facecube::{FaceCube, ResolvedCubie};
pub use matcher::{ColorMatcher, DEFAULT_ATTEMPTS};
pub use table::{Bgr, ConfidenceTable, DEFAULT_TABLE_PATH, N_BGRS, TABLE_FILE_BYTES};
