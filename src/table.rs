//! Confidence table lookup for raw BGR samples
//!
//! The table is learned offline (a KNN over successful scans, persisted as
//! a full lookup table) and maps every possible 24-bit BGR value to six
//! per-color confidence scores. It is loaded once, in a single contiguous
//! read, and is read-only for the lifetime of the process; `&self` lookups
//! are safe from any number of threads.
//!
//! ## File format
//!
//! Raw little-endian contiguous array of `u16[16_777_216][6]`. The entry
//! for a sample is at linear offset `((b * 256) + g) * 256 + r`; the six
//! scores are in face order U, R, F, D, L, B.

use crate::color::COLOR_COUNT;
use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Number of distinct 24-bit BGR values.
pub const N_BGRS: usize = 1 << 24;

/// Exact size of a confidence table file in bytes.
pub const TABLE_FILE_BYTES: u64 = (N_BGRS * COLOR_COUNT * 2) as u64;

/// Default table file name, resolved in the working directory.
pub const DEFAULT_TABLE_PATH: &str = "scan.tbl";

/// One raw color sample in OpenCV channel order (blue, green, red).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bgr {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Bgr {
    /// Create a sample from its three channels.
    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Linear offset of this sample's entry in the confidence table.
    pub(crate) fn table_index(self) -> usize {
        ((self.b as usize) * 256 + self.g as usize) * 256 + self.r as usize
    }
}

impl From<[u8; 3]> for Bgr {
    fn from(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }
}

/// Immutable lookup from BGR samples to per-color confidence scores.
///
/// Higher scores mean higher confidence that a pixel of that BGR value
/// belongs to the color. The full table occupies about 192 MiB.
pub struct ConfidenceTable {
    scores: Vec<[u16; COLOR_COUNT]>,
}

impl ConfidenceTable {
    /// Load a confidence table from a binary file.
    ///
    /// The file must be exactly [`TABLE_FILE_BYTES`] long; a missing or
    /// truncated file fails before any scores are materialized.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let metadata = fs::metadata(path).map_err(|e| MatchError::table_io(path, e))?;
        if metadata.len() != TABLE_FILE_BYTES {
            return Err(MatchError::TableSize {
                actual: metadata.len(),
                expected: TABLE_FILE_BYTES,
            });
        }

        let raw = fs::read(path).map_err(|e| MatchError::table_io(path, e))?;
        if raw.len() as u64 != TABLE_FILE_BYTES {
            // File changed between stat and read
            return Err(MatchError::TableSize {
                actual: raw.len() as u64,
                expected: TABLE_FILE_BYTES,
            });
        }

        let mut scores = vec![[0u16; COLOR_COUNT]; N_BGRS];
        for (entry, chunk) in scores.iter_mut().zip(raw.chunks_exact(COLOR_COUNT * 2)) {
            for (score, bytes) in entry.iter_mut().zip(chunk.chunks_exact(2)) {
                *score = u16::from_le_bytes([bytes[0], bytes[1]]);
            }
        }

        tracing::info!(path = %path.display(), "confidence table loaded");
        Ok(Self { scores })
    }

    /// Build a table from an in-memory score array.
    ///
    /// This is the shape the offline trainer produces before persisting;
    /// it must cover the full BGR space.
    pub fn from_scores(scores: Vec<[u16; COLOR_COUNT]>) -> Result<Self> {
        if scores.len() != N_BGRS {
            return Err(MatchError::ScoreCount {
                actual: scores.len(),
                expected: N_BGRS,
            });
        }
        Ok(Self { scores })
    }

    /// The six per-color confidence scores for a sample, in face order
    /// U, R, F, D, L, B.
    pub fn scores(&self, bgr: Bgr) -> [u16; COLOR_COUNT] {
        self.scores[bgr.table_index()]
    }
}

impl fmt::Debug for ConfidenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfidenceTable")
            .field("entries", &self.scores.len())
            .finish()
    }
}
