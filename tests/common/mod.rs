//! Shared helpers for the integration and property test suites
//!
//! Provides a matcher over a synthetic confidence table plus a cubie-level
//! cube description that can paint the 54 facelets of any physically
//! realizable cube.

#![allow(dead_code)] // each test binary uses its own subset

use facelet_match::constants::{corner, edge, facelet, N_FACELETS};
use facelet_match::{Bgr, Color, ColorMatcher, ConfidenceTable, COLOR_COUNT};
use std::sync::OnceLock;

/// The BGR value the synthetic table scores highest for `color`.
pub fn bgr_for(color: Color) -> Bgr {
    Bgr::new(color.index() as u8, 0, 0)
}

/// A second BGR value peaking at the same `color` with different scores.
pub fn bgr_for_alt(color: Color) -> Bgr {
    Bgr::new(color.index() as u8, 1, 0)
}

/// A BGR value whose synthetic table row is all zeros.
pub fn blank_bgr() -> Bgr {
    Bgr::new(255, 255, 255)
}

/// Matcher over the synthetic table, shared by all tests in a binary.
///
/// For each color c, the row of [`bgr_for`]`(c)` peaks at c with distinct
/// lower scores for the other colors (so retry order is deterministic);
/// [`bgr_for_alt`]`(c)` peaks at c too, with a different profile; every
/// other row is zero.
pub fn matcher() -> &'static ColorMatcher {
    static MATCHER: OnceLock<ColorMatcher> = OnceLock::new();
    MATCHER.get_or_init(|| {
        let mut scores = vec![[0u16; COLOR_COUNT]; facelet_match::N_BGRS];
        for primary in Color::all() {
            let mut row = [0u16; COLOR_COUNT];
            let mut alt_row = [0u16; COLOR_COUNT];
            for c in Color::all() {
                if c == primary {
                    row[c.index()] = 1000;
                    alt_row[c.index()] = 900;
                } else {
                    row[c.index()] = 400 - 10 * c.index() as u16;
                    alt_row[c.index()] = 300 - 10 * c.index() as u16;
                }
            }
            scores[bgr_index(bgr_for(primary))] = row;
            scores[bgr_index(bgr_for_alt(primary))] = alt_row;
        }
        let table = ConfidenceTable::from_scores(scores).expect("full score array");
        ColorMatcher::new(table)
    })
}

fn bgr_index(bgr: Bgr) -> usize {
    ((bgr.b as usize) * 256 + bgr.g as usize) * 256 + bgr.r as usize
}

/// Map facelet colors to the BGR samples the synthetic table recognizes.
pub fn bgrs_for(facelets: &[Color; N_FACELETS]) -> [Bgr; N_FACELETS] {
    facelets.map(bgr_for)
}

/// A cube described at the cubie level: which cubie sits in each slot and
/// how it is rotated there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    pub corner_perm: [u8; corner::N_SLOTS],
    pub corner_ori: [u8; corner::N_SLOTS],
    pub edge_perm: [u8; edge::N_SLOTS],
    pub edge_ori: [u8; edge::N_SLOTS],
}

impl CubeState {
    pub fn solved() -> Self {
        Self {
            corner_perm: [0, 1, 2, 3, 4, 5, 6, 7],
            corner_ori: [0; corner::N_SLOTS],
            edge_perm: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            edge_ori: [0; edge::N_SLOTS],
        }
    }

    /// Whether the state satisfies the constraints of a real cube.
    pub fn is_realizable(&self) -> bool {
        let corner_twist: u32 = self.corner_ori.iter().map(|&o| o as u32).sum();
        let edge_flip: u32 = self.edge_ori.iter().map(|&o| o as u32).sum();
        corner_twist % corner::N_ORIS as u32 == 0
            && edge_flip % edge::N_ORIS as u32 == 0
            && parity(&self.corner_perm) == parity(&self.edge_perm)
    }

    /// Paint the facelets this cube shows.
    pub fn paint(&self) -> [Color; N_FACELETS] {
        let mut facelets = [Color::U; N_FACELETS];
        for color in Color::all() {
            facelets[color.index() * facelet::PER_FACE + facelet::CENTER] = color;
        }
        for f in 0..N_FACELETS {
            let Some(loc) = facelet::locate(f) else {
                continue;
            };
            facelets[f] = match loc.kind {
                facelet::CubieKind::Corner => {
                    let cubie = self.corner_perm[loc.slot] as usize;
                    let ori = self.corner_ori[loc.slot] as usize;
                    corner::COLORS[cubie][(loc.pos + ori) % corner::N_ORIS]
                }
                facelet::CubieKind::Edge => {
                    let cubie = self.edge_perm[loc.slot] as usize;
                    let ori = self.edge_ori[loc.slot] as usize;
                    edge::COLORS[cubie][(loc.pos + ori) % edge::N_ORIS]
                }
            };
        }
        facelets
    }

    /// The face string this cube shows.
    pub fn face_string(&self) -> String {
        self.paint().iter().map(|c| c.to_char()).collect()
    }
}

/// Permutation parity as the inversion count modulo 2.
pub fn parity(perm: &[u8]) -> u8 {
    let mut inversions = 0u32;
    for i in 0..perm.len() {
        for j in i + 1..perm.len() {
            if perm[i] > perm[j] {
                inversions += 1;
            }
        }
    }
    (inversions % 2) as u8
}
