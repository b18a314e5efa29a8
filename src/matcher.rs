//! Best-first color matching with bounded backtracking
//!
//! Facelet-color assignments are tried in descending confidence order as
//! given by the learned table. Every tentative assignment is propagated
//! through the cube's cubie constraints; on contradiction the affected
//! builder state is restored and the facelet retries with its next-best
//! color, up to a bounded number of attempts per facelet. The combination
//! handles strong reflections and uneven lighting that defeat plain
//! per-facelet nearest-color classification.

use crate::color::{Color, COLOR_COUNT};
use crate::config::MatcherConfig;
use crate::constants::{facelet, N_FACELETS};
use crate::error::{MatchError, Result};
use crate::facecube::FaceCube;
use crate::propagation::{CornerBuilder, CubieBuilder, EdgeBuilder};
use crate::table::{Bgr, ConfidenceTable};
use std::collections::BinaryHeap;
use std::mem;

/// Default per-facelet retry budget; more mostly forces bad scans harder.
pub const DEFAULT_ATTEMPTS: u32 = 3;

/// Marks a (facelet, color) pair as already tried in the confidence
/// scratch. Real scores are u16, so -1 cannot collide.
const EXHAUSTED: i32 = -1;

/// Matches raw per-facelet color samples to a consistent cube.
///
/// Owns the confidence table for the lifetime of the process. A single
/// `match_colors` call owns all of its mutable state, so one matcher can
/// serve concurrent calls from multiple threads.
#[derive(Debug)]
pub struct ColorMatcher {
    table: ConfidenceTable,
    n_attempts: u32,
}

impl ColorMatcher {
    /// Create a matcher with the default retry budget.
    pub fn new(table: ConfidenceTable) -> Self {
        Self::with_attempts(table, DEFAULT_ATTEMPTS)
    }

    /// Create a matcher with an explicit per-facelet retry budget.
    pub fn with_attempts(table: ConfidenceTable, n_attempts: u32) -> Self {
        Self { table, n_attempts }
    }

    /// Load the confidence table named by `config` and apply its budget.
    pub fn from_config(config: &MatcherConfig) -> Result<Self> {
        let table = ConfidenceTable::load(&config.table_path)?;
        Ok(Self::with_attempts(table, config.n_attempts))
    }

    /// Match 54 raw samples (face-major facelet order) to a face cube.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::ScanRejected`] when no physically realizable
    /// assignment is found within the retry budget; the caller should
    /// rescan.
    pub fn match_colors(&self, bgrs: &[Bgr; N_FACELETS]) -> Result<FaceCube> {
        // Step 1: score every facelet against the learned table
        let mut conf = [[0i32; COLOR_COUNT]; N_FACELETS];
        for (row, bgr) in conf.iter_mut().zip(bgrs) {
            let scores = self.table.scores(*bgr);
            for (slot, score) in row.iter_mut().zip(scores) {
                *slot = score as i32;
            }
        }

        self.search(conf)
    }

    /// Best-first search over a prepared 54x6 confidence matrix.
    fn search(&self, mut conf: [[i32; COLOR_COUNT]; N_FACELETS]) -> Result<FaceCube> {
        let mut facelets = [Color::U; N_FACELETS];

        // Step 2: centers are fixed by their face and never queued
        for color in Color::all() {
            facelets[color.index() * facelet::PER_FACE + facelet::CENTER] = color;
        }

        // Step 3: queue every other facelet's most confident color
        let mut heap: BinaryHeap<(i32, usize, Color)> = BinaryHeap::new();
        for f in 0..N_FACELETS {
            if facelet::is_center(f) {
                continue;
            }
            if let Some((color, score)) = best_remaining(&conf[f]) {
                conf[f][color.index()] = EXHAUSTED;
                heap.push((score, f, color));
            }
        }
        let mut attempts = [self.n_attempts as i32; N_FACELETS];

        // Step 4: live builders plus shadows, so a failed assertion is
        // undone by swapping the shadow back in rather than rebuilding
        let mut corners = Box::new(CornerBuilder::default());
        let mut edges = Box::new(EdgeBuilder::default());
        let mut corners_shadow = corners.clone();
        let mut edges_shadow = edges.clone();

        // Step 5: assign facelets most-confident-first; the heap drains
        // only once every non-center facelet holds a consistent color
        while let Some((_, f, color)) = heap.pop() {
            let Some(loc) = facelet::locate(f) else {
                continue;
            };

            let ok = match loc.kind {
                facelet::CubieKind::Corner => try_assign(
                    &mut corners,
                    &mut corners_shadow,
                    &mut edges,
                    &mut edges_shadow,
                    loc,
                    color,
                ),
                facelet::CubieKind::Edge => try_assign(
                    &mut edges,
                    &mut edges_shadow,
                    &mut corners,
                    &mut corners_shadow,
                    loc,
                    color,
                ),
            };

            if ok {
                facelets[f] = color;
                continue;
            }

            tracing::debug!(facelet = f, color = %color, "assignment contradicted; backtracking");
            let Some((next, score)) = best_remaining(&conf[f]) else {
                // all six colors exhausted for this facelet
                return Err(MatchError::ScanRejected { facelet: f });
            };
            conf[f][next.index()] = EXHAUSTED;
            heap.push((score, f, next));
            attempts[f] -= 1;
            if attempts[f] < 0 {
                return Err(MatchError::ScanRejected { facelet: f });
            }
        }

        Ok(FaceCube::new(facelets))
    }
}

/// Tentatively assert one facelet color on `live` and propagate.
///
/// On success, a parity newly determined on `live` is injected into
/// `other` and propagated there as well. Both builders are snapshotted
/// before anything they take part in; on any contradiction every touched
/// builder is restored by an O(1) swap and `false` is returned.
fn try_assign<const S1: usize, const O1: usize, const S2: usize, const O2: usize>(
    live: &mut Box<CubieBuilder<S1, O1>>,
    shadow: &mut Box<CubieBuilder<S1, O1>>,
    other: &mut Box<CubieBuilder<S2, O2>>,
    other_shadow: &mut Box<CubieBuilder<S2, O2>>,
    loc: facelet::Location,
    color: Color,
) -> bool {
    **shadow = **live;
    live.assign_col(loc.slot, loc.pos, color);
    if !live.propagate() {
        mem::swap(live, shadow);
        return false;
    }

    // Whichever kind first determines its permutation parity hands it to
    // the other; the parities of a real cube are equal.
    if let (Some(par), None) = (live.parity(), other.parity()) {
        **other_shadow = **other;
        other.assign_par(par);
        tracing::debug!(par, "coupling permutation parity across cubie kinds");
        if !other.propagate() {
            mem::swap(live, shadow);
            mem::swap(other, other_shadow);
            return false;
        }
    }

    true
}

/// Highest not-yet-tried confidence for one facelet; earliest color wins
/// ties. `None` once every color has been tried.
fn best_remaining(scores: &[i32; COLOR_COUNT]) -> Option<(Color, i32)> {
    let mut best: Option<(Color, i32)> = None;
    for color in Color::all() {
        let score = scores[color.index()];
        if score == EXHAUSTED {
            continue;
        }
        match best {
            Some((_, top)) if top >= score => {}
            _ => best = Some((color, score)),
        }
    }
    best
}
