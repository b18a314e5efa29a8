//! Per-kind aggregation and cross-slot propagation
//!
//! A [`CubieBuilder`] owns the option sets of all slots of one cubie kind
//! and the aggregate facts that link them: how many slots may still carry
//! each color, which orientations and cubie identities are already pinned,
//! the running orientation sum and permutation inversion count, and the
//! permutation parity once it is known (or injected from the other kind).

use super::options::SlotOptions;
use crate::color::{Color, ColorSet, COLOR_COUNT};
use crate::constants::{corner, edge};

/// Constraint state for all slots of one cubie kind.
///
/// `N_SLOTS` is both the number of slots and the number of cubie identities
/// of the kind; `N_ORIS` is the orientation count (3 for corners, 2 for
/// edges). The whole builder is `Copy` with inline storage only, so callers
/// snapshot it with a byte copy and restore by swapping the copy back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubieBuilder<const N_SLOTS: usize, const N_ORIS: usize> {
    opts: [SlotOptions<N_ORIS>; N_SLOTS],
    /// Last-observed must-show colors per slot; bits only accumulate.
    colsets: [ColorSet; N_SLOTS],
    /// Per color, how many slots may still come to require it. Goes
    /// negative on over-forced scans, exactly like the zero crossing is the
    /// only point of interest.
    colcounts: [i8; COLOR_COUNT],
    oris: [Option<u8>; N_SLOTS],
    perm: [Option<u8>; N_SLOTS],
    par: Option<u8>,
    invcnt: u32,
    orisum: u32,
    aperm: usize,
    aoris: usize,
}

/// Builder over the 8 corner slots.
pub type CornerBuilder = CubieBuilder<{ corner::N_SLOTS }, { corner::N_ORIS }>;

/// Builder over the 12 edge slots.
pub type EdgeBuilder = CubieBuilder<{ edge::N_SLOTS }, { edge::N_ORIS }>;

impl Default for CornerBuilder {
    fn default() -> Self {
        Self::new(&corner::COLORS)
    }
}

impl Default for EdgeBuilder {
    fn default() -> Self {
        Self::new(&edge::COLORS)
    }
}

impl<const N_SLOTS: usize, const N_ORIS: usize> CubieBuilder<N_SLOTS, N_ORIS> {
    /// Fresh builder with every hypothesis still open.
    pub fn new(cubie_colors: &[[Color; N_ORIS]; N_SLOTS]) -> Self {
        Self {
            opts: [SlotOptions::new(cubie_colors); N_SLOTS],
            colsets: [ColorSet::empty(); N_SLOTS],
            // each color sits on exactly 4 cubies of either kind
            colcounts: [4; COLOR_COUNT],
            oris: [None; N_SLOTS],
            perm: [None; N_SLOTS],
            par: None,
            invcnt: 0,
            orisum: 0,
            aperm: 0,
            aoris: 0,
        }
    }

    /// Assert that the facelet at `pos` of `slot` shows `col`.
    ///
    /// Cheap; the consequences are drawn by the next [`propagate`] call.
    ///
    /// [`propagate`]: Self::propagate
    pub fn assign_col(&mut self, slot: usize, pos: usize, col: Color) {
        self.opts[slot].require_color_at(pos, col);
    }

    /// Inject the permutation parity learned from the other cubie kind.
    pub fn assign_par(&mut self, par: u8) {
        self.par = Some(par);
    }

    /// Permutation parity, once known.
    pub fn parity(&self) -> Option<u8> {
        self.par
    }

    /// Orientation pinned for `slot`, if any.
    pub fn orientation(&self, slot: usize) -> Option<u8> {
        self.oris[slot]
    }

    /// Cubie identity pinned for `slot`, if any.
    pub fn cubie_at(&self, slot: usize) -> Option<u8> {
        self.perm[slot]
    }

    /// Run constraint propagation to a fixpoint.
    ///
    /// Returns `false` as soon as any slot's residual empties; the caller
    /// owns restoring the pre-assertion state in that case.
    pub fn propagate(&mut self) -> bool {
        let mut change = true;
        while change {
            change = false;

            for slot in 0..N_SLOTS {
                if self.opts[slot].is_contradicted() {
                    return false;
                }

                // Newly forced colors on this slot; the recorded set is
                // always a subset of the options' set.
                let diff = self.opts[slot].colset().symmetric_difference(self.colsets[slot]);
                self.colsets[slot] = self.colsets[slot].union(diff);
                for col in diff.iter() {
                    self.colcounts[col.index()] -= 1;
                    if self.colcounts[col.index()] == 0 {
                        // All slots of this color are accounted for; every
                        // slot not yet requiring it can never show it.
                        for other in 0..N_SLOTS {
                            if !self.opts[other].colset().contains(col) {
                                self.opts[other].exclude_color(col);
                                change = true;
                            }
                        }
                    }
                }

                change |= self.record_ori(slot);
                change |= self.record_cubie(slot);
            }

            // The last open orientation is fixed by the orientation sum
            if self.aoris == N_SLOTS - 1 {
                let n_oris = N_ORIS as u32;
                let last = ((n_oris - self.orisum % n_oris) % n_oris) as u8;
                for slot in 0..N_SLOTS {
                    if self.oris[slot].is_none() {
                        tracing::trace!(slot, ori = last, "orientation forced by parity");
                        self.opts[slot].require_ori(last);
                        // Recorded on the next sweep so that a forced
                        // orientation that is already excluded surfaces as
                        // a contradiction instead of being masked.
                        break;
                    }
                }
                change = true;
            }

            // The last two open cubies are fixed by the permutation parity
            if self.par.is_some() && self.aperm == N_SLOTS - 2 {
                self.place_last_two();
                change = true;
            }
        }

        true
    }

    /// Record a unanimous orientation for `slot`.
    fn record_ori(&mut self, slot: usize) -> bool {
        let Some(ori) = self.opts[slot].ori() else {
            return false;
        };
        if self.oris[slot].is_some() {
            return false;
        }

        self.oris[slot] = Some(ori);
        self.orisum += ori as u32;
        self.aoris += 1;
        true
    }

    /// Record a unanimous cubie identity for `slot` and eliminate it from
    /// every other slot.
    fn record_cubie(&mut self, slot: usize) -> bool {
        let Some(cubie) = self.opts[slot].cubie() else {
            return false;
        };
        if self.perm[slot].is_some() {
            return false;
        }

        self.perm[slot] = Some(cubie);
        for other in 0..slot {
            if matches!(self.perm[other], Some(p) if p > cubie) {
                self.invcnt += 1;
            }
        }
        for other in slot + 1..N_SLOTS {
            if matches!(self.perm[other], Some(p) if p < cubie) {
                self.invcnt += 1;
            }
        }
        self.aperm += 1;
        if self.aperm == N_SLOTS {
            // permutation fully determined
            self.par = Some((self.invcnt & 1) as u8);
        }

        for other in 0..N_SLOTS {
            if other != slot {
                self.opts[other].exclude_cubie(cubie);
            }
        }

        true
    }

    /// With the parity known and exactly two slots open, the two unused
    /// cubies have only one admissible placement: the two possible
    /// assignments differ by a single swap and hence by parity.
    fn place_last_two(&mut self) {
        let mut s1 = N_SLOTS;
        let mut s2 = N_SLOTS;
        for slot in 0..N_SLOTS {
            if self.perm[slot].is_none() {
                if s1 == N_SLOTS {
                    s1 = slot;
                } else {
                    s2 = slot;
                }
            }
        }

        let mut used = [false; MAX_CUBIES];
        for p in self.perm.iter().flatten() {
            used[*p as usize] = true;
        }
        let mut c1 = 0;
        while used[c1] {
            c1 += 1;
        }
        let mut c2 = c1 + 1;
        while used[c2] {
            c2 += 1;
        }

        // Inversions the natural pairing (c1 -> s1, c2 -> s2) would add
        let mut added = 0u32;
        for slot in 0..N_SLOTS {
            let Some(p) = self.perm[slot] else { continue };
            let p = p as usize;
            added += (slot < s1 && p > c1) as u32;
            added += (slot > s1 && p < c1) as u32;
            added += (slot < s2 && p > c2) as u32;
            added += (slot > s2 && p < c2) as u32;
        }
        if Some(((self.invcnt + added) & 1) as u8) != self.par {
            // flip cubie positions to fix parity
            std::mem::swap(&mut s1, &mut s2);
        }

        tracing::trace!(s1, c1, s2, c2, "placing last two cubies by parity");
        self.opts[s1].require_cubie(c1 as u8);
        self.opts[s2].require_cubie(c2 as u8);
    }
}

/// Upper bound on cubie identities of either kind, for scratch arrays.
const MAX_CUBIES: usize = 12;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{corner, edge};

    /// Assert the solved colors of every edge slot in `slots`.
    fn assign_solved_edges(builder: &mut EdgeBuilder, slots: impl IntoIterator<Item = usize>) {
        for slot in slots {
            for (pos, col) in edge::COLORS[slot].iter().enumerate() {
                builder.assign_col(slot, pos, *col);
            }
        }
    }

    #[test]
    fn test_solved_corners_propagate() {
        let mut builder = CornerBuilder::default();
        for slot in 0..corner::N_SLOTS {
            for (pos, col) in corner::COLORS[slot].iter().enumerate() {
                builder.assign_col(slot, pos, *col);
            }
        }
        assert!(builder.propagate());
        assert_eq!(builder.parity(), Some(0));
        for slot in 0..corner::N_SLOTS {
            assert_eq!(builder.cubie_at(slot), Some(slot as u8));
            assert_eq!(builder.orientation(slot), Some(0));
        }
    }

    #[test]
    fn test_swapped_edges_have_odd_parity() {
        let mut builder = EdgeBuilder::default();
        // UR and UF cubies exchanged, everything else in place
        for (pos, col) in edge::COLORS[edge::UF as usize].iter().enumerate() {
            builder.assign_col(edge::UR as usize, pos, *col);
        }
        for (pos, col) in edge::COLORS[edge::UR as usize].iter().enumerate() {
            builder.assign_col(edge::UF as usize, pos, *col);
        }
        assign_solved_edges(&mut builder, 2..edge::N_SLOTS);

        assert!(builder.propagate());
        assert_eq!(builder.parity(), Some(1));
        assert_eq!(builder.cubie_at(edge::UR as usize), Some(edge::UF));
        assert_eq!(builder.cubie_at(edge::UF as usize), Some(edge::UR));
    }

    #[test]
    fn test_contradiction_reported() {
        let mut builder = CornerBuilder::default();
        // No corner cubie shows the same color on two facelets
        builder.assign_col(0, 0, Color::F);
        builder.assign_col(0, 1, Color::F);
        assert!(!builder.propagate());
    }

    #[test]
    fn test_last_orientation_forced() {
        let mut builder = EdgeBuilder::default();
        assign_solved_edges(&mut builder, 1..edge::N_SLOTS);
        assert!(builder.propagate());

        // Eleven edges pin everything; the twelfth follows by elimination
        // and its orientation by the orientation sum.
        assert_eq!(builder.cubie_at(edge::UR as usize), Some(edge::UR));
        assert_eq!(builder.orientation(edge::UR as usize), Some(0));
        assert_eq!(builder.parity(), Some(0));
    }

    #[test]
    fn test_last_two_cubies_follow_parity() {
        // Ten edges solved, UR and UF open: even parity keeps them home
        let mut builder = EdgeBuilder::default();
        assign_solved_edges(&mut builder, 2..edge::N_SLOTS);
        assert!(builder.propagate());
        assert_eq!(builder.cubie_at(edge::UR as usize), None);

        builder.assign_par(0);
        assert!(builder.propagate());
        assert_eq!(builder.cubie_at(edge::UR as usize), Some(edge::UR));
        assert_eq!(builder.cubie_at(edge::UF as usize), Some(edge::UF));
    }

    #[test]
    fn test_last_two_cubies_swap_on_odd_parity() {
        let mut builder = EdgeBuilder::default();
        assign_solved_edges(&mut builder, 2..edge::N_SLOTS);
        builder.assign_par(1);
        assert!(builder.propagate());
        assert_eq!(builder.cubie_at(edge::UR as usize), Some(edge::UF));
        assert_eq!(builder.cubie_at(edge::UF as usize), Some(edge::UR));
    }

    #[test]
    fn test_color_count_exhaustion_cascades() {
        let mut builder = CornerBuilder::default();
        // U at position 0 of four slots claims all four U-corners
        for slot in 0..4 {
            builder.assign_col(slot, 0, Color::U);
        }
        assert!(builder.propagate());

        // A fifth slot can no longer show U anywhere
        builder.assign_col(4, 0, Color::U);
        assert!(!builder.propagate());
    }

    #[test]
    fn test_propagation_idempotent() {
        let mut builder = EdgeBuilder::default();
        assign_solved_edges(&mut builder, [0, 3, 7, 9]);
        assert!(builder.propagate());

        let converged = builder;
        assert!(builder.propagate());
        assert_eq!(builder, converged);
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let mut builder = CornerBuilder::default();
        builder.assign_col(2, 0, Color::U);
        assert!(builder.propagate());

        let snapshot = builder;
        builder.assign_col(3, 1, Color::B);
        assert!(builder.propagate());
        assert_ne!(builder, snapshot);

        builder = snapshot;
        assert_eq!(builder, snapshot);
    }
}
