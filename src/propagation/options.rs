//! Residual hypothesis set for a single cubie slot
//!
//! A slot starts out with every (cubie, orientation) pair of its kind as a
//! candidate. Asserted facts only ever remove candidates, so the derived
//! summaries are refreshed exactly when the residual shrinks.

use crate::color::{Color, ColorSet};

/// Capacity of an option set. Both cubie kinds enumerate 24 candidates
/// (8 corners x 3 orientations, 12 edges x 2 orientations).
pub(crate) const MAX_CANDIDATES: usize = 24;

/// One (cubie, orientation) hypothesis with its precomputed color layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate<const N_ORIS: usize> {
    /// Color shown at each position of the slot under this hypothesis.
    cols: [Color; N_ORIS],
    colset: ColorSet,
    ori: u8,
    cubie: u8,
}

impl<const N_ORIS: usize> Candidate<N_ORIS> {
    const PLACEHOLDER: Self = Self {
        cols: [Color::U; N_ORIS],
        colset: ColorSet::empty(),
        ori: 0,
        cubie: 0,
    };
}

/// The residual set of (cubie, orientation) hypotheses for one slot.
///
/// Derived fields are kept in sync with the residual:
/// - `colset` is the intersection of the remaining candidates' color sets,
///   i.e. the colors this slot must show somewhere.
/// - `ori` / `cubie` are set once the residual agrees unanimously; they are
///   never recomputed afterwards.
/// - `contradicted` flags an emptied residual.
///
/// Fixed-capacity inline storage, no heap; the whole set is `Copy` so an
/// enclosing builder can be snapshotted with a byte copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOptions<const N_ORIS: usize> {
    opts: [Candidate<N_ORIS>; MAX_CANDIDATES],
    rem: usize,
    contradicted: bool,
    colset: ColorSet,
    ori: Option<u8>,
    cubie: Option<u8>,
}

impl<const N_ORIS: usize> SlotOptions<N_ORIS> {
    /// Build the full candidate set from the canonical cubie color table of
    /// one kind. Candidate (c, o) shows `cubie_colors[c][(p + o) % N_ORIS]`
    /// at position p.
    pub fn new(cubie_colors: &[[Color; N_ORIS]]) -> Self {
        debug_assert!(cubie_colors.len() * N_ORIS <= MAX_CANDIDATES);

        let mut opts = [Candidate::PLACEHOLDER; MAX_CANDIDATES];
        let mut rem = 0;
        for (cubie, colors) in cubie_colors.iter().enumerate() {
            for ori in 0..N_ORIS {
                let mut cols = [Color::U; N_ORIS];
                let mut colset = ColorSet::empty();
                for (pos, col) in cols.iter_mut().enumerate() {
                    *col = colors[(pos + ori) % N_ORIS];
                    colset.insert(*col);
                }
                opts[rem] = Candidate {
                    cols,
                    colset,
                    ori: ori as u8,
                    cubie: cubie as u8,
                };
                rem += 1;
            }
        }

        Self {
            opts,
            rem,
            contradicted: false,
            colset: ColorSet::empty(),
            ori: None,
            cubie: None,
        }
    }

    /// Whether the residual has been emptied.
    pub fn is_contradicted(&self) -> bool {
        self.contradicted
    }

    /// Colors this slot must show under every remaining hypothesis.
    pub fn colset(&self) -> ColorSet {
        self.colset
    }

    /// The slot's orientation, once unanimous.
    pub fn ori(&self) -> Option<u8> {
        self.ori
    }

    /// The slot's cubie identity, once unanimous.
    pub fn cubie(&self) -> Option<u8> {
        self.cubie
    }

    /// Number of remaining hypotheses.
    pub fn remaining(&self) -> usize {
        self.rem
    }

    /// Keep only hypotheses showing `col` at position `pos`.
    pub fn require_color_at(&mut self, pos: usize, col: Color) {
        self.retain(|c| c.cols[pos] == col);
    }

    /// Keep only hypotheses that show `col` nowhere on this slot.
    pub fn exclude_color(&mut self, col: Color) {
        self.retain(|c| !c.colset.contains(col));
    }

    /// Keep only hypotheses at orientation `ori`.
    pub fn require_ori(&mut self, ori: u8) {
        self.retain(|c| c.ori == ori);
    }

    /// Keep only hypotheses for cubie `cubie`.
    pub fn require_cubie(&mut self, cubie: u8) {
        self.retain(|c| c.cubie == cubie);
    }

    /// Keep only hypotheses for cubies other than `cubie`.
    pub fn exclude_cubie(&mut self, cubie: u8) {
        self.retain(|c| c.cubie != cubie);
    }

    fn retain(&mut self, keep: impl Fn(&Candidate<N_ORIS>) -> bool) {
        let mut kept = 0;
        for i in 0..self.rem {
            if keep(&self.opts[i]) {
                self.opts[kept] = self.opts[i];
                kept += 1;
            }
        }
        if kept != self.rem {
            self.rem = kept;
            self.refresh();
        }
    }

    /// Recompute the derived fields after the residual shrank.
    fn refresh(&mut self) {
        if self.rem == 0 {
            self.contradicted = true;
            return;
        }

        let mut colset = self.opts[0].colset;
        for opt in &self.opts[1..self.rem] {
            colset = colset.intersection(opt.colset);
        }
        self.colset = colset;

        if self.ori.is_none() {
            let first = self.opts[0].ori;
            if self.opts[1..self.rem].iter().all(|o| o.ori == first) {
                self.ori = Some(first);
            }
        }

        if self.cubie.is_none() {
            let first = self.opts[0].cubie;
            if self.opts[1..self.rem].iter().all(|o| o.cubie == first) {
                self.cubie = Some(first);
            }
        }
    }
}
