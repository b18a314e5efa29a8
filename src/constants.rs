//! Cube geometry tables for color matching
//!
//! This module contains the compile-time constants describing the
//! combinatorial structure of the 3x3x3 cube: the canonical colors of every
//! cubie and the mapping from facelets to the cubie slots they sit on.
//!
//! Facelets are indexed 0..53 in face-major order (9 per face, face order
//! U, R, F, D, L, B), each face enumerated row-major from the canonical
//! orientation used throughout the cube-solving literature. Position 4 of
//! each face is the center, whose color is fixed by the face itself.

/// Total number of facelets on a cube.
pub const N_FACELETS: usize = 54;

/// Corner cubies and their canonical colors.
pub mod corner {
    use crate::color::Color;

    /// Number of corner slots.
    pub const N_SLOTS: usize = 8;

    /// Orientations a corner cubie can take within a slot.
    pub const N_ORIS: usize = 3;

    pub const URF: u8 = 0;
    pub const UFL: u8 = 1;
    pub const ULB: u8 = 2;
    pub const UBR: u8 = 3;
    pub const DFR: u8 = 4;
    pub const DLF: u8 = 5;
    pub const DBL: u8 = 6;
    pub const DRB: u8 = 7;

    /// Canonical colors of each corner cubie at orientation 0, in slot
    /// position order.
    pub const COLORS: [[Color; N_ORIS]; N_SLOTS] = [
        [Color::U, Color::R, Color::F],
        [Color::U, Color::F, Color::L],
        [Color::U, Color::L, Color::B],
        [Color::U, Color::B, Color::R],
        [Color::D, Color::F, Color::R],
        [Color::D, Color::L, Color::F],
        [Color::D, Color::B, Color::L],
        [Color::D, Color::R, Color::B],
    ];
}

/// Edge cubies and their canonical colors.
pub mod edge {
    use crate::color::Color;

    /// Number of edge slots.
    pub const N_SLOTS: usize = 12;

    /// Orientations an edge cubie can take within a slot.
    pub const N_ORIS: usize = 2;

    pub const UR: u8 = 0;
    pub const UF: u8 = 1;
    pub const UL: u8 = 2;
    pub const UB: u8 = 3;
    pub const DR: u8 = 4;
    pub const DF: u8 = 5;
    pub const DL: u8 = 6;
    pub const DB: u8 = 7;
    pub const FR: u8 = 8;
    pub const FL: u8 = 9;
    pub const BL: u8 = 10;
    pub const BR: u8 = 11;

    /// Canonical colors of each edge cubie at orientation 0, in slot
    /// position order.
    pub const COLORS: [[Color; N_ORIS]; N_SLOTS] = [
        [Color::U, Color::R],
        [Color::U, Color::F],
        [Color::U, Color::L],
        [Color::U, Color::B],
        [Color::D, Color::R],
        [Color::D, Color::F],
        [Color::D, Color::L],
        [Color::D, Color::B],
        [Color::F, Color::R],
        [Color::F, Color::L],
        [Color::B, Color::L],
        [Color::B, Color::R],
    ];
}

/// Facelet-to-slot geometry.
pub mod facelet {
    use super::{corner, edge, N_FACELETS};

    /// Facelets per face.
    pub const PER_FACE: usize = 9;

    /// Index of the center facelet within a face.
    pub const CENTER: usize = 4;

    /// Which kind of cubie a facelet belongs to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CubieKind {
        Corner,
        Edge,
    }

    /// Where a non-center facelet sits: which kind of slot, which slot of
    /// that kind, and which position within the slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Location {
        pub kind: CubieKind,
        pub slot: usize,
        pub pos: usize,
    }

    // Slot each facelet sits on. Corner facelets carry corner slot indices,
    // edge facelets carry edge slot indices; centers carry no slot.
    const SLOT: [Option<u8>; N_FACELETS] = {
        use corner::{DBL, DFR, DLF, DRB, UBR, UFL, ULB, URF};
        use edge::{BL, BR, DB, DF, DL, DR, FL, FR, UB, UF, UL, UR};
        [
            // U
            Some(ULB), Some(UB), Some(UBR), Some(UL), None, Some(UR), Some(UFL), Some(UF), Some(URF),
            // R
            Some(URF), Some(UR), Some(UBR), Some(FR), None, Some(BR), Some(DFR), Some(DR), Some(DRB),
            // F
            Some(UFL), Some(UF), Some(URF), Some(FL), None, Some(FR), Some(DLF), Some(DF), Some(DFR),
            // D
            Some(DLF), Some(DF), Some(DFR), Some(DL), None, Some(DR), Some(DBL), Some(DB), Some(DRB),
            // L
            Some(ULB), Some(UL), Some(UFL), Some(BL), None, Some(FL), Some(DBL), Some(DL), Some(DLF),
            // B
            Some(UBR), Some(UB), Some(ULB), Some(BR), None, Some(BL), Some(DRB), Some(DB), Some(DBL),
        ]
    };

    // Position of each facelet within its slot. Centers carry 0, never read.
    const POS: [u8; N_FACELETS] = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, // U
        1, 1, 2, 1, 0, 1, 2, 1, 1, // R
        1, 1, 2, 0, 0, 0, 2, 1, 1, // F
        0, 0, 0, 0, 0, 0, 0, 0, 0, // D
        1, 1, 2, 1, 0, 1, 2, 1, 1, // L
        1, 1, 2, 0, 0, 0, 2, 1, 1, // B
    ];

    /// Whether a facelet is a face center.
    pub fn is_center(facelet: usize) -> bool {
        facelet % PER_FACE == CENTER
    }

    /// The face a facelet belongs to, as that face's color index.
    pub fn face_of(facelet: usize) -> usize {
        facelet / PER_FACE
    }

    /// Locate a facelet on its cubie slot. Returns `None` for centers.
    ///
    /// Within a face, odd positions (1, 3, 5, 7) are edge facelets and even
    /// non-center positions (0, 2, 6, 8) are corner facelets.
    pub fn locate(facelet: usize) -> Option<Location> {
        let slot = SLOT[facelet]? as usize;
        let kind = if (facelet % PER_FACE) % 2 == 1 {
            CubieKind::Edge
        } else {
            CubieKind::Corner
        };
        Some(Location {
            kind,
            slot,
            pos: POS[facelet] as usize,
        })
    }
}
