//! Matched cube representation
//!
//! A [`FaceCube`] holds one color per facelet. Its `Display` form is the
//! 54-letter face string consumed by the downstream solver (face-major
//! order U, R, F, D, L, B, faces row-major); `FromStr` parses one back.
//! The validation helpers decompose the facelets into cubies and check the
//! constraints every physically realizable cube satisfies.

use crate::color::{Color, COLOR_COUNT};
use crate::constants::{corner, edge, facelet, N_FACELETS};
use crate::error::MatchError;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A cubie resolved from facelet colors: which piece, at which orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCubie {
    pub cubie: u8,
    pub ori: u8,
}

/// Colors of all 54 facelets of a scanned cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCube {
    facelets: [Color; N_FACELETS],
}

impl FaceCube {
    pub(crate) fn new(facelets: [Color; N_FACELETS]) -> Self {
        Self { facelets }
    }

    /// The color of every facelet, in face-major order.
    pub fn facelets(&self) -> &[Color; N_FACELETS] {
        &self.facelets
    }

    /// Color of one facelet.
    pub fn color_at(&self, facelet: usize) -> Color {
        self.facelets[facelet]
    }

    /// How many facelets show each color.
    pub fn color_counts(&self) -> [usize; COLOR_COUNT] {
        let mut counts = [0; COLOR_COUNT];
        for color in &self.facelets {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Whether the six centers show the six face colors in face order.
    pub fn centers_canonical(&self) -> bool {
        Color::all().all(|color| {
            self.color_at(color.index() * facelet::PER_FACE + facelet::CENTER) == color
        })
    }

    /// Resolve every corner slot to a cubie and orientation.
    ///
    /// `None` if some slot's color triple matches no corner cubie.
    pub fn corner_cubies(&self) -> Option<[ResolvedCubie; corner::N_SLOTS]> {
        let colors = self.slot_colors::<{ corner::N_ORIS }>(facelet::CubieKind::Corner);
        resolve_slots(&colors, &corner::COLORS)
    }

    /// Resolve every edge slot to a cubie and orientation.
    ///
    /// `None` if some slot's color pair matches no edge cubie.
    pub fn edge_cubies(&self) -> Option<[ResolvedCubie; edge::N_SLOTS]> {
        let colors = self.slot_colors::<{ edge::N_ORIS }>(facelet::CubieKind::Edge);
        resolve_slots(&colors, &edge::COLORS)
    }

    /// Check every constraint a physically realizable cube satisfies:
    /// 9 facelets per color, canonical centers, valid cubies each used
    /// exactly once, orientation sums of 0, and equal corner and edge
    /// permutation parity.
    pub fn is_physically_valid(&self) -> bool {
        if self.color_counts() != [facelet::PER_FACE; COLOR_COUNT] || !self.centers_canonical() {
            return false;
        }
        let (Some(corners), Some(edges)) = (self.corner_cubies(), self.edge_cubies()) else {
            return false;
        };

        let corner_perm: Vec<u8> = corners.iter().map(|c| c.cubie).collect();
        let edge_perm: Vec<u8> = edges.iter().map(|e| e.cubie).collect();
        if !is_permutation(&corner_perm) || !is_permutation(&edge_perm) {
            return false;
        }

        let corner_twist: u32 = corners.iter().map(|c| c.ori as u32).sum();
        let edge_flip: u32 = edges.iter().map(|e| e.ori as u32).sum();
        if corner_twist % corner::N_ORIS as u32 != 0 || edge_flip % edge::N_ORIS as u32 != 0 {
            return false;
        }

        permutation_parity(&corner_perm) == permutation_parity(&edge_perm)
    }

    /// Gather each slot's facelet colors in slot position order.
    fn slot_colors<const N_ORIS: usize>(&self, kind: facelet::CubieKind) -> Vec<[Color; N_ORIS]> {
        let n_slots = match kind {
            facelet::CubieKind::Corner => corner::N_SLOTS,
            facelet::CubieKind::Edge => edge::N_SLOTS,
        };
        let mut colors = vec![[Color::U; N_ORIS]; n_slots];
        for f in 0..N_FACELETS {
            if let Some(loc) = facelet::locate(f) {
                if loc.kind == kind {
                    colors[loc.slot][loc.pos] = self.facelets[f];
                }
            }
        }
        colors
    }
}

/// Match each slot's observed colors against the canonical layouts.
fn resolve_slots<const N_ORIS: usize, const N_SLOTS: usize>(
    observed: &[[Color; N_ORIS]],
    canonical: &[[Color; N_ORIS]; N_SLOTS],
) -> Option<[ResolvedCubie; N_SLOTS]> {
    let mut resolved = [ResolvedCubie { cubie: 0, ori: 0 }; N_SLOTS];
    for (slot, colors) in observed.iter().enumerate() {
        let hit = canonical.iter().enumerate().find_map(|(cubie, layout)| {
            (0..N_ORIS)
                .find(|&ori| (0..N_ORIS).all(|pos| colors[pos] == layout[(pos + ori) % N_ORIS]))
                .map(|ori| ResolvedCubie {
                    cubie: cubie as u8,
                    ori: ori as u8,
                })
        })?;
        resolved[slot] = hit;
    }
    Some(resolved)
}

fn is_permutation(perm: &[u8]) -> bool {
    let mut seen = vec![false; perm.len()];
    for &p in perm {
        if (p as usize) >= perm.len() || seen[p as usize] {
            return false;
        }
        seen[p as usize] = true;
    }
    true
}

fn permutation_parity(perm: &[u8]) -> u8 {
    let mut inversions = 0;
    for i in 0..perm.len() {
        for j in i + 1..perm.len() {
            if perm[i] > perm[j] {
                inversions += 1;
            }
        }
    }
    (inversions % 2) as u8
}

impl fmt::Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.facelets {
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

impl FromStr for FaceCube {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != N_FACELETS {
            return Err(MatchError::invalid_face_string(format!(
                "expected {} facelets, got {}",
                N_FACELETS,
                chars.len()
            )));
        }
        let mut facelets = [Color::U; N_FACELETS];
        for (i, c) in chars.into_iter().enumerate() {
            facelets[i] = Color::from_char(c).ok_or_else(|| {
                MatchError::invalid_face_string(format!("invalid face letter '{}' at {}", c, i))
            })?;
        }
        Ok(Self { facelets })
    }
}

impl Serialize for FaceCube {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FaceCube {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FaceCubeVisitor;

        impl Visitor<'_> for FaceCubeVisitor {
            type Value = FaceCube;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a 54-letter face string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FaceCube, E> {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(FaceCubeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn test_parse_display_roundtrip() {
        let cube: FaceCube = SOLVED.parse().unwrap();
        assert_eq!(cube.to_string(), SOLVED);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("UUU".parse::<FaceCube>().is_err());
        let junk = SOLVED.replace('B', "X");
        assert!(junk.parse::<FaceCube>().is_err());
    }

    #[test]
    fn test_solved_cube_is_valid() {
        let cube: FaceCube = SOLVED.parse().unwrap();
        assert!(cube.centers_canonical());
        assert_eq!(cube.color_counts(), [9; COLOR_COUNT]);
        assert!(cube.is_physically_valid());

        let corners = cube.corner_cubies().unwrap();
        for (slot, resolved) in corners.iter().enumerate() {
            assert_eq!(resolved.cubie as usize, slot);
            assert_eq!(resolved.ori, 0);
        }
    }

    #[test]
    fn test_single_twist_is_invalid() {
        // Rotating one corner in place breaks the twist sum
        let mut cube: FaceCube = SOLVED.parse().unwrap();
        // URF corner facelets are 8 (pos 0), 9 (pos 1), 20 (pos 2); a twist
        // shows the cycled colors R, F, U
        cube.facelets[8] = Color::R;
        cube.facelets[9] = Color::F;
        cube.facelets[20] = Color::U;
        assert!(cube.corner_cubies().is_some());
        assert!(!cube.is_physically_valid());
    }

    #[test]
    fn test_invalid_cubie_detected() {
        // No corner shows U and D together
        let mut cube: FaceCube = SOLVED.parse().unwrap();
        cube.facelets[8] = Color::D;
        assert!(cube.corner_cubies().is_none());
        assert!(!cube.is_physically_valid());
    }

    #[test]
    fn test_serde_as_string() {
        let cube: FaceCube = SOLVED.parse().unwrap();
        let json = serde_json::to_string(&cube).unwrap();
        assert_eq!(json, format!("\"{}\"", SOLVED));
        let back: FaceCube = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cube);
    }
}
