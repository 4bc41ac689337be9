//! Boundary configuration of one marching-squares cell
//!
//! Corners are ordered clockwise from top-left. Packed into a nibble with
//! top-left as the most significant bit, so the integer value reads the same
//! as the canonical key: `"0100"` is `0b0100`.

use std::fmt;
use std::str::FromStr;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::tiles::TileError;

/// Cell corner, in canonical key order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Canonical order (clockwise from top-left)
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Bit for this corner in the packed configuration
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Corner::TopLeft => 0b1000,
            Corner::TopRight => 0b0100,
            Corner::BottomRight => 0b0010,
            Corner::BottomLeft => 0b0001,
        }
    }

    /// Offset from the cell position to this corner's sample
    #[inline]
    pub fn offset(self) -> IVec2 {
        match self {
            Corner::TopLeft => IVec2::new(0, 1),
            Corner::TopRight => IVec2::new(1, 1),
            Corner::BottomRight => IVec2::new(1, 0),
            Corner::BottomLeft => IVec2::ZERO,
        }
    }
}

/// Closed/open state of a cell's four corners (closed = 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoundaryConfiguration(u8);

impl BoundaryConfiguration {
    /// Number of distinct configurations
    pub const COUNT: usize = 16;

    /// Build from corner states in canonical order
    pub fn from_corners(closed: [bool; 4]) -> Self {
        let bits = Corner::ALL
            .iter()
            .zip(closed)
            .filter(|(_, closed)| *closed)
            .fold(0, |acc, (corner, _)| acc | corner.bit());
        Self(bits)
    }

    /// Build from a packed nibble. Higher bits are an invariant violation.
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        debug_assert!(bits < 16, "configuration bits out of range: {bits:#b}");
        Self(bits & 0b1111)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_closed(self, corner: Corner) -> bool {
        self.0 & corner.bit() != 0
    }

    /// Corner states in canonical order
    pub fn corners(self) -> [bool; 4] {
        Corner::ALL.map(|c| self.is_closed(c))
    }

    /// Rotate clockwise by quarter turns (top-left moves to top-right)
    pub fn rotated_cw(self, quarter_turns: u8) -> Self {
        let n = quarter_turns % 4;
        if n == 0 {
            return self;
        }
        Self(((self.0 >> n) | (self.0 << (4 - n))) & 0b1111)
    }

    /// Canonical 4-character key, e.g. "0100"
    pub fn key(self) -> String {
        self.to_string()
    }

    /// Every configuration, in key order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl fmt::Display for BoundaryConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for closed in self.corners() {
            f.write_str(if closed { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BoundaryConfiguration {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(TileError::UnknownConfiguration(s.to_string()));
        }

        let mut closed = [false; 4];
        for (slot, byte) in closed.iter_mut().zip(bytes) {
            *slot = match byte {
                b'0' => false,
                b'1' => true,
                _ => return Err(TileError::UnknownConfiguration(s.to_string())),
            };
        }
        Ok(Self::from_corners(closed))
    }
}
