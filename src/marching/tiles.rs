//! Configuration-to-tile lookup
//!
//! Two stages, both fixed:
//! 1. `TILE_TABLE`: configuration -> base shape + clockwise quarter turns
//! 2. `TileResolver`: base shape -> caller's visual asset handle
//!
//! The diagonal configurations `0101` and `1010` each map to one fixed tile.
//! Neighbouring cells are not consulted to disambiguate them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::BoundaryConfiguration;

/// Errors raised by tile lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("unknown boundary configuration {0:?}")]
    UnknownConfiguration(String),

    #[error("malformed tile descriptor {0:?}")]
    MalformedDescriptor(String),
}

/// Canonical unrotated tile shapes, named after their configuration key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseShape {
    /// 0000
    Empty,
    /// 1000 - single closed corner
    Corner,
    /// 1001 - closed left half
    Half,
    /// 0111 - three closed corners
    Inset,
    /// 1111
    Full,
    /// 0101
    DiagonalRising,
    /// 1010
    DiagonalFalling,
}

impl BaseShape {
    pub const ALL: [BaseShape; 7] = [
        BaseShape::Empty,
        BaseShape::Corner,
        BaseShape::Half,
        BaseShape::Inset,
        BaseShape::Full,
        BaseShape::DiagonalRising,
        BaseShape::DiagonalFalling,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Configuration this shape draws without rotation
    pub fn configuration(self) -> BoundaryConfiguration {
        BoundaryConfiguration::from_bits(match self {
            BaseShape::Empty => 0b0000,
            BaseShape::Corner => 0b1000,
            BaseShape::Half => 0b1001,
            BaseShape::Inset => 0b0111,
            BaseShape::Full => 0b1111,
            BaseShape::DiagonalRising => 0b0101,
            BaseShape::DiagonalFalling => 0b1010,
        })
    }

    /// 4-character key, e.g. "1001"
    pub fn key(self) -> String {
        self.configuration().key()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let config = key.parse::<BoundaryConfiguration>().ok()?;
        Self::ALL.into_iter().find(|s| s.configuration() == config)
    }
}

/// Base shape plus clockwise quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileDescriptor {
    pub base: BaseShape,
    /// 0..=3
    pub rotation: u8,
}

impl TileDescriptor {
    pub const fn new(base: BaseShape, rotation: u8) -> Self {
        Self { base, rotation }
    }

    /// Configuration drawn by the rotated base shape
    pub fn configuration(self) -> BoundaryConfiguration {
        self.base.configuration().rotated_cw(self.rotation)
    }
}

impl fmt::Display for TileDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base.key(), self.rotation)
    }
}

impl FromStr for TileDescriptor {
    type Err = TileError;

    /// Parse a 5-character descriptor such as "10013"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TileError::MalformedDescriptor(s.to_string());

        if !s.is_ascii() || s.len() != 5 {
            return Err(malformed());
        }
        let (key, digit) = s.split_at(4);
        let base = BaseShape::from_key(key).ok_or_else(malformed)?;
        let rotation = digit.parse::<u8>().map_err(|_| malformed())?;
        if rotation > 3 {
            return Err(malformed());
        }
        Ok(Self::new(base, rotation))
    }
}

/// Configuration (by packed bits) -> tile descriptor
pub const TILE_TABLE: [TileDescriptor; 16] = {
    use BaseShape::*;
    [
        TileDescriptor::new(Empty, 0),           // 0000
        TileDescriptor::new(Corner, 3),          // 0001
        TileDescriptor::new(Corner, 2),          // 0010
        TileDescriptor::new(Half, 3),            // 0011
        TileDescriptor::new(Corner, 1),          // 0100
        TileDescriptor::new(DiagonalRising, 0),  // 0101
        TileDescriptor::new(Half, 2),            // 0110
        TileDescriptor::new(Inset, 0),           // 0111
        TileDescriptor::new(Corner, 0),          // 1000
        TileDescriptor::new(Half, 0),            // 1001
        TileDescriptor::new(DiagonalFalling, 0), // 1010
        TileDescriptor::new(Inset, 1),           // 1011
        TileDescriptor::new(Half, 1),            // 1100
        TileDescriptor::new(Inset, 2),           // 1101
        TileDescriptor::new(Inset, 3),           // 1110
        TileDescriptor::new(Full, 0),            // 1111
    ]
};

/// Maps configurations to a visual asset handle and rotation
#[derive(Debug, Clone)]
pub struct TileResolver<H = BaseShape> {
    assets: [H; 7],
}

impl TileResolver<BaseShape> {
    /// Resolver whose asset handle is the base shape itself
    pub fn canonical() -> Self {
        Self::new(|shape| shape)
    }
}

impl<H> TileResolver<H> {
    /// Build with one asset handle per base shape
    pub fn new(asset_for: impl FnMut(BaseShape) -> H) -> Self {
        Self {
            assets: BaseShape::ALL.map(asset_for),
        }
    }

    #[inline]
    pub fn asset(&self, base: BaseShape) -> &H {
        &self.assets[base.index()]
    }

    #[inline]
    pub fn descriptor(&self, config: BoundaryConfiguration) -> TileDescriptor {
        TILE_TABLE[config.bits() as usize]
    }

    /// Asset handle and clockwise quarter turns for a configuration
    pub fn resolve(&self, config: BoundaryConfiguration) -> (&H, u8) {
        let descriptor = self.descriptor(config);
        (self.asset(descriptor.base), descriptor.rotation)
    }

    /// Resolve a 4-character configuration key
    pub fn resolve_key(&self, key: &str) -> Result<(&H, u8), TileError> {
        Ok(self.resolve(key.parse()?))
    }
}
