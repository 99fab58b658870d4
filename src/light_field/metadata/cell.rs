//! Mosaic cells and per-cell values

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::light_field::common::error::LightFieldError;

/// Cells in a Bayer mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MosaicCell {
    R = 0,
    /// The green cell horizontal from red.
    Gr = 1,
    /// The green cell horizontal from blue.
    Gb = 2,
    B = 3,
}

impl MosaicCell {
    pub const ALL: [MosaicCell; 4] = [MosaicCell::R, MosaicCell::Gr, MosaicCell::Gb, MosaicCell::B];

    pub fn as_str(self) -> &'static str {
        match self {
            MosaicCell::R => "r",
            MosaicCell::Gr => "gr",
            MosaicCell::Gb => "gb",
            MosaicCell::B => "b",
        }
    }
}

impl fmt::Display for MosaicCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MosaicCell {
    type Err = LightFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "r" => Ok(MosaicCell::R),
            "gr" => Ok(MosaicCell::Gr),
            "gb" => Ok(MosaicCell::Gb),
            "b" => Ok(MosaicCell::B),
            other => Err(LightFieldError::InvalidMosaic(format!("unknown cell '{other}'"))),
        }
    }
}

#[derive(Deserialize, Serialize)]
struct CellFields<T> {
    r: T,
    gr: T,
    gb: T,
    b: T,
}

/// One value per mosaic cell, as found in metadata objects `{r, gr, gb, b}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMapping<T>([T; 4]);

impl<T> CellMapping<T> {
    pub fn new(r: T, gr: T, gb: T, b: T) -> Self {
        Self([r, gr, gb, b])
    }

    pub fn iter(&self) -> impl Iterator<Item = (MosaicCell, &T)> {
        MosaicCell::ALL.into_iter().zip(self.0.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CellMapping<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let CellFields { r, gr, gb, b } = CellFields::deserialize(deserializer)?;
        Ok(Self::new(r, gr, gb, b))
    }
}

impl<T: Serialize> Serialize for CellMapping<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [r, gr, gb, b] = &self.0;
        CellFields { r, gr, gb, b }.serialize(serializer)
    }
}

impl<T> Index<MosaicCell> for CellMapping<T> {
    type Output = T;

    fn index(&self, cell: MosaicCell) -> &T {
        &self.0[cell as usize]
    }
}

impl<T> IndexMut<MosaicCell> for CellMapping<T> {
    fn index_mut(&mut self, cell: MosaicCell) -> &mut T {
        &mut self.0[cell as usize]
    }
}
