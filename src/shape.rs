//! Extents: the validated rank-4 shape of a tensor

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of axes every tensor has
pub const RANK: usize = 4;

/// Shape of a rank-4 tensor, axes ordered outer to inner
///
/// Every extent is at least 1 and the element count fits in `usize`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 4]", into = "[usize; 4]")]
pub struct Extents([usize; RANK]);

impl Extents {
    /// Validate and wrap a raw extents array.
    pub fn new(extents: [usize; RANK]) -> Result<Self> {
        if extents.contains(&0) {
            return Err(Error::InvalidShape { extents });
        }
        extents
            .iter()
            .try_fold(1usize, |acc, &e| acc.checked_mul(e))
            .ok_or(Error::SizeOverflow { extents })?;
        Ok(Self(extents))
    }

    /// Extents as an array.
    #[inline]
    pub fn dims(&self) -> &[usize; RANK] {
        &self.0
    }

    /// Extent of one axis.
    #[inline]
    pub fn dim(&self, axis: usize) -> usize {
        self.0[axis]
    }

    /// Total number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        // Checked at construction.
        self.0.iter().product()
    }

    /// Row-major strides in elements.
    pub fn strides(&self) -> [usize; RANK] {
        let mut strides = [1; RANK];
        for axis in (0..RANK - 1).rev() {
            strides[axis] = strides[axis + 1] * self.0[axis + 1];
        }
        strides
    }

    /// Split a flat row-major index into per-axis coordinates.
    pub fn unravel(&self, flat: usize) -> [usize; RANK] {
        let mut coords = [0; RANK];
        let mut rest = flat;
        for axis in (0..RANK).rev() {
            coords[axis] = rest % self.0[axis];
            rest /= self.0[axis];
        }
        coords
    }

    /// Flat row-major index of a coordinate, or None if out of bounds.
    pub fn ravel(&self, coords: [usize; RANK]) -> Option<usize> {
        if coords.iter().zip(&self.0).any(|(&c, &extent)| c >= extent) {
            return None;
        }
        Some(coords.iter().zip(self.strides()).map(|(&c, stride)| c * stride).sum())
    }

    /// Check that `self` can be broadcast one-directionally into `target`.
    ///
    /// Every axis must either match `target` or be 1. All four axes are
    /// checked before anything else happens.
    pub fn check_broadcast_into(&self, target: &Extents) -> Result<()> {
        match (0..RANK).find(|&axis| self.dim(axis) != 1 && self.dim(axis) != target.dim(axis)) {
            Some(axis) => Err(Error::incompatible(target.0, self.0, axis)),
            None => Ok(()),
        }
    }

    /// Flat index into a buffer shaped `self` that lines up with the flat
    /// index `flat` of a buffer shaped `target`.
    ///
    /// Axes of extent 1 in `self` contribute nothing, so their single
    /// element is reused along the whole axis of `target`. The caller must
    /// have validated the pair with [`check_broadcast_into`](Self::check_broadcast_into).
    #[inline]
    pub fn broadcast_index(&self, target: &Extents, flat: usize) -> usize {
        let mut rest = flat;
        let mut index = 0;
        let mut stride = 1;
        for axis in (0..RANK).rev() {
            let coord = rest % target.0[axis];
            rest /= target.0[axis];
            if self.0[axis] != 1 {
                index += coord * stride;
            }
            stride *= self.0[axis];
        }
        index
    }
}

impl TryFrom<[usize; RANK]> for Extents {
    type Error = Error;

    fn try_from(extents: [usize; RANK]) -> Result<Self> {
        Self::new(extents)
    }
}

impl From<Extents> for [usize; RANK] {
    fn from(extents: Extents) -> Self {
        extents.0
    }
}

impl fmt::Debug for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Extents({:?})", self.0)
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
