//! Construction-time grid configuration.

use crate::{SpaceError, SpaceResult};

/// How many agents a single cell may hold.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Occupancy {
    /// At most one agent per cell.  Adding to an occupied cell fails with
    /// [`SpaceError::LocationUnavailable`].
    Solo,
    /// Any number of agents per cell.
    #[default]
    Multi,
}

/// Shape, topology and occupancy of a [`Grid`][crate::Grid].
///
/// All three are fixed once the grid is built.
///
/// ```
/// use abm_space::{GridConfig, Occupancy};
///
/// let cfg = GridConfig::new([16, 8])
///     .wrap([true, false])
///     .occupancy(Occupancy::Solo);
/// assert_eq!(cfg.extents, [16, 8]);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GridConfig<const N: usize> {
    /// Number of cells along each axis.  Valid axis values are
    /// `0 .. extents[i]`.
    pub extents:   [u32; N],
    /// Per-axis periodic boundary.  Wrapped axes fold out-of-range values
    /// back into range; unwrapped axes reject them.
    pub wrap:      [bool; N],
    pub occupancy: Occupancy,
}

impl<const N: usize> GridConfig<N> {
    /// Unwrapped, multi-occupancy grid of the given extents.
    pub fn new(extents: [u32; N]) -> Self {
        Self { extents, wrap: [false; N], occupancy: Occupancy::Multi }
    }

    pub fn wrap(mut self, wrap: [bool; N]) -> Self {
        self.wrap = wrap;
        self
    }

    /// Wrap every axis (toroidal topology).
    pub fn wrap_all(mut self) -> Self {
        self.wrap = [true; N];
        self
    }

    pub fn occupancy(mut self, occupancy: Occupancy) -> Self {
        self.occupancy = occupancy;
        self
    }

    /// Reject dimensionalities outside 1–3 and extents that are zero or do
    /// not fit the signed coordinate range.
    pub fn validate(&self) -> SpaceResult<()> {
        if !(1..=3).contains(&N) {
            return Err(SpaceError::Config(format!(
                "grids must have 1 to 3 dimensions, got {N}"
            )));
        }
        for (axis, &extent) in self.extents.iter().enumerate() {
            if extent == 0 {
                return Err(SpaceError::Config(format!("axis {axis} has zero extent")));
            }
            if extent > i32::MAX as u32 {
                return Err(SpaceError::Config(format!(
                    "axis {axis} extent {extent} exceeds {}",
                    i32::MAX
                )));
            }
        }
        Ok(())
    }
}
