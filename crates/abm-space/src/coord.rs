//! Integer grid coordinates.
//!
//! `Coord<N>` is an immutable tuple of `N` signed integers.  Each
//! dimensionality is its own type, so a `Coord2D` can never be handed to a
//! 3-D grid by accident.  Coordinates are `Copy + Ord + Hash` and therefore
//! usable as keys in both hashed and ordered maps.

use std::fmt;

/// A point on an `N`-dimensional integer grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Coord<const N: usize>([i32; N]);

/// One-dimensional coordinate `(x)`.
pub type Coord1D = Coord<1>;
/// Two-dimensional coordinate `(x, y)`.
pub type Coord2D = Coord<2>;
/// Three-dimensional coordinate `(x, y, z)`.
pub type Coord3D = Coord<3>;

impl<const N: usize> Coord<N> {
    /// Build from an axis array, `axes[0]` being `x`.
    #[inline]
    pub const fn from_axes(axes: [i32; N]) -> Self {
        Self(axes)
    }

    /// All axis values, `x` first.
    #[inline]
    pub fn axes(&self) -> [i32; N] {
        self.0
    }

    /// Value along axis `i`.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    #[inline]
    pub fn axis(&self, i: usize) -> i32 {
        self.0[i]
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.0[0]
    }

    /// `self` displaced by `delta`, axis by axis.  No bounds are applied;
    /// the grid decides whether the result is valid.
    #[inline]
    pub fn offset(&self, delta: [i32; N]) -> Self {
        let mut axes = self.0;
        for (a, d) in axes.iter_mut().zip(delta) {
            *a += d;
        }
        Self(axes)
    }

    /// Distance to `other` in unbounded space (no wrap-around).
    pub fn distance(&self, other: &Self, metric: Distance) -> f64 {
        let deltas = self.0.iter().zip(other.0).map(|(&a, b)| (i64::from(a) - i64::from(b)).unsigned_abs());
        metric.combine(deltas)
    }
}

impl Coord<1> {
    #[inline]
    pub const fn new(x: i32) -> Self {
        Self([x])
    }
}

impl Coord<2> {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self([x, y])
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.0[1]
    }
}

impl Coord<3> {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> i32 {
        self.0[2]
    }
}

impl<const N: usize> From<[i32; N]> for Coord<N> {
    fn from(axes: [i32; N]) -> Self {
        Self(axes)
    }
}

impl<const N: usize> fmt::Display for Coord<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, a) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a}")?;
        }
        write!(f, ")")
    }
}

// ── Distance ──────────────────────────────────────────────────────────────────

/// Metric used by [`Coord::distance`] and [`Grid::distance`][crate::Grid::distance].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Distance {
    /// Straight-line distance, `sqrt(Σ dᵢ²)`.
    #[default]
    Euclidean,
    /// Taxicab distance, `Σ |dᵢ|`.  Matches VonNeumann adjacency.
    Manhattan,
    /// Chessboard distance, `max |dᵢ|`.  Matches Moore adjacency.
    Chebyshev,
}

impl Distance {
    /// Fold per-axis absolute displacements into a single distance.
    pub(crate) fn combine(self, deltas: impl Iterator<Item = u64>) -> f64 {
        match self {
            Distance::Euclidean => deltas.map(|d| (d * d) as f64).sum::<f64>().sqrt(),
            Distance::Manhattan => deltas.sum::<u64>() as f64,
            Distance::Chebyshev => deltas.max().unwrap_or(0) as f64,
        }
    }
}
