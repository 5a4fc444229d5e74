//! The occupancy-tracking grid domain.
//!
//! # Storage
//!
//! Forward map (`cells`) is sparse: only occupied cells have an entry, and an
//! entry is dropped as soon as its last occupant leaves.  A 1000³ grid with a
//! hundred agents therefore costs a hundred entries, not a billion.
//!
//! The inverse map (`locations`) is a `BTreeMap` so that [`Grid::iter`]
//! yields agents in ascending `AgentId` order, which keeps anything built on
//! top of it reproducible.
//!
//! # Invariant
//!
//! For every agent `a` and coordinate `c`:
//!
//! ```text
//! a ∈ cells[c]  ⇔  locations[a] == c
//! ```
//!
//! Every mutating method validates everything it needs *before* touching
//! either map, so a failed call leaves the grid exactly as it was.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap;

use abm_core::AgentId;

use crate::{Coord, Distance, GridConfig, Neighborhood, Occupancy, SpaceError, SpaceResult};

/// An `N`-dimensional grid of integer cells holding agent locations.
///
/// Build with [`Grid::new`] from a [`GridConfig`], or with the
/// [`Grid::solo`] / [`Grid::multi`] shorthands.
///
/// ```
/// use abm_core::IdGenerator;
/// use abm_space::{Coord1D, Grid, Neighborhood};
///
/// let mut ids = IdGenerator::new();
/// let mut grid = Grid::multi([10], [true]).unwrap();
/// let a = grid.add(ids.next(), Coord1D::new(0)).unwrap();
///
/// let hood = grid.neighborhood_of(a, false, Neighborhood::VonNeumann).unwrap();
/// assert!(hood.contains(&Coord1D::new(1)));
/// assert!(hood.contains(&Coord1D::new(9))); // wrapped
/// ```
#[derive(Debug, Clone)]
pub struct Grid<const N: usize> {
    extents:   [u32; N],
    wrap:      [bool; N],
    occupancy: Occupancy,

    /// Occupied cells → occupants in arrival order.
    cells:     FxHashMap<Coord<N>, Vec<AgentId>>,
    /// Agent → its cell.
    locations: BTreeMap<AgentId, Coord<N>>,
}

impl<const N: usize> Grid<N> {
    /// Build an empty grid.  Fails with [`SpaceError::Config`] on an invalid
    /// configuration (see [`GridConfig::validate`]).
    pub fn new(config: GridConfig<N>) -> SpaceResult<Self> {
        config.validate()?;
        Ok(Self {
            extents:   config.extents,
            wrap:      config.wrap,
            occupancy: config.occupancy,
            cells:     FxHashMap::default(),
            locations: BTreeMap::new(),
        })
    }

    /// Single-occupancy grid.
    pub fn solo(extents: [u32; N], wrap: [bool; N]) -> SpaceResult<Self> {
        Self::new(GridConfig::new(extents).wrap(wrap).occupancy(Occupancy::Solo))
    }

    /// Multi-occupancy grid.
    pub fn multi(extents: [u32; N], wrap: [bool; N]) -> SpaceResult<Self> {
        Self::new(GridConfig::new(extents).wrap(wrap).occupancy(Occupancy::Multi))
    }

    // ── Shape ─────────────────────────────────────────────────────────────

    pub fn extents(&self) -> [u32; N] {
        self.extents
    }

    pub fn wraps(&self) -> [bool; N] {
        self.wrap
    }

    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> GridConfig<N> {
        GridConfig { extents: self.extents, wrap: self.wrap, occupancy: self.occupancy }
    }

    /// Number of placed agents.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of cells holding at least one agent.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    // ── Coordinate validation ─────────────────────────────────────────────

    /// Map `coord` onto the grid.
    ///
    /// Wrapped axes are reduced modulo their extent (so `-1` becomes
    /// `extent - 1`); an out-of-range value on an unwrapped axis fails with
    /// [`SpaceError::LocationInvalid`].
    pub fn normalize(&self, coord: Coord<N>) -> SpaceResult<Coord<N>> {
        let mut axes = coord.axes();
        for (axis, value) in axes.iter_mut().enumerate() {
            let extent = self.extents[axis] as i32;
            if self.wrap[axis] {
                *value = value.rem_euclid(extent);
            } else if !(0..extent).contains(value) {
                return Err(SpaceError::LocationInvalid(coord.to_string()));
            }
        }
        Ok(Coord::from_axes(axes))
    }

    /// `true` if `coord` names a cell of this grid, wrap-around included.
    pub fn is_location_valid(&self, coord: Coord<N>) -> bool {
        self.normalize(coord).is_ok()
    }

    /// `true` if the cell at `coord` holds no agents.
    pub fn is_location_empty(&self, coord: Coord<N>) -> SpaceResult<bool> {
        let coord = self.normalize(coord)?;
        Ok(!self.cells.contains_key(&coord))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Place `agent` at `coord`.
    ///
    /// # Errors
    /// - [`SpaceError::LocationInvalid`] — `coord` is off an unwrapped axis.
    /// - [`SpaceError::LocationUnavailable`] — Solo grid and the cell is taken.
    /// - [`SpaceError::DuplicateAgent`] — `agent` already has a location;
    ///   use [`move_agent`](Self::move_agent) instead.
    pub fn add(&mut self, agent: AgentId, coord: Coord<N>) -> SpaceResult<AgentId> {
        let coord = self.normalize(coord)?;
        if self.locations.contains_key(&agent) {
            return Err(SpaceError::DuplicateAgent(agent));
        }
        if self.occupancy == Occupancy::Solo && self.cells.contains_key(&coord) {
            return Err(SpaceError::LocationUnavailable(coord.to_string()));
        }
        self.attach(agent, coord);
        Ok(agent)
    }

    /// Remove `agent` from wherever it is.
    ///
    /// Fails with [`SpaceError::AgentNotFound`] if it has no location.
    pub fn delete(&mut self, agent: AgentId) -> SpaceResult<AgentId> {
        let current = self.location_of(agent)?;
        self.detach(agent, current);
        Ok(agent)
    }

    /// Remove `agent`, asserting it is at `coord`.
    ///
    /// Fails with [`SpaceError::AgentNotFound`] if the agent has no location
    /// or its location is not `coord` (an off-grid `coord` can never match).
    pub fn delete_at(&mut self, agent: AgentId, coord: Coord<N>) -> SpaceResult<AgentId> {
        let current = self.location_of(agent)?;
        match self.normalize(coord) {
            Ok(c) if c == current => {
                self.detach(agent, current);
                Ok(agent)
            }
            _ => Err(SpaceError::AgentNotFound(agent)),
        }
    }

    /// Relocate `agent` to `coord` in one step.
    ///
    /// Either the agent ends up at `coord` or nothing changes.  On a Solo
    /// grid the agent's own cell counts as free, so moving in place succeeds.
    ///
    /// # Errors
    /// [`SpaceError::AgentNotFound`], [`SpaceError::LocationInvalid`],
    /// [`SpaceError::LocationUnavailable`], all checked before any change.
    pub fn move_agent(&mut self, agent: AgentId, coord: Coord<N>) -> SpaceResult<AgentId> {
        let current = self.location_of(agent)?;
        let target = self.normalize(coord)?;
        if target == current {
            return Ok(agent);
        }
        if self.occupancy == Occupancy::Solo && self.cells.contains_key(&target) {
            return Err(SpaceError::LocationUnavailable(target.to_string()));
        }
        self.detach(agent, current);
        self.attach(agent, target);
        Ok(agent)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Where `agent` is.
    pub fn location_of(&self, agent: AgentId) -> SpaceResult<Coord<N>> {
        self.locations
            .get(&agent)
            .copied()
            .ok_or(SpaceError::AgentNotFound(agent))
    }

    /// `true` if `agent` has a location in this grid.
    pub fn contains(&self, agent: AgentId) -> bool {
        self.locations.contains_key(&agent)
    }

    /// Agents in the cell at `coord`, in arrival order.  Empty when vacant;
    /// never longer than one on a Solo grid.
    pub fn contents_of(&self, coord: Coord<N>) -> SpaceResult<&[AgentId]> {
        let coord = self.normalize(coord)?;
        Ok(self.cells.get(&coord).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Every placed agent with its location, in ascending `AgentId` order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, Coord<N>)> + '_ {
        self.locations.iter().map(|(&a, &c)| (a, c))
    }

    /// Cells adjacent to `center` under `kind`.
    ///
    /// Neighbors across a wrapped axis are folded back onto the grid;
    /// neighbors off an unwrapped axis are left out.  The result is a set,
    /// so on small wrapped grids a cell reachable by two offsets (or equal
    /// to the center) appears once.  With `include_center` the center itself
    /// is included.
    ///
    /// Fails with [`SpaceError::LocationInvalid`] if `center` is off-grid.
    pub fn neighborhood(
        &self,
        center:         Coord<N>,
        include_center: bool,
        kind:           Neighborhood,
    ) -> SpaceResult<BTreeSet<Coord<N>>> {
        let center = self.normalize(center)?;
        let mut out: BTreeSet<Coord<N>> = kind
            .offsets::<N>()
            .into_iter()
            .filter_map(|delta| self.normalize(center.offset(delta)).ok())
            .collect();

        if include_center {
            out.insert(center);
        } else if out.contains(&center) {
            // Only possible when a wrapped axis has extent 1 or 2 and an
            // offset lands back on the center.
            out.remove(&center);
        }
        Ok(out)
    }

    /// [`neighborhood`](Self::neighborhood) around `agent`'s location.
    ///
    /// Fails with [`SpaceError::AgentNotFound`] if `agent` is not placed.
    pub fn neighborhood_of(
        &self,
        agent:          AgentId,
        include_center: bool,
        kind:           Neighborhood,
    ) -> SpaceResult<BTreeSet<Coord<N>>> {
        let center = self.location_of(agent)?;
        self.neighborhood(center, include_center, kind)
    }

    /// Distance between two cells.  Along wrapped axes the shorter way
    /// around is taken.
    pub fn distance(&self, a: Coord<N>, b: Coord<N>, metric: Distance) -> SpaceResult<f64> {
        let a = self.normalize(a)?;
        let b = self.normalize(b)?;
        let deltas = (0..N).map(|axis| {
            let d = (i64::from(a.axis(axis)) - i64::from(b.axis(axis))).unsigned_abs();
            if self.wrap[axis] {
                d.min(u64::from(self.extents[axis]) - d)
            } else {
                d
            }
        });
        Ok(metric.combine(deltas))
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Record `agent` at an already-normalised, already-admissible `coord`.
    fn attach(&mut self, agent: AgentId, coord: Coord<N>) {
        self.cells.entry(coord).or_default().push(agent);
        self.locations.insert(agent, coord);
    }

    /// Forget `agent`, known to be at `coord`.  Drops the cell entry if it
    /// becomes empty.
    fn detach(&mut self, agent: AgentId, coord: Coord<N>) {
        if let Some(occupants) = self.cells.get_mut(&coord) {
            if let Some(pos) = occupants.iter().position(|&a| a == agent) {
                occupants.remove(pos);
            }
            if occupants.is_empty() {
                self.cells.remove(&coord);
            }
        }
        self.locations.remove(&agent);
    }
}
