//! Unit tests for abm-space.
//!
//! All tests build small hand-sized grids so expected neighborhoods can be
//! written out literally.

#[cfg(test)]
mod helpers {
    use abm_core::{AgentId, IdGenerator};

    /// `n` fresh ids from a private generator.
    pub fn ids(n: usize) -> Vec<AgentId> {
        let mut g = IdGenerator::new();
        (0..n).map(|_| g.next()).collect()
    }
}

// ── Coordinates ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod coord {
    use crate::{Coord1D, Coord2D, Coord3D, Distance};

    #[test]
    fn accessors() {
        let c = Coord3D::new(1, -2, 3);
        assert_eq!((c.x(), c.y(), c.z()), (1, -2, 3));
        assert_eq!(c.axes(), [1, -2, 3]);
        assert_eq!(Coord2D::new(4, 5).y(), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Coord1D::new(7).to_string(), "(7)");
        assert_eq!(Coord2D::new(2, 5).to_string(), "(2, 5)");
        assert_eq!(Coord3D::new(0, -1, 2).to_string(), "(0, -1, 2)");
    }

    #[test]
    fn offset_adds_per_axis() {
        assert_eq!(Coord2D::new(3, 3).offset([-1, 1]), Coord2D::new(2, 4));
    }

    #[test]
    fn unbounded_distances() {
        let a = Coord2D::new(0, 0);
        let b = Coord2D::new(3, 4);
        assert_eq!(a.distance(&b, Distance::Euclidean), 5.0);
        assert_eq!(a.distance(&b, Distance::Manhattan), 7.0);
        assert_eq!(a.distance(&b, Distance::Chebyshev), 4.0);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Coord2D::new(0, 9) < Coord2D::new(1, 0));
        assert!(Coord2D::new(1, 0) < Coord2D::new(1, 1));
    }
}

// ── Neighborhood offsets ──────────────────────────────────────────────────────

#[cfg(test)]
mod offsets {
    use crate::Neighborhood;

    #[test]
    fn counts_per_dimension() {
        assert_eq!(Neighborhood::VonNeumann.offsets::<1>().len(), 2);
        assert_eq!(Neighborhood::Moore.offsets::<1>().len(), 2);
        assert_eq!(Neighborhood::VonNeumann.offsets::<2>().len(), 4);
        assert_eq!(Neighborhood::Moore.offsets::<2>().len(), 8);
        assert_eq!(Neighborhood::VonNeumann.offsets::<3>().len(), 6);
        assert_eq!(Neighborhood::Moore.offsets::<3>().len(), 26);
    }

    #[test]
    fn never_contains_zero() {
        assert!(!Neighborhood::Moore.offsets::<3>().contains(&[0, 0, 0]));
    }

    #[test]
    fn von_neumann_steps_one_axis() {
        for d in Neighborhood::VonNeumann.offsets::<3>() {
            assert_eq!(d.iter().map(|v| v.abs()).sum::<i32>(), 1, "{d:?}");
        }
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use crate::{Grid, GridConfig, Occupancy, SpaceError};

    #[test]
    fn zero_extent_rejected() {
        let err = Grid::new(GridConfig::new([4, 0])).unwrap_err();
        assert!(matches!(err, SpaceError::Config(_)));
    }

    #[test]
    fn four_dimensions_rejected() {
        let err = Grid::new(GridConfig::new([2, 2, 2, 2])).unwrap_err();
        assert!(matches!(err, SpaceError::Config(_)));
    }

    #[test]
    fn oversized_extent_rejected() {
        let err = Grid::new(GridConfig::new([u32::MAX])).unwrap_err();
        assert!(matches!(err, SpaceError::Config(_)));
    }

    #[test]
    fn builder_fields_reach_grid() {
        let grid = Grid::new(
            GridConfig::new([5, 6]).wrap([true, false]).occupancy(Occupancy::Solo),
        )
        .unwrap();
        assert_eq!(grid.extents(), [5, 6]);
        assert_eq!(grid.wraps(), [true, false]);
        assert_eq!(grid.occupancy(), Occupancy::Solo);
        assert_eq!(grid.config(), GridConfig::new([5, 6]).wrap([true, false]).occupancy(Occupancy::Solo));
    }
}

// ── Validation & normalisation ────────────────────────────────────────────────

#[cfg(test)]
mod validity {
    use crate::{Coord2D, Grid, SpaceError};

    #[test]
    fn unwrapped_bounds() {
        let grid = Grid::solo([10, 10], [false, false]).unwrap();
        assert!(grid.is_location_valid(Coord2D::new(0, 0)));
        assert!(grid.is_location_valid(Coord2D::new(9, 9)));
        assert!(!grid.is_location_valid(Coord2D::new(-1, -1)));
        assert!(!grid.is_location_valid(Coord2D::new(10, 5)));
        assert!(!grid.is_location_valid(Coord2D::new(100, 100)));
    }

    #[test]
    fn wrapped_axes_fold() {
        let grid = Grid::solo([10, 10], [true, false]).unwrap();
        assert_eq!(grid.normalize(Coord2D::new(-1, 3)).unwrap(), Coord2D::new(9, 3));
        assert_eq!(grid.normalize(Coord2D::new(23, 3)).unwrap(), Coord2D::new(3, 3));
        assert!(matches!(
            grid.normalize(Coord2D::new(0, 10)),
            Err(SpaceError::LocationInvalid(_))
        ));
    }

    #[test]
    fn empty_check() {
        let mut grid = Grid::solo([10, 10], [true, true]).unwrap();
        let ids = super::helpers::ids(1);
        assert!(grid.is_location_empty(Coord2D::new(2, 5)).unwrap());
        grid.add(ids[0], Coord2D::new(2, 5)).unwrap();
        assert!(!grid.is_location_empty(Coord2D::new(2, 5)).unwrap());
        assert!(grid.is_location_empty(Coord2D::new(3, 7)).unwrap());
    }
}

// ── add / delete ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod add_delete {
    use crate::{Coord1D, Coord2D, Grid, SpaceError};

    #[test]
    fn solo_exclusivity() {
        let mut grid = Grid::solo([10, 10], [true, true]).unwrap();
        let ids = super::helpers::ids(2);
        let (foo, bar) = (ids[0], ids[1]);
        let (c2, c3) = (Coord2D::new(2, 5), Coord2D::new(3, 7));

        assert_eq!(grid.add(foo, c2).unwrap(), foo);
        assert!(matches!(grid.add(bar, c2), Err(SpaceError::LocationUnavailable(_))));
        assert_eq!(grid.add(bar, c3).unwrap(), bar);

        assert_eq!(grid.location_of(foo).unwrap(), c2);
        assert_eq!(grid.contents_of(c2).unwrap(), &[foo]);
    }

    #[test]
    fn multi_stacks_in_arrival_order() {
        let mut grid = Grid::multi([4], [false]).unwrap();
        let ids = super::helpers::ids(3);
        for &a in &ids {
            grid.add(a, Coord1D::new(2)).unwrap();
        }
        assert_eq!(grid.contents_of(Coord1D::new(2)).unwrap(), ids.as_slice());
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.occupied_cells(), 1);
    }

    #[test]
    fn off_grid_add_fails() {
        let mut grid = Grid::multi([4], [false]).unwrap();
        let ids = super::helpers::ids(1);
        assert!(matches!(grid.add(ids[0], Coord1D::new(4)), Err(SpaceError::LocationInvalid(_))));
        assert!(grid.is_empty());
    }

    #[test]
    fn wrapped_add_is_normalised() {
        let mut grid = Grid::multi([4], [true]).unwrap();
        let ids = super::helpers::ids(1);
        grid.add(ids[0], Coord1D::new(-1)).unwrap();
        assert_eq!(grid.location_of(ids[0]).unwrap(), Coord1D::new(3));
    }

    #[test]
    fn double_add_rejected() {
        let mut grid = Grid::multi([4], [false]).unwrap();
        let ids = super::helpers::ids(1);
        grid.add(ids[0], Coord1D::new(0)).unwrap();
        assert_eq!(grid.add(ids[0], Coord1D::new(1)), Err(SpaceError::DuplicateAgent(ids[0])));
        assert_eq!(grid.location_of(ids[0]).unwrap(), Coord1D::new(0));
    }

    #[test]
    fn delete_variants() {
        let ids = super::helpers::ids(2);
        let (foo, bar) = (ids[0], ids[1]);
        let (c2, c3) = (Coord2D::new(2, 5), Coord2D::new(3, 7));

        let mut grid = Grid::solo([10, 10], [true, true]).unwrap();
        grid.add(foo, c2).unwrap();
        assert_eq!(grid.delete(foo).unwrap(), foo);
        assert!(grid.is_empty());

        let mut grid = Grid::solo([10, 10], [true, true]).unwrap();
        grid.add(foo, c2).unwrap();
        assert_eq!(grid.delete(bar), Err(SpaceError::AgentNotFound(bar)));
        assert_eq!(grid.delete_at(bar, c2), Err(SpaceError::AgentNotFound(bar)));
        assert_eq!(grid.delete_at(foo, c3), Err(SpaceError::AgentNotFound(foo)));
        assert_eq!(grid.delete_at(foo, c2).unwrap(), foo);
        assert!(grid.contents_of(c2).unwrap().is_empty());
    }

    #[test]
    fn delete_at_off_grid_is_not_found() {
        let mut grid = Grid::solo([10, 10], [false, false]).unwrap();
        let ids = super::helpers::ids(1);
        grid.add(ids[0], Coord2D::new(1, 1)).unwrap();
        assert_eq!(grid.delete_at(ids[0], Coord2D::new(-1, 1)), Err(SpaceError::AgentNotFound(ids[0])));
    }

    #[test]
    fn round_trip_restores_state() {
        let mut grid = Grid::multi([5, 5], [false, false]).unwrap();
        let ids = super::helpers::ids(2);
        let c = Coord2D::new(1, 1);
        grid.add(ids[0], c).unwrap();
        let before: Vec<_> = grid.contents_of(c).unwrap().to_vec();

        grid.add(ids[1], c).unwrap();
        grid.delete(ids[1]).unwrap();

        assert_eq!(grid.contents_of(c).unwrap(), before.as_slice());
        assert!(!grid.contains(ids[1]));
        assert_eq!(grid.location_of(ids[1]), Err(SpaceError::AgentNotFound(ids[1])));
    }

    #[test]
    fn emptied_cells_are_dropped() {
        let mut grid = Grid::multi([5], [false]).unwrap();
        let ids = super::helpers::ids(1);
        grid.add(ids[0], Coord1D::new(3)).unwrap();
        grid.delete(ids[0]).unwrap();
        assert_eq!(grid.occupied_cells(), 0);
    }

    #[test]
    fn iter_in_id_order() {
        let mut grid = Grid::multi([5], [false]).unwrap();
        let ids = super::helpers::ids(3);
        grid.add(ids[2], Coord1D::new(0)).unwrap();
        grid.add(ids[0], Coord1D::new(4)).unwrap();
        grid.add(ids[1], Coord1D::new(2)).unwrap();
        let seen: Vec<_> = grid.iter().map(|(a, _)| a).collect();
        assert_eq!(seen, ids);
    }
}

// ── move ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod moves {
    use crate::{Coord2D, Grid, SpaceError};

    #[test]
    fn move_updates_both_directions() {
        let mut grid = Grid::solo([10, 10], [false, false]).unwrap();
        let ids = super::helpers::ids(1);
        let (from, to) = (Coord2D::new(1, 1), Coord2D::new(2, 2));
        grid.add(ids[0], from).unwrap();
        grid.move_agent(ids[0], to).unwrap();
        assert_eq!(grid.location_of(ids[0]).unwrap(), to);
        assert!(grid.contents_of(from).unwrap().is_empty());
        assert_eq!(grid.contents_of(to).unwrap(), &[ids[0]]);
    }

    #[test]
    fn failed_move_to_occupied_cell_changes_nothing() {
        let mut grid = Grid::solo([10, 10], [false, false]).unwrap();
        let ids = super::helpers::ids(2);
        let (a_at, b_at) = (Coord2D::new(1, 1), Coord2D::new(2, 2));
        grid.add(ids[0], a_at).unwrap();
        grid.add(ids[1], b_at).unwrap();

        let err = grid.move_agent(ids[0], b_at).unwrap_err();
        assert!(matches!(err, SpaceError::LocationUnavailable(_)));
        assert_eq!(grid.location_of(ids[0]).unwrap(), a_at);
        assert_eq!(grid.contents_of(a_at).unwrap(), &[ids[0]]);
        assert_eq!(grid.contents_of(b_at).unwrap(), &[ids[1]]);
    }

    #[test]
    fn failed_move_off_grid_changes_nothing() {
        let mut grid = Grid::solo([10, 10], [false, false]).unwrap();
        let ids = super::helpers::ids(1);
        let at = Coord2D::new(0, 0);
        grid.add(ids[0], at).unwrap();

        let err = grid.move_agent(ids[0], Coord2D::new(-1, 0)).unwrap_err();
        assert!(matches!(err, SpaceError::LocationInvalid(_)));
        assert_eq!(grid.location_of(ids[0]).unwrap(), at);
        assert_eq!(grid.contents_of(at).unwrap(), &[ids[0]]);
    }

    #[test]
    fn move_unknown_agent() {
        let mut grid = Grid::<2>::solo([10, 10], [false, false]).unwrap();
        let ids = super::helpers::ids(1);
        assert_eq!(
            grid.move_agent(ids[0], Coord2D::new(1, 1)),
            Err(SpaceError::AgentNotFound(ids[0]))
        );
    }

    #[test]
    fn solo_move_in_place_succeeds() {
        let mut grid = Grid::solo([3, 3], [true, true]).unwrap();
        let ids = super::helpers::ids(1);
        grid.add(ids[0], Coord2D::new(1, 1)).unwrap();
        // (4, 1) wraps to (1, 1): the agent's own cell.
        grid.move_agent(ids[0], Coord2D::new(4, 1)).unwrap();
        assert_eq!(grid.location_of(ids[0]).unwrap(), Coord2D::new(1, 1));
    }

    #[test]
    fn move_across_wrap() {
        let mut grid = Grid::multi([5, 5], [true, true]).unwrap();
        let ids = super::helpers::ids(1);
        grid.add(ids[0], Coord2D::new(0, 0)).unwrap();
        grid.move_agent(ids[0], Coord2D::new(-1, -1)).unwrap();
        assert_eq!(grid.location_of(ids[0]).unwrap(), Coord2D::new(4, 4));
    }
}

// ── Neighborhoods ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod neighborhoods {
    use std::collections::BTreeSet;

    use crate::{Coord, Coord1D, Coord2D, Coord3D, Grid, Neighborhood, SpaceError};

    fn set<const N: usize>(cs: &[Coord<N>]) -> BTreeSet<Coord<N>> {
        cs.iter().copied().collect()
    }

    #[test]
    fn one_d_wrap() {
        let grid = Grid::multi([10], [true]).unwrap();
        let hood = grid.neighborhood(Coord1D::new(0), false, Neighborhood::VonNeumann).unwrap();
        assert_eq!(hood, set(&[Coord1D::new(1), Coord1D::new(9)]));
    }

    #[test]
    fn one_d_no_wrap() {
        let grid = Grid::multi([10], [false]).unwrap();
        let hood = grid.neighborhood(Coord1D::new(0), false, Neighborhood::Moore).unwrap();
        assert_eq!(hood, set(&[Coord1D::new(1)]));
    }

    #[test]
    fn include_center() {
        let grid = Grid::multi([10], [false]).unwrap();
        let hood = grid.neighborhood(Coord1D::new(5), true, Neighborhood::VonNeumann).unwrap();
        assert_eq!(hood, set(&[Coord1D::new(4), Coord1D::new(5), Coord1D::new(6)]));
    }

    #[test]
    fn two_d_interior_counts() {
        let grid = Grid::multi([10, 10], [false, false]).unwrap();
        let c = Coord2D::new(5, 5);
        assert_eq!(grid.neighborhood(c, false, Neighborhood::VonNeumann).unwrap().len(), 4);
        assert_eq!(grid.neighborhood(c, false, Neighborhood::Moore).unwrap().len(), 8);
        assert_eq!(grid.neighborhood(c, true, Neighborhood::Moore).unwrap().len(), 9);
    }

    #[test]
    fn two_d_corner_clipped() {
        let grid = Grid::multi([10, 10], [false, false]).unwrap();
        let hood = grid.neighborhood(Coord2D::new(0, 0), false, Neighborhood::Moore).unwrap();
        assert_eq!(
            hood,
            set(&[Coord2D::new(0, 1), Coord2D::new(1, 0), Coord2D::new(1, 1)])
        );
    }

    #[test]
    fn two_d_corner_wrapped_one_axis() {
        let grid = Grid::multi([10, 10], [true, false]).unwrap();
        let hood = grid.neighborhood(Coord2D::new(0, 0), false, Neighborhood::VonNeumann).unwrap();
        assert_eq!(
            hood,
            set(&[Coord2D::new(1, 0), Coord2D::new(9, 0), Coord2D::new(0, 1)])
        );
    }

    #[test]
    fn three_d_counts() {
        let grid = Grid::multi([5, 5, 5], [true, true, true]).unwrap();
        let c = Coord3D::new(0, 0, 0);
        assert_eq!(grid.neighborhood(c, false, Neighborhood::VonNeumann).unwrap().len(), 6);
        assert_eq!(grid.neighborhood(c, false, Neighborhood::Moore).unwrap().len(), 26);
    }

    #[test]
    fn small_wrapped_extent_collapses() {
        // Extent 2: both x-1 and x+1 land on the same cell.
        let grid = Grid::multi([2], [true]).unwrap();
        let hood = grid.neighborhood(Coord1D::new(0), false, Neighborhood::VonNeumann).unwrap();
        assert_eq!(hood, set(&[Coord1D::new(1)]));

        // Extent 1: every neighbor is the center itself.
        let grid = Grid::multi([1], [true]).unwrap();
        let hood = grid.neighborhood(Coord1D::new(0), false, Neighborhood::VonNeumann).unwrap();
        assert!(hood.is_empty());
        let hood = grid.neighborhood(Coord1D::new(0), true, Neighborhood::VonNeumann).unwrap();
        assert_eq!(hood, set(&[Coord1D::new(0)]));
    }

    #[test]
    fn by_agent() {
        let mut grid = Grid::multi([10], [true]).unwrap();
        let ids = super::helpers::ids(2);
        grid.add(ids[0], Coord1D::new(0)).unwrap();
        let hood = grid.neighborhood_of(ids[0], false, Neighborhood::VonNeumann).unwrap();
        assert_eq!(hood, set(&[Coord1D::new(1), Coord1D::new(9)]));
        assert_eq!(
            grid.neighborhood_of(ids[1], false, Neighborhood::VonNeumann),
            Err(SpaceError::AgentNotFound(ids[1]))
        );
    }

    #[test]
    fn off_grid_center() {
        let grid = Grid::multi([10], [false]).unwrap();
        assert!(matches!(
            grid.neighborhood(Coord1D::new(10), false, Neighborhood::VonNeumann),
            Err(SpaceError::LocationInvalid(_))
        ));
    }
}

// ── Distance on a grid ────────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use crate::{Coord2D, Distance, Grid};

    #[test]
    fn wrapped_axis_takes_short_way() {
        let grid = Grid::multi([10, 10], [true, false]).unwrap();
        let a = Coord2D::new(0, 0);
        let b = Coord2D::new(9, 0);
        assert_eq!(grid.distance(a, b, Distance::Manhattan).unwrap(), 1.0);

        let c = Coord2D::new(0, 9);
        assert_eq!(grid.distance(a, c, Distance::Manhattan).unwrap(), 9.0);
    }

    #[test]
    fn chebyshev_matches_moore_ring() {
        let grid = Grid::multi([10, 10], [false, false]).unwrap();
        let d = grid
            .distance(Coord2D::new(4, 4), Coord2D::new(5, 5), Distance::Chebyshev)
            .unwrap();
        assert_eq!(d, 1.0);
    }
}

// ── Property: the two maps always agree ───────────────────────────────────────

#[cfg(test)]
mod consistency {
    use proptest::prelude::*;

    use crate::{Coord2D, Grid, Occupancy, GridConfig};

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, i32, i32),
        Move(usize, i32, i32),
        Delete(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..6usize, -2..7i32, -2..7i32).prop_map(|(a, x, y)| Op::Add(a, x, y)),
            (0..6usize, -2..7i32, -2..7i32).prop_map(|(a, x, y)| Op::Move(a, x, y)),
            (0..6usize).prop_map(Op::Delete),
        ]
    }

    fn check(grid: &Grid<2>) {
        let mut seen = 0;
        for x in 0..5 {
            for y in 0..5 {
                let c = Coord2D::new(x, y);
                let here = grid.contents_of(c).unwrap();
                if grid.occupancy() == Occupancy::Solo {
                    assert!(here.len() <= 1);
                }
                for &a in here {
                    assert_eq!(grid.location_of(a).unwrap(), c);
                }
                seen += here.len();
            }
        }
        assert_eq!(seen, grid.len());
        for (a, c) in grid.iter() {
            assert!(grid.contents_of(c).unwrap().contains(&a));
        }
    }

    proptest! {
        #[test]
        fn maps_agree_after_any_ops(
            solo in any::<bool>(),
            wrap_x in any::<bool>(),
            ops in proptest::collection::vec(op(), 0..60),
        ) {
            let occupancy = if solo { Occupancy::Solo } else { Occupancy::Multi };
            let mut grid = Grid::new(
                GridConfig::new([5, 5]).wrap([wrap_x, false]).occupancy(occupancy),
            ).unwrap();
            let ids = super::helpers::ids(6);

            for op in ops {
                match op {
                    Op::Add(a, x, y) => {
                        let _ = grid.add(ids[a], Coord2D::new(x, y));
                    }
                    Op::Move(a, x, y) => {
                        let before = grid.location_of(ids[a]);
                        if grid.move_agent(ids[a], Coord2D::new(x, y)).is_err() {
                            prop_assert_eq!(grid.location_of(ids[a]), before);
                        }
                    }
                    Op::Delete(a) => {
                        let _ = grid.delete(ids[a]);
                    }
                }
                check(&grid);
            }
        }
    }
}
