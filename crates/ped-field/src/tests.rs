//! Unit tests for ped-field.
//!
//! All tests build small grids by hand so expected values can be worked out
//! on paper.

#[cfg(test)]
mod helpers {
    use ped_core::{CellPos, Grid};

    /// 5×5 grid with the target in the bottom-right corner.
    pub fn open_5x5() -> Grid {
        let mut g = Grid::new(5, 5).unwrap();
        g.set_target(CellPos::new(4, 4)).unwrap();
        g
    }

    /// 7×7 grid, target at (0, 0), and a 3×3 obstacle ring centred on (4, 4).
    pub fn sealed_ring() -> Grid {
        let mut g = Grid::new(7, 7).unwrap();
        g.set_target(CellPos::new(0, 0)).unwrap();
        for r in 3..=5 {
            for c in 3..=5 {
                if (r, c) != (4, 4) {
                    g.add_obstacle(CellPos::new(r, c)).unwrap();
                }
            }
        }
        g
    }

    pub fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use std::f64::consts::SQRT_2;

    use ped_core::{CellPos, CellState, Grid};

    use super::helpers::{approx, open_5x5, sealed_ring};
    use crate::{DijkstraSolver, FieldError, PotentialSolver};

    #[test]
    fn target_is_zero() {
        let mut g = open_5x5();
        DijkstraSolver.compute(&mut g).unwrap();
        assert_eq!(g.at(CellPos::new(4, 4)).potential, 0.0);
    }

    #[test]
    fn far_corner_is_four_diagonals() {
        let mut g = open_5x5();
        DijkstraSolver.compute(&mut g).unwrap();
        let p = g.at(CellPos::new(0, 0)).potential;
        assert!(approx(p, 4.0 * SQRT_2), "got {p}");
        assert!((p - 5.657).abs() < 1e-3);
    }

    #[test]
    fn mixed_path_is_diagonals_plus_straights() {
        let mut g = open_5x5();
        DijkstraSolver.compute(&mut g).unwrap();
        // (0, 2) → (4, 4): 2 diagonal + 2 straight.
        assert!(approx(g.at(CellPos::new(0, 2)).potential, 2.0 * SQRT_2 + 2.0));
        assert!(approx(g.at(CellPos::new(4, 0)).potential, 4.0));
    }

    #[test]
    fn every_reachable_cell_has_a_downhill_neighbor() {
        let mut g = Grid::new(6, 8).unwrap();
        g.set_target(CellPos::new(5, 7)).unwrap();
        for c in 1..7 {
            g.add_obstacle(CellPos::new(3, c)).unwrap();
        }
        DijkstraSolver.compute(&mut g).unwrap();

        for i in 0..g.len() {
            let pos = g.pos_of(i);
            let cell = g.at(pos);
            if cell.state() == CellState::Obstacle || cell.state() == CellState::Target {
                continue;
            }
            assert!(cell.is_reachable(), "{pos} should be reachable");
            let best = g
                .neighbors(pos, &CellState::IMPASSABLE)
                .map(|n| g.at(n).potential + pos.distance(n))
                .fold(f64::INFINITY, f64::min);
            assert!(approx(best, cell.potential), "{pos}: {best} vs {}", cell.potential);
        }
    }

    #[test]
    fn obstacles_force_detour() {
        // Wall across row 2 with a gap at column 4.
        let mut g = open_5x5();
        for c in 0..4 {
            g.add_obstacle(CellPos::new(2, c)).unwrap();
        }
        DijkstraSolver.compute(&mut g).unwrap();
        let open = {
            let mut o = open_5x5();
            DijkstraSolver.compute(&mut o).unwrap();
            o.at(CellPos::new(0, 0)).potential
        };
        assert!(g.at(CellPos::new(0, 0)).potential > open);
        assert!(g.at(CellPos::new(2, 0)).potential.is_infinite());
    }

    #[test]
    fn sealed_cell_stays_infinite() {
        let mut g = sealed_ring();
        let stats = DijkstraSolver.compute(&mut g).unwrap();
        assert!(g.at(CellPos::new(4, 4)).potential.is_infinite());
        // 49 cells − 8 obstacles − 1 sealed cell.
        assert_eq!(stats.reachable, 40);
    }

    #[test]
    fn missing_target_errors() {
        let mut g = Grid::new(3, 3).unwrap();
        assert_eq!(DijkstraSolver.compute(&mut g).unwrap_err(), FieldError::NoTarget);
        assert!(g.cells().iter().all(|c| c.potential.is_infinite()));
    }

    #[test]
    fn recompute_resets_previous_values() {
        let mut g = open_5x5();
        DijkstraSolver.compute(&mut g).unwrap();
        g.set_target(CellPos::new(0, 0)).unwrap();
        DijkstraSolver.compute(&mut g).unwrap();
        assert_eq!(g.at(CellPos::new(0, 0)).potential, 0.0);
        assert!(approx(g.at(CellPos::new(4, 4)).potential, 4.0 * SQRT_2));
    }
}

// ── Grid-step (legacy) ────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_steps {
    use ped_core::{CellPos, PotentialMethod};

    use super::helpers::{open_5x5, sealed_ring};
    use crate::{compute_potential, GridStepSolver, PotentialSolver};

    #[test]
    fn open_grid_is_chebyshev_distance() {
        let mut g = open_5x5();
        GridStepSolver.compute(&mut g).unwrap();
        for i in 0..g.len() {
            let pos = g.pos_of(i);
            let expected = (4 - pos.row).max(4 - pos.col) as f64;
            assert_eq!(g.at(pos).potential, expected, "{pos}");
        }
    }

    #[test]
    fn sealed_cell_stays_infinite() {
        let mut g = sealed_ring();
        GridStepSolver.compute(&mut g).unwrap();
        assert!(g.at(CellPos::new(4, 4)).potential.is_infinite());
    }

    #[test]
    fn dispatch_by_method() {
        let mut a = open_5x5();
        let mut b = open_5x5();
        compute_potential(&mut a, PotentialMethod::Dijkstra).unwrap();
        compute_potential(&mut b, PotentialMethod::GridSteps).unwrap();
        assert_eq!(b.at(CellPos::new(0, 0)).potential, 4.0);
        assert!(a.at(CellPos::new(0, 0)).potential > 5.0);
    }
}

// ── Penalty ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod penalty {
    use ped_core::{CellPos, Grid};

    use super::helpers::approx;
    use crate::{FieldError, PenaltyKernel, PenaltySign};

    fn kernel() -> PenaltyKernel {
        PenaltyKernel::new(3).unwrap()
    }

    #[test]
    fn zero_radius_rejected() {
        assert_eq!(PenaltyKernel::new(0).unwrap_err(), FieldError::InvalidRadius(0));
    }

    #[test]
    fn kernel_values() {
        let k = kernel();
        assert!(approx(k.weight(0.0).unwrap(), (-1.0f64 / 9.0).exp()));
        assert!(approx(k.weight(1.0).unwrap(), (-1.0f64 / 8.0).exp()));
        assert!(approx(k.weight(2.0).unwrap(), (-1.0f64 / 7.0).exp()));
        assert_eq!(k.weight(9.0), None);
        assert_eq!(k.weight(10.0), None);
    }

    #[test]
    fn kernel_decreases_with_distance() {
        let k = kernel();
        let ws: Vec<f64> = [0.0, 1.0, 2.0, 4.0, 5.0, 8.0].iter().map(|&d| k.weight(d).unwrap()).collect();
        assert!(ws.windows(2).all(|w| w[0] > w[1]), "{ws:?}");
        assert!(ws.iter().all(|w| w.is_finite() && *w > 0.0));
    }

    #[test]
    fn apply_touches_only_cells_inside_radius() {
        let mut g = Grid::new(9, 9).unwrap();
        kernel().add(&mut g, CellPos::new(4, 4), PenaltySign::Apply);
        for i in 0..g.len() {
            let pos = g.pos_of(i);
            let inside = pos.distance_sq(CellPos::new(4, 4)) < 9.0;
            assert_eq!(g.at(pos).penalty > 0.0, inside, "{pos}");
        }
        // Peak at the pedestrian's own cell.
        let peak = g.at(CellPos::new(4, 4)).penalty;
        assert!(g.cells().iter().all(|c| c.penalty <= peak));
    }

    #[test]
    fn window_is_clipped_at_edges() {
        let mut g = Grid::new(3, 3).unwrap();
        kernel().add(&mut g, CellPos::new(0, 0), PenaltySign::Apply);
        // (2, 2) is √8 < 3 away and inside the grid.
        assert!(g.at(CellPos::new(2, 2)).penalty > 0.0);
    }

    #[test]
    fn apply_then_retract_round_trips() {
        let mut g = Grid::new(10, 10).unwrap();
        for (r, c) in [(1, 1), (2, 2), (2, 3), (7, 8), (9, 0)] {
            g.add_pedestrian(CellPos::new(r, c)).unwrap();
        }
        let before: Vec<f64> = g.cells().iter().map(|c| c.penalty).collect();

        let k = kernel();
        k.add_all(&mut g, PenaltySign::Apply);
        assert!(g.cells().iter().any(|c| c.penalty > 0.0));
        k.add_all(&mut g, PenaltySign::Retract);

        for (cell, old) in g.cells().iter().zip(before) {
            assert!(approx(cell.penalty, old));
        }
    }

    #[test]
    fn contributions_accumulate() {
        let mut g = Grid::new(5, 5).unwrap();
        let k = kernel();
        k.add(&mut g, CellPos::new(2, 1), PenaltySign::Apply);
        let single = g.at(CellPos::new(2, 2)).penalty;
        k.add(&mut g, CellPos::new(2, 3), PenaltySign::Apply);
        assert!(approx(g.at(CellPos::new(2, 2)).penalty, 2.0 * single));
    }
}
