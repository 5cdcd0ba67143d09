//! Grid-shaped text dumps for terminals and debugging.
//!
//! Not a persisted format: column widths and number formatting may change.

use ped_core::{Cell, CellState, Grid};

/// One-character symbol for a cell state.
pub const fn symbol(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Pedestrian => 'P',
        CellState::Obstacle => 'O',
        CellState::Target => 'T',
    }
}

/// One line per grid row, one symbol per cell.
pub fn render_states(grid: &Grid) -> String {
    render(grid, "", |cell| symbol(cell.state()).to_string())
}

/// Potentials with two decimals, right-aligned; unreachable cells show `inf`.
pub fn render_potentials(grid: &Grid) -> String {
    render(grid, " ", |cell| {
        if cell.is_reachable() {
            format!("{:>6.2}", cell.potential)
        } else {
            format!("{:>6}", "inf")
        }
    })
}

/// Positive penalties with two decimals; everything else is blank.
pub fn render_penalties(grid: &Grid) -> String {
    render(grid, " ", |cell| {
        if cell.penalty > 0.0 {
            format!("{:>5.2}", cell.penalty)
        } else {
            " ".repeat(5)
        }
    })
}

fn render(grid: &Grid, sep: &str, cell_fn: impl Fn(&Cell) -> String) -> String {
    let mut out = String::with_capacity(grid.len() * (sep.len() + 1));
    for r in 0..grid.rows() {
        let line: Vec<String> = grid.row(r).iter().map(&cell_fn).collect();
        out.push_str(&line.join(sep));
        out.push('\n');
    }
    out
}
