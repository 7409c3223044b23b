use super::types::Position;

pub const GRID_COLUMNS: usize = 3;
pub const COLUMN_WIDTH: f64 = 250.0;
pub const ROW_HEIGHT: f64 = 150.0;
pub const GRID_MARGIN: f64 = 50.0;

/// Places a node on a 3-column grid by its ordinal index.
///
/// Distinct indices never collide, and re-running a conversion on an
/// unchanged document yields an identical layout.
pub fn grid_position(index: usize) -> Position {
    Position {
        x: (index % GRID_COLUMNS) as f64 * COLUMN_WIDTH + GRID_MARGIN,
        y: (index / GRID_COLUMNS) as f64 * ROW_HEIGHT + GRID_MARGIN,
    }
}
