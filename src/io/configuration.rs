//! Generation constants and runtime configuration defaults

// Grid defaults match the classic 20x20 demo map
/// Default number of cells along the X axis
pub const DEFAULT_WIDTH: usize = 20;
/// Default number of cells along the Y axis
pub const DEFAULT_HEIGHT: usize = 20;

// A 128x128 terrain map lowers to about 1.6M variables and 4.7M clauses
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 128;

/// Edge length in pixels of one sprite in the sheet and one cell in the output
pub const DEFAULT_TILE_SIZE: u32 = 64;

/// Sprite sheet read when no path is given
pub const DEFAULT_TILE_SHEET: &str = "tiles.png";

/// Output image written when no path is given
pub const DEFAULT_OUTPUT: &str = "out.png";

// Target ratio bounds are floor(total / divisor)
/// Divisor giving the lower bound on target-valued cells
pub const TARGET_LOWER_DIVISOR: usize = 4;
/// Divisor giving the upper bound on target-valued cells
pub const TARGET_UPPER_DIVISOR: usize = 2;

/// Domains at or below this size get pairwise at-most-one clauses, larger ones a ladder
pub const PAIRWISE_AT_MOST_ONE_LIMIT: usize = 8;

/// Spinner redraw interval while the solver runs
pub const SPINNER_TICK_MS: u64 = 80;
