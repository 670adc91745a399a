//! Palette constants and runtime configuration defaults

// Palette
/// Background (empty) colour
pub const BACKGROUND: u8 = 0;
/// Largest colour value in the palette
pub const MAX_COLOR: u8 = 9;
/// Number of distinct palette colours
pub const PALETTE_SIZE: usize = MAX_COLOR as usize + 1;

/// Side length of the fixed-shape primitive entities
pub const PRIMITIVE_SIZE: i32 = 3;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Extension of grid and task documents
pub const DOCUMENT_EXTENSION: &str = "json";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
