/// Separator placed between the two renderings by `sparse_squish`.
pub const SPARSE_SEPARATOR: &str = " ";

/// Character removed from both renderings by `dense_squish`.
pub const DENSE_STRIPPED_CHAR: char = ' ';

/// Number of positional fields held by a `SquishableRecord`.
pub const RECORD_FIELD_COUNT: usize = 3;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
