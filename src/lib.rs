pub mod commands;
pub mod config;
pub mod error;
pub mod ops;
pub mod record;
pub mod value;

pub use error::SquishError;
pub use ops::{dense_squish, imperfect_squish, sparse_squish, squish, squish_list, squish_object};
pub use record::SquishableRecord;
pub use value::{Value, ValueKind};
