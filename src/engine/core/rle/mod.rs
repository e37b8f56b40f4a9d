pub mod run_length;

pub use run_length::{RleItem, collapse_runs, expand_runs};
