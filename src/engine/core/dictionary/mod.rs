pub mod string_dictionary;

pub use string_dictionary::{Dictionary, REFERENCE_OVERHEAD};
