pub mod cell;
pub mod compression;
pub mod container;
pub mod dictionary;
pub mod io;
pub mod normalize;
pub mod numeric;
pub mod rle;
