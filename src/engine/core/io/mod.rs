pub mod be_slice_reader;
pub mod varint;

pub use be_slice_reader::{BeSliceReader, SIZE_F64, SIZE_I16, SIZE_I32, SIZE_I64};
pub use varint::{MAX_VARINT_GROUPS, MAX_VARINT_VALUE, decode_varint, write_varint};
