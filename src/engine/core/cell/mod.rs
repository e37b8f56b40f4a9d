pub mod wire_cell;

pub use wire_cell::{
    Cell, TAG_DELTA, TAG_DICT_REF, TAG_EMPTY, TAG_FLOAT64, TAG_INT8, TAG_INT16, TAG_INT32,
    TAG_INT64, TAG_RAW_STRING,
};
