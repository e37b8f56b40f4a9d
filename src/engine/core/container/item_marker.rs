use crate::engine::errors::FormatErrorKind;

/// Leading byte of every version 2 item.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemMarker {
    Literal = 0xFD,
    Repeat = 0xFE,
}

impl TryFrom<u8> for ItemMarker {
    type Error = FormatErrorKind;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0xFD => Ok(ItemMarker::Literal),
            0xFE => Ok(ItemMarker::Repeat),
            other => Err(FormatErrorKind::UnknownItemMarker(other)),
        }
    }
}

impl From<ItemMarker> for u8 {
    fn from(m: ItemMarker) -> u8 {
        m as u8
    }
}
