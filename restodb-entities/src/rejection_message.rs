use crate::id::*;

pub const FOR_WHAT_MAX_LEN: usize = 100;
pub const MESSAGE_MAX_LEN: usize = 500;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionMessage {
    pub id        : Id,
    pub recipient : Id,
    pub for_what  : String,
    pub message   : String,
    pub read      : bool,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRejectionMessage {
    pub recipient : Id,
    pub for_what  : String,
    pub message   : String,
}
