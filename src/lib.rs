#![doc = include_str!("../README.md")]

pub mod context;
pub mod fault;
pub mod reply;

#[doc(inline)]
pub use context::ReplyContext;

#[doc(inline)]
pub use fault::{CodedFault, Fault};

#[doc(inline)]
pub use reply::{ApiReply, Reply};
