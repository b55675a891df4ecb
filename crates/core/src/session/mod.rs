//! Session state: the currently authenticated identity, if any.

pub mod holder;
pub mod ports;

pub use holder::{session_channel, SessionHolder, SessionWriter};
