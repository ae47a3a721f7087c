//! Codec for the Mackie Control surface protocol, translating between
//! transport level MIDI messages and typed surface commands.

pub mod midi;
pub(crate) mod protocol;

pub use protocol::codec;
pub use protocol::messages;
pub use protocol::messages::Message;
pub use protocol::Encode;
