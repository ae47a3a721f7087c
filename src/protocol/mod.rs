pub mod codec;
pub mod messages;

use crate::midi;

/// Typed protocol values that render into a transport message.
pub trait Encode {
  fn encode(&self) -> midi::Msg;
}
