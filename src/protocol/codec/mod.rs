mod channel_voice;
mod system_exclusive;
pub mod values;

pub use channel_voice::{decode_channel_voice, FADER_CHANNELS, SURFACE_CHANNEL};
pub use system_exclusive::{decode_system_exclusive, encode_system_exclusive, HEADER_LEN};
