use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Invalid size for sysex msg: {0:02x?}")]
  InvalidSysExSize(Box<[u8]>),

  #[error("Invalid sysex init tag for msg: {0:02x?}")]
  InvalidSysExInitTag(Box<[u8]>),

  #[error("Invalid sysex final tag for msg: {0:02x?}")]
  InvalidSysExFinalTag(Box<[u8]>),
}
