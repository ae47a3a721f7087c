/// System exclusive command byte, at offset 4 of the sysex payload,
/// right after the manufacturer prefix. The number space is sparse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
  DeviceQuery = 0,
  HostConnectionQuery = 1,
  HostConnectionReply = 2,
  HostConnectionConfirmation = 3,
  HostConnectionError = 4,
  LcdBackLightSaver = 11,
  TouchlessMovableFaders = 12,
  FaderTouchSensitivity = 14,
  GoOffline = 15,
  TimeCodeBbtDisplay = 16,
  Assignment7SegmentDisplay = 17,
  Lcd = 18,
  VersionRequest = 19,
  VersionReply = 20,
  ChannelMeterMode = 32,
  GlobalLcdMeterMode = 33,
  AllFadersToMinimum = 97,
  AllLedsOff = 98,
  Reset = 99,
}

impl Opcode {
  pub const ALL: [Self; 19] = [
    Self::DeviceQuery,
    Self::HostConnectionQuery,
    Self::HostConnectionReply,
    Self::HostConnectionConfirmation,
    Self::HostConnectionError,
    Self::LcdBackLightSaver,
    Self::TouchlessMovableFaders,
    Self::FaderTouchSensitivity,
    Self::GoOffline,
    Self::TimeCodeBbtDisplay,
    Self::Assignment7SegmentDisplay,
    Self::Lcd,
    Self::VersionRequest,
    Self::VersionReply,
    Self::ChannelMeterMode,
    Self::GlobalLcdMeterMode,
    Self::AllFadersToMinimum,
    Self::AllLedsOff,
    Self::Reset,
  ];

  pub fn from_byte(byte: u8) -> Option<Self> {
    Self::ALL.into_iter().find(|opcode| *opcode as u8 == byte)
  }

  pub fn is_valid(byte: u8) -> bool {
    Self::from_byte(byte).is_some()
  }
}

/// Decoded system exclusive command. Text and display payloads borrow
/// from the storage of the message they were decoded from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SysEx<'a> {
  DeviceQuery,
  HostConnectionQuery { serial: [u8; 7], challenge: u32 },
  HostConnectionReply { serial: [u8; 7], response: u32 },
  HostConnectionConfirmation { serial: [u8; 7] },
  HostConnectionError { serial: [u8; 7] },
  /// The timeout byte is only present on the wire when state is non zero.
  LcdBackLightSaver { state: u8, timeout: Option<u8> },
  TouchlessMovableFaders { state: u8 },
  FaderTouchSensitivity { channel: u8, value: u8 },
  GoOffline,
  TimeCodeBbtDisplay { data: &'a [u8] },
  Assignment7SegmentDisplay { data: [u8; 2] },
  Lcd { place: u8, text: &'a [u8] },
  VersionRequest,
  VersionReply { text: &'a [u8] },
  ChannelMeterMode { channel: u8, mode: u8 },
  GlobalLcdMeterMode { mode: u8 },
  AllFadersToMinimum,
  AllLedsOff,
  Reset,
}

impl SysEx<'_> {
  pub fn opcode(&self) -> Opcode {
    match self {
      Self::DeviceQuery => Opcode::DeviceQuery,
      Self::HostConnectionQuery { .. } => Opcode::HostConnectionQuery,
      Self::HostConnectionReply { .. } => Opcode::HostConnectionReply,
      Self::HostConnectionConfirmation { .. } => Opcode::HostConnectionConfirmation,
      Self::HostConnectionError { .. } => Opcode::HostConnectionError,
      Self::LcdBackLightSaver { .. } => Opcode::LcdBackLightSaver,
      Self::TouchlessMovableFaders { .. } => Opcode::TouchlessMovableFaders,
      Self::FaderTouchSensitivity { .. } => Opcode::FaderTouchSensitivity,
      Self::GoOffline => Opcode::GoOffline,
      Self::TimeCodeBbtDisplay { .. } => Opcode::TimeCodeBbtDisplay,
      Self::Assignment7SegmentDisplay { .. } => Opcode::Assignment7SegmentDisplay,
      Self::Lcd { .. } => Opcode::Lcd,
      Self::VersionRequest => Opcode::VersionRequest,
      Self::VersionReply { .. } => Opcode::VersionReply,
      Self::ChannelMeterMode { .. } => Opcode::ChannelMeterMode,
      Self::GlobalLcdMeterMode { .. } => Opcode::GlobalLcdMeterMode,
      Self::AllFadersToMinimum => Opcode::AllFadersToMinimum,
      Self::AllLedsOff => Opcode::AllLedsOff,
      Self::Reset => Opcode::Reset,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn opcode_membership() {
    let valid: Vec<u8> = [0, 1, 2, 3, 4, 11, 12, 14, 15, 16, 17, 18, 19, 20, 32, 33, 97, 98, 99].into();

    for byte in 0..=u8::MAX {
      assert_eq!(Opcode::is_valid(byte), valid.contains(&byte), "byte {byte}");
    }
  }

  #[test]
  fn opcode_from_byte() {
    assert_eq!(Opcode::from_byte(0), Some(Opcode::DeviceQuery));
    assert_eq!(Opcode::from_byte(13), None);
    assert_eq!(Opcode::from_byte(20), Some(Opcode::VersionReply));
    assert_eq!(Opcode::from_byte(99), Some(Opcode::Reset));
    assert_eq!(Opcode::from_byte(100), None);
  }
}
