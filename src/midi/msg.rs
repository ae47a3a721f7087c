use super::{sysex, tag, u14, Error};

/// An owned, immutable MIDI 1.0 message: either a complete system
/// exclusive frame or a channel voice message.
///
/// The default value is the empty message; every predicate returns
/// false for it and every reader returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Msg(Box<[u8]>);

impl Msg {
  pub fn inner(&self) -> &[u8] {
    self.0.as_ref()
  }

  /// Frames `data` in the sysex init and final tags.
  pub fn new_sysex(data: &[u8]) -> Self {
    let mut buf = Vec::with_capacity(data.len() + 2);

    buf.push(sysex::TAG);
    buf.extend(data);
    buf.push(sysex::END_TAG);

    Self(buf.into())
  }

  /// Channels are 1 based, masked into the low nibble of the status byte.
  /// Data bytes are taken as given, the caller owns their range.
  pub fn note_on(channel: u8, note: u8, velocity: u8) -> Self {
    Self([tag::NOTE_ON | chan_bits(channel), note, velocity].into())
  }

  pub fn control_change(channel: u8, controller: u8, value: u8) -> Self {
    Self([tag::CONTROL_CHANGE | chan_bits(channel), controller, value].into())
  }

  pub fn pitch_wheel(channel: u8, position: u16) -> Self {
    let (lsb, msb) = u14::split(position);
    Self([tag::PITCH_WHEEL | chan_bits(channel), lsb, msb].into())
  }

  pub fn channel_pressure(channel: u8, value: u8) -> Self {
    Self([tag::CHANNEL_PRESSURE | chan_bits(channel), value].into())
  }

  /// The payload between the sysex init and final tags.
  pub fn sysex_data(&self) -> Result<&[u8], Error> {
    if self.0.len() < 3 {
      return Err(Error::InvalidSysExSize(self.0.clone()));
    }

    if self.0[0] != sysex::TAG {
      return Err(Error::InvalidSysExInitTag(self.0.clone()));
    }

    if self.0[self.0.len() - 1] != sysex::END_TAG {
      return Err(Error::InvalidSysExFinalTag(self.0.clone()));
    }

    Ok(&self.0[1..self.0.len() - 1])
  }

  pub fn is_sysex(&self) -> bool {
    self.0.len() >= 3 && self.0[0] == sysex::TAG && self.0[self.0.len() - 1] == sysex::END_TAG
  }

  pub fn is_note_on_or_off(&self) -> bool {
    self.0.len() >= 3 && matches!(self.status_tag(), Some(tag::NOTE_ON | tag::NOTE_OFF))
  }

  pub fn is_control_change(&self) -> bool {
    self.0.len() >= 3 && self.status_tag() == Some(tag::CONTROL_CHANGE)
  }

  pub fn is_pitch_wheel(&self) -> bool {
    self.0.len() >= 3 && self.status_tag() == Some(tag::PITCH_WHEEL)
  }

  pub fn is_channel_pressure(&self) -> bool {
    self.0.len() >= 2 && self.status_tag() == Some(tag::CHANNEL_PRESSURE)
  }

  pub fn status(&self) -> Option<u8> {
    self.0.first().copied()
  }

  fn status_tag(&self) -> Option<u8> {
    self.status().map(|status| status & 0xf0)
  }

  /// 1 based channel of a channel voice message.
  pub fn channel(&self) -> Option<u8> {
    let status = self.status()?;
    (0x80..0xf0).contains(&status).then(|| (status & 0x0f) + 1)
  }

  pub fn data1(&self) -> Option<u8> {
    self.0.get(1).copied()
  }

  pub fn data2(&self) -> Option<u8> {
    self.0.get(2).copied()
  }

  /// Reassembled 14 bits pitch wheel position.
  pub fn pitch_wheel_value(&self) -> Option<u16> {
    if self.is_pitch_wheel() {
      Some(u14::join(self.0[1], self.0[2]))
    } else {
      None
    }
  }
}

fn chan_bits(channel: u8) -> u8 {
  channel.wrapping_sub(1) & 0x0f
}

impl<const S: usize> From<[u8; S]> for Msg {
  fn from(buf: [u8; S]) -> Self {
    Self(buf.into())
  }
}

impl From<&[u8]> for Msg {
  fn from(buf: &[u8]) -> Self {
    Self(buf.into())
  }
}
