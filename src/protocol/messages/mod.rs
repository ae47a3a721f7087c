pub mod channel_voice;
pub mod system_exclusive;

use crate::midi;
use crate::protocol::codec::{decode_channel_voice, decode_system_exclusive, HEADER_LEN};
use crate::protocol::messages::channel_voice::{Button, ChannelVoice, Controller, Velocity};
use crate::protocol::messages::system_exclusive::{Opcode, SysEx};
use crate::protocol::Encode;

/// A single surface control message, wrapping exactly one transport
/// message. Classification and field extraction are pure functions of
/// the wrapped bytes.
///
/// The default value wraps the empty transport message and classifies
/// as nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
  midi: midi::Msg,
}

impl Message {
  pub fn from_midi(midi: midi::Msg) -> Self {
    Self { midi }
  }

  pub fn into_midi(self) -> midi::Msg {
    self.midi
  }

  pub fn as_midi(&self) -> &midi::Msg {
    &self.midi
  }

  /// True for a sysex frame whose payload carries the manufacturer
  /// prefix and an opcode from the table. The opcode specific body may
  /// still be truncated, in which case [`Self::system_exclusive`]
  /// returns `None`.
  pub fn is_system_exclusive(&self) -> bool {
    match self.midi.sysex_data() {
      Ok(payload) => payload
        .get(HEADER_LEN)
        .map_or(false, |opcode| Opcode::is_valid(*opcode)),
      Err(_) => false,
    }
  }

  pub fn is_note(&self) -> bool {
    matches!(self.channel_voice(), Some(ChannelVoice::Note { .. }))
  }

  pub fn is_control(&self) -> bool {
    matches!(self.channel_voice(), Some(ChannelVoice::Control { .. }))
  }

  pub fn is_fader_position(&self) -> bool {
    matches!(self.channel_voice(), Some(ChannelVoice::FaderPosition { .. }))
  }

  pub fn is_meter_level(&self) -> bool {
    matches!(self.channel_voice(), Some(ChannelVoice::MeterLevel { .. }))
  }

  /// True when the message belongs to any of the surface categories.
  pub fn is_surface_message(&self) -> bool {
    self.is_system_exclusive() || self.channel_voice().is_some()
  }

  /// Decoded sysex command, borrowing text payloads from this message.
  pub fn system_exclusive(&self) -> Option<SysEx<'_>> {
    let payload = self.midi.sysex_data().ok()?;
    let sysex = decode_system_exclusive(payload);
    if sysex.is_none() {
      log::debug!("Unrecognized sysex payload: {payload:02x?}");
    }
    sysex
  }

  /// Decoded channel voice message.
  pub fn channel_voice(&self) -> Option<ChannelVoice> {
    decode_channel_voice(&self.midi)
  }
}

/// Sysex command constructors.
impl Message {
  pub fn device_query() -> Self {
    SysEx::DeviceQuery.encode().into()
  }

  pub fn host_connection_query(serial: [u8; 7], challenge: u32) -> Self {
    SysEx::HostConnectionQuery { serial, challenge }.encode().into()
  }

  pub fn host_connection_reply(serial: [u8; 7], response: u32) -> Self {
    SysEx::HostConnectionReply { serial, response }.encode().into()
  }

  pub fn host_connection_confirmation(serial: [u8; 7]) -> Self {
    SysEx::HostConnectionConfirmation { serial }.encode().into()
  }

  pub fn host_connection_error(serial: [u8; 7]) -> Self {
    SysEx::HostConnectionError { serial }.encode().into()
  }

  /// The timeout only reaches the wire when `state` is non zero.
  pub fn lcd_back_light_saver(state: u8, timeout: u8) -> Self {
    SysEx::LcdBackLightSaver {
      state,
      timeout: Some(timeout),
    }
    .encode()
    .into()
  }

  pub fn touchless_movable_faders(state: u8) -> Self {
    SysEx::TouchlessMovableFaders { state }.encode().into()
  }

  pub fn fader_touch_sensitivity(channel: u8, value: u8) -> Self {
    SysEx::FaderTouchSensitivity { channel, value }.encode().into()
  }

  pub fn go_offline() -> Self {
    SysEx::GoOffline.encode().into()
  }

  pub fn time_code_bbt_display(data: &[u8]) -> Self {
    SysEx::TimeCodeBbtDisplay { data }.encode().into()
  }

  pub fn assignment_7_segment_display(data: [u8; 2]) -> Self {
    SysEx::Assignment7SegmentDisplay { data }.encode().into()
  }

  pub fn lcd(place: u8, text: &[u8]) -> Self {
    SysEx::Lcd { place, text }.encode().into()
  }

  pub fn version_request() -> Self {
    SysEx::VersionRequest.encode().into()
  }

  pub fn version_reply(text: &[u8]) -> Self {
    SysEx::VersionReply { text }.encode().into()
  }

  pub fn channel_meter_mode(channel: u8, mode: u8) -> Self {
    SysEx::ChannelMeterMode { channel, mode }.encode().into()
  }

  pub fn global_lcd_meter_mode(mode: u8) -> Self {
    SysEx::GlobalLcdMeterMode { mode }.encode().into()
  }

  pub fn all_faders_to_minimum() -> Self {
    SysEx::AllFadersToMinimum.encode().into()
  }

  pub fn all_leds_off() -> Self {
    SysEx::AllLedsOff.encode().into()
  }

  pub fn reset() -> Self {
    SysEx::Reset.encode().into()
  }
}

/// Channel voice constructors.
impl Message {
  pub fn note(button: Button, velocity: Velocity) -> Self {
    ChannelVoice::Note { button, velocity }.encode().into()
  }

  pub fn control(controller: Controller, value: u8) -> Self {
    ChannelVoice::Control { controller, value }.encode().into()
  }

  /// `channel` selects the fader, see [`crate::codec::FADER_CHANNELS`].
  pub fn fader_position(channel: u8, position: u16) -> Self {
    ChannelVoice::FaderPosition { channel, position }.encode().into()
  }

  pub fn meter_level(channel: u8, level: u8) -> Self {
    ChannelVoice::MeterLevel { channel, level }.encode().into()
  }
}

impl From<midi::Msg> for Message {
  fn from(midi: midi::Msg) -> Self {
    Self::from_midi(midi)
  }
}

impl From<Message> for midi::Msg {
  fn from(message: Message) -> Self {
    message.into_midi()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn device_query_classifies_as_sysex() {
    let message = Message::device_query();

    assert!(message.is_system_exclusive());
    assert!(message.is_surface_message());

    let sysex = message.system_exclusive();
    assert_eq!(sysex, Some(SysEx::DeviceQuery));
    assert_eq!(sysex.map(|sysex| sysex.opcode()), Some(Opcode::DeviceQuery));
  }

  #[test]
  fn host_connection_query_extracts_fields() {
    let message = Message::host_connection_query([1, 2, 3, 4, 5, 6, 7], 0xdeadbeef);

    assert_eq!(
      message.system_exclusive(),
      Some(SysEx::HostConnectionQuery {
        serial: [1, 2, 3, 4, 5, 6, 7],
        challenge: 0xdeadbeef,
      })
    );
  }

  #[test]
  fn truncated_sysex_classifies_but_decodes_absent() {
    // Valid opcode, body cut short of the 11 bytes it requires.
    let message = Message::from_midi(midi::Msg::new_sysex(&[0, 0, 0, 0, 1, 1, 2, 3]));

    assert!(message.is_system_exclusive());
    assert_eq!(message.system_exclusive(), None);
  }

  #[test]
  fn unknown_opcode_is_not_sysex() {
    let message = Message::from_midi(midi::Msg::new_sysex(&[0, 0, 0, 0, 13]));

    assert!(!message.is_system_exclusive());
    assert!(!message.is_surface_message());
  }

  #[test]
  fn note_extracts_fields() {
    let message = Message::note(Button::RecReadyCh1, Velocity::On);

    assert!(message.is_note());
    assert_eq!(
      message.channel_voice(),
      Some(ChannelVoice::Note {
        button: Button::RecReadyCh1,
        velocity: Velocity::On,
      })
    );
  }

  #[test]
  fn lcd_text_borrows_from_message() {
    let message = Message::lcd(59, b"MIX");

    match message.system_exclusive() {
      Some(SysEx::Lcd { place, text }) => {
        assert_eq!(place, 59);
        assert_eq!(text, b"MIX");
      }
      other => panic!("Unexpected decode: {other:?}"),
    }
  }

  #[test]
  fn classification_is_exclusive_per_category() {
    let messages = [
      Message::device_query(),
      Message::note(Button::Play, Velocity::On),
      Message::control(Controller::JogWheel, 65),
      Message::fader_position(9, 0x2000),
      Message::meter_level(3, 9),
    ];

    for (index, message) in messages.iter().enumerate() {
      let flags = [
        message.is_system_exclusive(),
        message.is_note(),
        message.is_control(),
        message.is_fader_position(),
        message.is_meter_level(),
      ];

      for (flag_index, flag) in flags.into_iter().enumerate() {
        assert_eq!(flag, flag_index == index, "message {index}, flag {flag_index}");
      }
      assert!(message.is_surface_message(), "message {index}");
    }
  }

  #[test]
  fn default_classifies_as_nothing() {
    let message = Message::default();

    assert!(!message.is_surface_message());
    assert_eq!(message.system_exclusive(), None);
    assert_eq!(message.channel_voice(), None);
  }

  #[test]
  fn midi_round_trip_preserves_bytes() {
    let message = Message::control(Controller::VPot3, 1);
    let midi = midi::Msg::from(message.clone());

    assert_eq!(Message::from(midi), message);
  }
}
