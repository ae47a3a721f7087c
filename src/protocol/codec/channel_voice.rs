use std::ops::RangeInclusive;

use crate::midi::Msg;
use crate::protocol::codec::values::pressure;
use crate::protocol::messages::channel_voice::{Button, ChannelVoice, Controller, Velocity};
use crate::protocol::Encode;

/// Buttons, controllers and meter levels always address the surface on
/// this MIDI channel.
pub const SURFACE_CHANNEL: u8 = 1;

/// Fader positions arrive per strip on channels 1 to 8, the master
/// fader uses channel 9.
pub const FADER_CHANNELS: RangeInclusive<u8> = 1..=9;

pub fn decode_channel_voice(msg: &Msg) -> Option<ChannelVoice> {
  if msg.is_note_on_or_off() {
    Some(ChannelVoice::Note {
      button: Button::from_byte(msg.data1()?)?,
      velocity: Velocity::from_byte(msg.data2()?)?,
    })
  } else if msg.is_control_change() {
    Some(ChannelVoice::Control {
      controller: Controller::from_byte(msg.data1()?)?,
      value: msg.data2()?,
    })
  } else if msg.is_pitch_wheel() {
    let channel = msg.channel()?;
    if !FADER_CHANNELS.contains(&channel) {
      return None;
    }
    Some(ChannelVoice::FaderPosition {
      channel,
      position: msg.pitch_wheel_value()?,
    })
  } else if msg.is_channel_pressure() {
    let (channel, level) = pressure::unpack(msg.data1()?);
    Some(ChannelVoice::MeterLevel { channel, level })
  } else {
    None
  }
}

impl Encode for ChannelVoice {
  fn encode(&self) -> Msg {
    match *self {
      ChannelVoice::Note { button, velocity } => {
        Msg::note_on(SURFACE_CHANNEL, button as u8, velocity as u8)
      }
      ChannelVoice::Control { controller, value } => {
        Msg::control_change(SURFACE_CHANNEL, controller as u8, value)
      }
      ChannelVoice::FaderPosition { channel, position } => Msg::pitch_wheel(channel, position),
      ChannelVoice::MeterLevel { channel, level } => {
        Msg::channel_pressure(SURFACE_CHANNEL, pressure::pack(channel, level))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn note_round_trip() {
    let note = ChannelVoice::Note {
      button: Button::RecReadyCh1,
      velocity: Velocity::On,
    };

    let msg = note.encode();
    assert_eq!(msg.inner(), [0x90, 0, 127]);
    assert_eq!(decode_channel_voice(&msg), Some(note));
  }

  #[test]
  fn note_off_status_decodes() {
    let msg = Msg::from([0x80, 94, 0]);
    assert_eq!(
      decode_channel_voice(&msg),
      Some(ChannelVoice::Note {
        button: Button::Play,
        velocity: Velocity::Off,
      })
    );
  }

  #[test]
  fn out_of_table_note_is_absent() {
    assert_eq!(decode_channel_voice(&Msg::from([0x90, 117, 127])), None);
    assert_eq!(decode_channel_voice(&Msg::from([0x90, 0, 5])), None);
  }

  #[test]
  fn control_round_trip() {
    let control = ChannelVoice::Control {
      controller: Controller::VPot1,
      value: 65,
    };

    let msg = control.encode();
    assert_eq!(msg.inner(), [0xb0, 16, 65]);
    assert_eq!(decode_channel_voice(&msg), Some(control));
  }

  #[test]
  fn out_of_table_controller_is_absent() {
    assert_eq!(decode_channel_voice(&Msg::from([0xb0, 47, 0])), None);
  }

  #[test]
  fn fader_position_round_trip() {
    for channel in FADER_CHANNELS {
      let fader = ChannelVoice::FaderPosition {
        channel,
        position: 0x1234,
      };
      assert_eq!(decode_channel_voice(&fader.encode()), Some(fader));
    }
  }

  #[test]
  fn fader_position_outside_channel_range_is_absent() {
    let msg = Msg::pitch_wheel(10, 0x1234);
    assert_eq!(decode_channel_voice(&msg), None);
  }

  #[test]
  fn meter_level_round_trip() {
    for channel in 1u8..=8 {
      for level in [0u8, 9, 15] {
        let meter = ChannelVoice::MeterLevel { channel, level };
        assert_eq!(decode_channel_voice(&meter.encode()), Some(meter));
      }
    }
  }

  #[test]
  fn meter_level_packing() {
    let msg = ChannelVoice::MeterLevel { channel: 3, level: 9 }.encode();
    assert_eq!(msg.inner(), [0xd0, 41]);
  }

  #[test]
  fn unrelated_status_is_absent() {
    assert_eq!(decode_channel_voice(&Msg::default()), None);
    assert_eq!(decode_channel_voice(&Msg::from([0xc0, 5])), None);
  }
}
