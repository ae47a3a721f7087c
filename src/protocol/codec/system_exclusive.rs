use crate::midi;
use crate::protocol::messages::system_exclusive::{Opcode, SysEx};
use crate::protocol::Encode;

/// Opaque manufacturer/device prefix, bytes 0 to 3 of every sysex
/// payload. Zero filled on encode, never inspected on decode.
pub const HEADER_LEN: usize = 4;

/// Decodes the payload of a sysex frame, header included. Returns
/// `None` when the opcode byte is out of table or the opcode specific
/// body is shorter than its layout requires.
pub fn decode_system_exclusive(payload: &[u8]) -> Option<SysEx<'_>> {
  let opcode = Opcode::from_byte(*payload.get(HEADER_LEN)?)?;
  let body = &payload[HEADER_LEN + 1..];

  match opcode {
    Opcode::DeviceQuery => Some(SysEx::DeviceQuery),
    Opcode::HostConnectionQuery => Some(SysEx::HostConnectionQuery {
      serial: serial(body)?,
      challenge: code(body)?,
    }),
    Opcode::HostConnectionReply => Some(SysEx::HostConnectionReply {
      serial: serial(body)?,
      response: code(body)?,
    }),
    Opcode::HostConnectionConfirmation => Some(SysEx::HostConnectionConfirmation {
      serial: serial(body)?,
    }),
    Opcode::HostConnectionError => Some(SysEx::HostConnectionError {
      serial: serial(body)?,
    }),
    Opcode::LcdBackLightSaver => {
      let state = *body.first()?;
      let timeout = if state > 0 { body.get(1).copied() } else { None };
      Some(SysEx::LcdBackLightSaver { state, timeout })
    }
    Opcode::TouchlessMovableFaders => Some(SysEx::TouchlessMovableFaders {
      state: *body.first()?,
    }),
    Opcode::FaderTouchSensitivity => Some(SysEx::FaderTouchSensitivity {
      channel: *body.first()?,
      value: *body.get(1)?,
    }),
    Opcode::GoOffline => Some(SysEx::GoOffline),
    Opcode::TimeCodeBbtDisplay => {
      // One reserved byte up front, one trailing byte at the end.
      if body.len() < 3 {
        return None;
      }
      Some(SysEx::TimeCodeBbtDisplay {
        data: &body[1..body.len() - 1],
      })
    }
    Opcode::Assignment7SegmentDisplay => Some(SysEx::Assignment7SegmentDisplay {
      data: body.get(1..3)?.try_into().ok()?,
    }),
    Opcode::Lcd => {
      if body.len() < 2 {
        return None;
      }
      Some(SysEx::Lcd {
        place: body[0],
        text: &body[1..],
      })
    }
    Opcode::VersionRequest => Some(SysEx::VersionRequest),
    Opcode::VersionReply => {
      if body.len() < 2 {
        return None;
      }
      Some(SysEx::VersionReply { text: &body[1..] })
    }
    Opcode::ChannelMeterMode => Some(SysEx::ChannelMeterMode {
      channel: *body.first()?,
      mode: *body.get(1)?,
    }),
    Opcode::GlobalLcdMeterMode => Some(SysEx::GlobalLcdMeterMode {
      mode: *body.first()?,
    }),
    Opcode::AllFadersToMinimum => Some(SysEx::AllFadersToMinimum),
    Opcode::AllLedsOff => Some(SysEx::AllLedsOff),
    Opcode::Reset => Some(SysEx::Reset),
  }
}

/// Renders the payload of a sysex frame, header included. The buffer
/// is allocated at its exact size, zero filled, and only the defined
/// fields are written.
pub fn encode_system_exclusive(sysex: &SysEx<'_>) -> Vec<u8> {
  match *sysex {
    SysEx::DeviceQuery
    | SysEx::GoOffline
    | SysEx::VersionRequest
    | SysEx::AllFadersToMinimum
    | SysEx::AllLedsOff
    | SysEx::Reset => payload(sysex.opcode(), 0),
    SysEx::HostConnectionQuery { serial, challenge } => {
      let mut bytes = payload(Opcode::HostConnectionQuery, 11);
      bytes[5..12].copy_from_slice(&serial);
      bytes[12..16].copy_from_slice(&challenge.to_le_bytes());
      bytes
    }
    SysEx::HostConnectionReply { serial, response } => {
      let mut bytes = payload(Opcode::HostConnectionReply, 11);
      bytes[5..12].copy_from_slice(&serial);
      bytes[12..16].copy_from_slice(&response.to_le_bytes());
      bytes
    }
    SysEx::HostConnectionConfirmation { serial } => {
      let mut bytes = payload(Opcode::HostConnectionConfirmation, 7);
      bytes[5..12].copy_from_slice(&serial);
      bytes
    }
    SysEx::HostConnectionError { serial } => {
      let mut bytes = payload(Opcode::HostConnectionError, 7);
      bytes[5..12].copy_from_slice(&serial);
      bytes
    }
    SysEx::LcdBackLightSaver { state, timeout } => {
      let mut bytes = payload(Opcode::LcdBackLightSaver, if state > 0 { 2 } else { 1 });
      bytes[5] = state;
      if state > 0 {
        bytes[6] = timeout.unwrap_or(0);
      }
      bytes
    }
    SysEx::TouchlessMovableFaders { state } => {
      let mut bytes = payload(Opcode::TouchlessMovableFaders, 1);
      bytes[5] = state;
      bytes
    }
    SysEx::FaderTouchSensitivity { channel, value } => {
      let mut bytes = payload(Opcode::FaderTouchSensitivity, 2);
      bytes[5] = channel;
      bytes[6] = value;
      bytes
    }
    SysEx::TimeCodeBbtDisplay { data } => {
      let mut bytes = payload(Opcode::TimeCodeBbtDisplay, data.len() + 2);
      bytes[6..6 + data.len()].copy_from_slice(data);
      bytes
    }
    SysEx::Assignment7SegmentDisplay { data } => {
      let mut bytes = payload(Opcode::Assignment7SegmentDisplay, 3);
      bytes[6..8].copy_from_slice(&data);
      bytes
    }
    SysEx::Lcd { place, text } => {
      let mut bytes = payload(Opcode::Lcd, text.len() + 1);
      bytes[5] = place;
      bytes[6..6 + text.len()].copy_from_slice(text);
      bytes
    }
    SysEx::VersionReply { text } => {
      let mut bytes = payload(Opcode::VersionReply, text.len() + 1);
      bytes[6..6 + text.len()].copy_from_slice(text);
      bytes
    }
    SysEx::ChannelMeterMode { channel, mode } => {
      let mut bytes = payload(Opcode::ChannelMeterMode, 2);
      bytes[5] = channel;
      bytes[6] = mode;
      bytes
    }
    SysEx::GlobalLcdMeterMode { mode } => {
      let mut bytes = payload(Opcode::GlobalLcdMeterMode, 1);
      bytes[5] = mode;
      bytes
    }
  }
}

impl Encode for SysEx<'_> {
  fn encode(&self) -> midi::Msg {
    midi::Msg::new_sysex(&encode_system_exclusive(self))
  }
}

fn payload(opcode: Opcode, body_len: usize) -> Vec<u8> {
  let mut bytes = vec![0; HEADER_LEN + 1 + body_len];
  bytes[HEADER_LEN] = opcode as u8;
  bytes
}

fn serial(body: &[u8]) -> Option<[u8; 7]> {
  body.get(..7)?.try_into().ok()
}

fn code(body: &[u8]) -> Option<u32> {
  let bytes: [u8; 4] = body.get(7..11)?.try_into().ok()?;
  Some(u32::from_le_bytes(bytes))
}
