//! Packed value layouts shared by the sysex and channel voice shapes.

/// Channel meter mode flag byte: signal LED, peak hold and LCD level
/// meter enables in bits 0 to 2.
pub mod meter_mode {
  pub fn pack(signal_led: bool, peak_hold: bool, lcd_meter: bool) -> u8 {
    (signal_led as u8) | (peak_hold as u8) << 1 | (lcd_meter as u8) << 2
  }

  /// Exact inverse of [`pack`] for the three defined bits, higher bits
  /// are ignored.
  pub fn unpack(mode: u8) -> (bool, bool, bool) {
    (mode & 0x01 != 0, mode & 0x02 != 0, mode & 0x04 != 0)
  }
}

/// Relative rotation of a v-pot or the jog wheel: direction in bit 6,
/// tick count in the low 6 bits.
pub mod wheel {
  use crate::protocol::messages::channel_voice::WheelDirection;

  pub fn pack(direction: WheelDirection, ticks: u8) -> u8 {
    (direction as u8) << 6 | (ticks & 0x3f)
  }

  pub fn unpack(value: u8) -> (WheelDirection, u8) {
    let direction = if value & 0x40 == 0 {
      WheelDirection::Clockwise
    } else {
      WheelDirection::CounterClockwise
    };

    (direction, value & 0x3f)
  }
}

/// LED ring state: center LED in bit 6, display mode in bits 4 to 5 and
/// the ring value in the low 4 bits. The value field is narrower than
/// the wheel tick field, that is the protocol's layout.
pub mod ring {
  use crate::protocol::messages::channel_voice::RingMode;

  pub fn pack(center_led_on: bool, mode: RingMode, value: u8) -> u8 {
    (center_led_on as u8) << 6 | (mode as u8) << 4 | (value & 0x0f)
  }

  pub fn unpack(value: u8) -> (bool, RingMode, u8) {
    let mode = match (value >> 4) & 0x03 {
      0 => RingMode::SingleDot,
      1 => RingMode::BoostCut,
      2 => RingMode::Wrap,
      3 => RingMode::Spread,
      _ => unreachable!(),
    };

    (value & 0x40 != 0, mode, value & 0x0f)
  }
}

/// LCD character cell addressing: cells 0 to 55 on the upper line, the
/// lower line starts at 56.
pub mod lcd_place {
  pub const LOWER_LINE: u8 = 56;

  pub fn pack(lower_line: bool, index: u8) -> u8 {
    if lower_line {
      LOWER_LINE.wrapping_add(index)
    } else {
      index
    }
  }

  pub fn unpack(place: u8) -> (bool, u8) {
    if place >= LOWER_LINE {
      (true, place - LOWER_LINE)
    } else {
      (false, place)
    }
  }
}

/// The restricted display alphabet: letters fold to codes 1 to 26
/// regardless of case, digits map to themselves, anything else becomes
/// a space. Lossy in both directions, there is no round trip law.
pub mod lcd_char {
  pub fn to_code(c: u8) -> u8 {
    match c {
      b'a'..=b'z' => c - b'a' + 1,
      b'A'..=b'Z' => c - b'A' + 1,
      b'0'..=b'9' => c,
      _ => b' ',
    }
  }

  pub fn from_code(code: u8) -> u8 {
    match code {
      1..=26 => code - 1 + b'A',
      b'0'..=b'9' => code,
      _ => b' ',
    }
  }
}

/// Meter level packing for channel pressure: strip number and level
/// folded into the single pressure byte.
pub mod pressure {
  pub fn pack(channel: u8, level: u8) -> u8 {
    channel.wrapping_sub(1).wrapping_mul(16).wrapping_add(level)
  }

  pub fn unpack(value: u8) -> (u8, u8) {
    (value / 16 + 1, value % 16)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::protocol::messages::channel_voice::{RingMode, WheelDirection};

  #[test]
  fn meter_mode_round_trip() {
    for bits in 0u8..8 {
      let flags = meter_mode::unpack(bits);
      assert_eq!(meter_mode::pack(flags.0, flags.1, flags.2), bits);
    }

    assert_eq!(meter_mode::pack(true, false, true), 5);
    assert_eq!(meter_mode::unpack(5), (true, false, true));
  }

  #[test]
  fn meter_mode_ignores_high_bits() {
    assert_eq!(meter_mode::unpack(0x7d), (true, false, true));
  }

  #[test]
  fn wheel_round_trip() {
    for direction in [WheelDirection::Clockwise, WheelDirection::CounterClockwise] {
      for ticks in [0u8, 1, 31, 63] {
        let value = wheel::pack(direction, ticks);
        assert_eq!(wheel::unpack(value), (direction, ticks));
      }
    }

    assert_eq!(wheel::pack(WheelDirection::CounterClockwise, 1), 65);
  }

  #[test]
  fn ring_round_trip() {
    for center in [false, true] {
      for mode in [RingMode::SingleDot, RingMode::BoostCut, RingMode::Wrap, RingMode::Spread] {
        for value in [0u8, 5, 15] {
          let packed = ring::pack(center, mode, value);
          assert_eq!(ring::unpack(packed), (center, mode, value));
        }
      }
    }

    assert_eq!(ring::pack(true, RingMode::BoostCut, 3), 83);
  }

  #[test]
  fn lcd_place_round_trip() {
    assert_eq!(lcd_place::pack(true, 3), 59);
    assert_eq!(lcd_place::unpack(59), (true, 3));

    assert_eq!(lcd_place::pack(false, 5), 5);
    assert_eq!(lcd_place::unpack(5), (false, 5));

    assert_eq!(lcd_place::unpack(lcd_place::LOWER_LINE), (true, 0));
  }

  #[test]
  fn lcd_char_folds_case() {
    assert_eq!(lcd_char::to_code(b'a'), 1);
    assert_eq!(lcd_char::to_code(b'A'), 1);
    assert_eq!(lcd_char::to_code(b'z'), 26);
    assert_eq!(lcd_char::to_code(b'Z'), 26);
  }

  #[test]
  fn lcd_char_keeps_digits() {
    for digit in b'0'..=b'9' {
      assert_eq!(lcd_char::to_code(digit), digit);
      assert_eq!(lcd_char::from_code(digit), digit);
    }
  }

  #[test]
  fn lcd_char_unmappable_is_space() {
    assert_eq!(lcd_char::to_code(b'@'), b' ');
    assert_eq!(lcd_char::to_code(0), b' ');
    assert_eq!(lcd_char::from_code(0), b' ');
    assert_eq!(lcd_char::from_code(27), b' ');
  }

  #[test]
  fn lcd_char_inverse_is_upper_case() {
    assert_eq!(lcd_char::from_code(1), b'A');
    assert_eq!(lcd_char::from_code(26), b'Z');
    assert_eq!(lcd_char::from_code(lcd_char::to_code(b'q')), b'Q');
  }

  #[test]
  fn pressure_round_trip() {
    for channel in 1u8..=16 {
      for level in 0u8..=15 {
        let value = pressure::pack(channel, level);
        assert_eq!(pressure::unpack(value), (channel, level));
      }
    }

    assert_eq!(pressure::pack(3, 9), 41);
  }
}
