/// Button and LED identities, one per named control on the surface.
/// Note numbers are contiguous from the first record ready key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Button {
  RecReadyCh1 = 0,
  RecReadyCh2,
  RecReadyCh3,
  RecReadyCh4,
  RecReadyCh5,
  RecReadyCh6,
  RecReadyCh7,
  RecReadyCh8,
  SoloCh1,
  SoloCh2,
  SoloCh3,
  SoloCh4,
  SoloCh5,
  SoloCh6,
  SoloCh7,
  SoloCh8,
  MuteCh1,
  MuteCh2,
  MuteCh3,
  MuteCh4,
  MuteCh5,
  MuteCh6,
  MuteCh7,
  MuteCh8,
  SelectCh1,
  SelectCh2,
  SelectCh3,
  SelectCh4,
  SelectCh5,
  SelectCh6,
  SelectCh7,
  SelectCh8,
  VSelectCh1,
  VSelectCh2,
  VSelectCh3,
  VSelectCh4,
  VSelectCh5,
  VSelectCh6,
  VSelectCh7,
  VSelectCh8,
  AssignmentTrack,
  AssignmentSend,
  AssignmentPanSurround,
  AssignmentPlugin,
  AssignmentEq,
  AssignmentInstrument,
  FaderBanksBankLeft,
  FaderBanksBankRight,
  FaderBanksChannelLeft,
  FaderBanksChannelRight,
  Flip,
  GlobalView,
  NameValue,
  SmpteBeats,
  Function1,
  Function2,
  Function3,
  Function4,
  Function5,
  Function6,
  Function7,
  Function8,
  GlobalViewMidiTracks,
  GlobalViewInputs,
  GlobalViewAudioTracks,
  GlobalViewAudioInstrument,
  GlobalViewAux,
  GlobalViewBusses,
  GlobalViewOutputs,
  GlobalViewUser,
  Shift,
  Option,
  Control,
  CmdAlt,
  AutomationReadOff,
  AutomationWrite,
  AutomationTrim,
  AutomationTouch,
  AutomationLatch,
  Group,
  UtilitiesSave,
  UtilitiesUndo,
  UtilitiesCancel,
  UtilitiesEnter,
  Marker,
  Nudge,
  Cycle,
  Drop,
  Replace,
  Click,
  Solo,
  Rewind,
  FastFwd,
  Stop,
  Play,
  Record,
  CursorUp,
  CursorDown,
  CursorLeft,
  CursorRight,
  Zoom,
  Scrub,
  UserSwitchA,
  UserSwitchB,
  FaderTouchCh1,
  FaderTouchCh2,
  FaderTouchCh3,
  FaderTouchCh4,
  FaderTouchCh5,
  FaderTouchCh6,
  FaderTouchCh7,
  FaderTouchCh8,
  FaderTouchMaster,
  SmpteLed,
  BeatsLed,
  RudeSoloLight,
  RelayClick,
}

impl Button {
  pub const ALL: [Self; 117] = [
    Self::RecReadyCh1,
    Self::RecReadyCh2,
    Self::RecReadyCh3,
    Self::RecReadyCh4,
    Self::RecReadyCh5,
    Self::RecReadyCh6,
    Self::RecReadyCh7,
    Self::RecReadyCh8,
    Self::SoloCh1,
    Self::SoloCh2,
    Self::SoloCh3,
    Self::SoloCh4,
    Self::SoloCh5,
    Self::SoloCh6,
    Self::SoloCh7,
    Self::SoloCh8,
    Self::MuteCh1,
    Self::MuteCh2,
    Self::MuteCh3,
    Self::MuteCh4,
    Self::MuteCh5,
    Self::MuteCh6,
    Self::MuteCh7,
    Self::MuteCh8,
    Self::SelectCh1,
    Self::SelectCh2,
    Self::SelectCh3,
    Self::SelectCh4,
    Self::SelectCh5,
    Self::SelectCh6,
    Self::SelectCh7,
    Self::SelectCh8,
    Self::VSelectCh1,
    Self::VSelectCh2,
    Self::VSelectCh3,
    Self::VSelectCh4,
    Self::VSelectCh5,
    Self::VSelectCh6,
    Self::VSelectCh7,
    Self::VSelectCh8,
    Self::AssignmentTrack,
    Self::AssignmentSend,
    Self::AssignmentPanSurround,
    Self::AssignmentPlugin,
    Self::AssignmentEq,
    Self::AssignmentInstrument,
    Self::FaderBanksBankLeft,
    Self::FaderBanksBankRight,
    Self::FaderBanksChannelLeft,
    Self::FaderBanksChannelRight,
    Self::Flip,
    Self::GlobalView,
    Self::NameValue,
    Self::SmpteBeats,
    Self::Function1,
    Self::Function2,
    Self::Function3,
    Self::Function4,
    Self::Function5,
    Self::Function6,
    Self::Function7,
    Self::Function8,
    Self::GlobalViewMidiTracks,
    Self::GlobalViewInputs,
    Self::GlobalViewAudioTracks,
    Self::GlobalViewAudioInstrument,
    Self::GlobalViewAux,
    Self::GlobalViewBusses,
    Self::GlobalViewOutputs,
    Self::GlobalViewUser,
    Self::Shift,
    Self::Option,
    Self::Control,
    Self::CmdAlt,
    Self::AutomationReadOff,
    Self::AutomationWrite,
    Self::AutomationTrim,
    Self::AutomationTouch,
    Self::AutomationLatch,
    Self::Group,
    Self::UtilitiesSave,
    Self::UtilitiesUndo,
    Self::UtilitiesCancel,
    Self::UtilitiesEnter,
    Self::Marker,
    Self::Nudge,
    Self::Cycle,
    Self::Drop,
    Self::Replace,
    Self::Click,
    Self::Solo,
    Self::Rewind,
    Self::FastFwd,
    Self::Stop,
    Self::Play,
    Self::Record,
    Self::CursorUp,
    Self::CursorDown,
    Self::CursorLeft,
    Self::CursorRight,
    Self::Zoom,
    Self::Scrub,
    Self::UserSwitchA,
    Self::UserSwitchB,
    Self::FaderTouchCh1,
    Self::FaderTouchCh2,
    Self::FaderTouchCh3,
    Self::FaderTouchCh4,
    Self::FaderTouchCh5,
    Self::FaderTouchCh6,
    Self::FaderTouchCh7,
    Self::FaderTouchCh8,
    Self::FaderTouchMaster,
    Self::SmpteLed,
    Self::BeatsLed,
    Self::RudeSoloLight,
    Self::RelayClick,
  ];

  pub fn from_byte(byte: u8) -> Option<Self> {
    Self::ALL.into_iter().find(|button| *button as u8 == byte)
  }

  pub fn is_valid(byte: u8) -> bool {
    Self::from_byte(byte).is_some()
  }
}

/// Note velocity states used for key presses and LED feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Velocity {
  Off = 0,
  Flashing = 1,
  On = 127,
}

impl Velocity {
  pub const ALL: [Self; 3] = [Self::Off, Self::Flashing, Self::On];

  pub fn from_byte(byte: u8) -> Option<Self> {
    Self::ALL.into_iter().find(|velocity| *velocity as u8 == byte)
  }

  pub fn is_valid(byte: u8) -> bool {
    Self::from_byte(byte).is_some()
  }
}

/// Controller identities: v-pots, LED rings, jog wheel and the
/// write-only display cells. The number space is sparse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Controller {
  VPot1 = 16,
  VPot2,
  VPot3,
  VPot4,
  VPot5,
  VPot6,
  VPot7,
  VPot8,
  ExternalController = 46,
  VPotLedRing1 = 48,
  VPotLedRing2,
  VPotLedRing3,
  VPotLedRing4,
  VPotLedRing5,
  VPotLedRing6,
  VPotLedRing7,
  VPotLedRing8,
  JogWheel = 60,
  TimeCodeBbtDisplay1 = 64,
  TimeCodeBbtDisplay2,
  TimeCodeBbtDisplay3,
  TimeCodeBbtDisplay4,
  TimeCodeBbtDisplay5,
  TimeCodeBbtDisplay6,
  TimeCodeBbtDisplay7,
  TimeCodeBbtDisplay8,
  TimeCodeBbtDisplay9,
  TimeCodeBbtDisplay10,
  Assignment7SegmentDisplay1,
  Assignment7SegmentDisplay2,
  Assignment7SegmentDisplay3,
}

impl Controller {
  pub const ALL: [Self; 31] = [
    Self::VPot1,
    Self::VPot2,
    Self::VPot3,
    Self::VPot4,
    Self::VPot5,
    Self::VPot6,
    Self::VPot7,
    Self::VPot8,
    Self::ExternalController,
    Self::VPotLedRing1,
    Self::VPotLedRing2,
    Self::VPotLedRing3,
    Self::VPotLedRing4,
    Self::VPotLedRing5,
    Self::VPotLedRing6,
    Self::VPotLedRing7,
    Self::VPotLedRing8,
    Self::JogWheel,
    Self::TimeCodeBbtDisplay1,
    Self::TimeCodeBbtDisplay2,
    Self::TimeCodeBbtDisplay3,
    Self::TimeCodeBbtDisplay4,
    Self::TimeCodeBbtDisplay5,
    Self::TimeCodeBbtDisplay6,
    Self::TimeCodeBbtDisplay7,
    Self::TimeCodeBbtDisplay8,
    Self::TimeCodeBbtDisplay9,
    Self::TimeCodeBbtDisplay10,
    Self::Assignment7SegmentDisplay1,
    Self::Assignment7SegmentDisplay2,
    Self::Assignment7SegmentDisplay3,
  ];

  pub fn from_byte(byte: u8) -> Option<Self> {
    Self::ALL.into_iter().find(|controller| *controller as u8 == byte)
  }

  pub fn is_valid(byte: u8) -> bool {
    Self::from_byte(byte).is_some()
  }
}

/// Rotation sign of a v-pot or jog wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WheelDirection {
  Clockwise = 0,
  CounterClockwise = 1,
}

/// Display mode of the LED ring around a v-pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RingMode {
  SingleDot = 0,
  BoostCut = 1,
  Wrap = 2,
  Spread = 3,
}

/// Channel voice message shapes of the surface protocol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelVoice {
  /// Key press or LED state, as a note on/off pair.
  Note { button: Button, velocity: Velocity },
  /// V-pot delta, LED ring state, jog delta or display cell data.
  Control { controller: Controller, value: u8 },
  /// Motor fader position as a 14 bits pitch wheel value. The MIDI
  /// channel selects the strip (1 to 8) or the master fader (9).
  FaderPosition { channel: u8, position: u16 },
  /// Level meter update, strip and level packed into the pressure byte.
  MeterLevel { channel: u8, level: u8 },
}
