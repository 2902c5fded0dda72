//! Face state definition

use crate::config::BlinkTiming;
use crate::time::Millis;

use super::frame::Frame;

/// Which expression the face shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceMode {
    Blinking,
    Thinking,
}

/// Eye phase while blinking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkPhase {
    EyesOpen,
    EyesClosed,
}

impl BlinkPhase {
    /// The other phase
    pub fn toggled(self) -> Self {
        match self {
            BlinkPhase::EyesOpen => BlinkPhase::EyesClosed,
            BlinkPhase::EyesClosed => BlinkPhase::EyesOpen,
        }
    }

    /// How long this phase lasts before flipping
    pub fn dwell_ms(self, timing: &BlinkTiming) -> Millis {
        match self {
            BlinkPhase::EyesOpen => timing.open_ms,
            BlinkPhase::EyesClosed => timing.closed_ms,
        }
    }
}

/// Face state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceState {
    /// Idle blinking; `since` is when `phase` was entered
    Blinking { phase: BlinkPhase, since: Millis },
    /// Thinking expression, no timer
    Thinking,
}

impl FaceState {
    /// Fresh blinking state: eyes open, timer starting at `now`
    pub fn blinking(now: Millis) -> Self {
        FaceState::Blinking {
            phase: BlinkPhase::EyesOpen,
            since: now,
        }
    }

    /// Current mode
    pub fn mode(&self) -> FaceMode {
        match self {
            FaceState::Blinking { .. } => FaceMode::Blinking,
            FaceState::Thinking => FaceMode::Thinking,
        }
    }

    /// Blink phase, if blinking
    pub fn phase(&self) -> Option<BlinkPhase> {
        match self {
            FaceState::Blinking { phase, .. } => Some(*phase),
            FaceState::Thinking => None,
        }
    }

    /// Frame to render for this state
    pub fn frame(&self) -> Frame {
        match self {
            FaceState::Blinking {
                phase: BlinkPhase::EyesOpen,
                ..
            } => Frame::EyesOpen,
            FaceState::Blinking {
                phase: BlinkPhase::EyesClosed,
                ..
            } => Frame::EyesClosed,
            FaceState::Thinking => Frame::Thinking,
        }
    }
}
