//! Face animator
//!
//! Owns the display and the face state machine:
//!
//! ```text
//!            blink()                       think()
//!   ┌──────────────────────┐      ┌──────────────────────┐
//!   ▼                      │      │                      ▼
//! Blinking{EyesOpen} ──────┴──────┴──────────────── Thinking
//!   │   ▲   poll: open >= 3000 ms / closed >= 200 ms
//!   ▼   │
//! Blinking{EyesClosed}
//! ```
//!
//! Every state change redraws immediately. `poll` only advances the blink
//! timer; in `Thinking` it does nothing.

use crate::config::BlinkTiming;
use crate::time::{elapsed, Millis};
use crate::traits::{DisplayError, FaceCanvas};

use super::state::{BlinkPhase, FaceMode, FaceState};

/// Face animator
pub struct FaceAnimator<D> {
    canvas: D,
    timing: BlinkTiming,
    state: FaceState,
}

impl<D: FaceCanvas> FaceAnimator<D> {
    /// Initialize the display and show the blinking face
    ///
    /// The blink timer starts at `now`. Fails if the display cannot be
    /// brought up; an animator never exists over a dead display.
    pub fn start(mut canvas: D, timing: BlinkTiming, now: Millis) -> Result<Self, DisplayError> {
        canvas.init()?;

        let mut animator = Self {
            canvas,
            timing,
            state: FaceState::blinking(now),
        };
        animator.redraw();
        Ok(animator)
    }

    /// Switch to (or restart) blinking: eyes open, timer reset to `now`
    pub fn blink(&mut self, now: Millis) {
        self.state = FaceState::blinking(now);
        self.redraw();
    }

    /// Switch to the thinking face
    pub fn think(&mut self) {
        self.state = FaceState::Thinking;
        self.redraw();
    }

    /// Switch mode by name
    pub fn set_mode(&mut self, mode: FaceMode, now: Millis) {
        match mode {
            FaceMode::Blinking => self.blink(now),
            FaceMode::Thinking => self.think(),
        }
    }

    /// Advance the blink timer
    ///
    /// Returns true if the phase flipped (and the face was redrawn).
    pub fn poll(&mut self, now: Millis) -> bool {
        let FaceState::Blinking { phase, since } = self.state else {
            return false;
        };

        if elapsed(now, since) < phase.dwell_ms(&self.timing) {
            return false;
        }

        self.state = FaceState::Blinking {
            phase: phase.toggled(),
            since: now,
        };
        self.redraw();
        true
    }

    fn redraw(&mut self) {
        self.state.frame().render(&mut self.canvas);
    }

    /// Current state
    pub fn state(&self) -> FaceState {
        self.state
    }

    /// Current mode
    pub fn mode(&self) -> FaceMode {
        self.state.mode()
    }

    /// Current blink phase (None while thinking)
    pub fn phase(&self) -> Option<BlinkPhase> {
        self.state.phase()
    }

    /// Borrow the display
    pub fn canvas(&self) -> &D {
        &self.canvas
    }
}
