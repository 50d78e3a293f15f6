//! Level ending: fade an overlay in, hold it, then reload or quit.
//!
//! The sequencer only decides; the app plays the audio, paints the overlay
//! and performs the outcome it is handed.

use tracing::info;

use crate::config::EndingConfig;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingKind {
    /// Player walked into the exit zone.
    Exit,
    /// A sentry spotted the player.
    Caught,
}

impl EndingKind {
    pub fn outcome(self) -> EndingOutcome {
        match self {
            EndingKind::Exit => EndingOutcome::ReloadLevel,
            EndingKind::Caught => EndingOutcome::Quit,
        }
    }
}

/// Terminal, fire-once action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingOutcome {
    ReloadLevel,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndingPhase {
    Playing,
    Ending { kind: EndingKind, timer: f32 },
    Terminated,
}

/// What the app should do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EndingFrame {
    /// Overlay to show and its opacity in 0..=1.
    pub overlay: Option<(EndingKind, f32)>,
    /// One-shot cue; set on exactly one frame per sequence.
    pub play_audio: Option<EndingKind>,
    pub outcome: Option<EndingOutcome>,
}

#[derive(Debug, Clone)]
pub struct EndingSequencer {
    fade_duration: f32,
    display_duration: f32,
    reached_exit: bool,
    was_caught: bool,
    audio_played: bool,
    phase: EndingPhase,
}

impl EndingSequencer {
    pub fn new(cfg: &EndingConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            fade_duration: cfg.fade_duration,
            display_duration: cfg.display_image_duration,
            reached_exit: false,
            was_caught: false,
            audio_played: false,
            phase: EndingPhase::Playing,
        })
    }

    pub fn phase(&self) -> EndingPhase {
        self.phase
    }

    pub fn reached_exit(&self) -> bool {
        self.reached_exit
    }

    pub fn was_caught(&self) -> bool {
        self.was_caught
    }

    pub fn notify_exit_reached(&mut self) {
        if !self.reached_exit {
            info!("Player reached the exit");
        }
        self.reached_exit = true;
    }

    pub fn notify_caught(&mut self) {
        if !self.was_caught {
            info!("Player caught");
        }
        self.was_caught = true;
    }

    /// Advance one frame. Exit wins over caught when both are pending; once a
    /// sequence starts its kind is fixed.
    pub fn tick(&mut self, dt: f32) -> EndingFrame {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        if self.phase == EndingPhase::Playing {
            let kind = if self.reached_exit {
                Some(EndingKind::Exit)
            } else if self.was_caught {
                Some(EndingKind::Caught)
            } else {
                None
            };
            match kind {
                Some(kind) => self.phase = EndingPhase::Ending { kind, timer: 0.0 },
                None => return EndingFrame::default(),
            }
        }

        let EndingPhase::Ending { kind, timer } = &mut self.phase else {
            return EndingFrame::default();
        };
        let kind = *kind;

        let mut frame = EndingFrame::default();
        if !self.audio_played {
            self.audio_played = true;
            frame.play_audio = Some(kind);
        }

        *timer += dt;
        let elapsed = *timer;
        frame.overlay = Some((kind, (elapsed / self.fade_duration).min(1.0)));

        if elapsed > self.fade_duration + self.display_duration {
            let outcome = kind.outcome();
            info!(?kind, ?outcome, "Ending sequence complete");
            self.phase = EndingPhase::Terminated;
            frame.outcome = Some(outcome);
        }
        frame
    }
}
