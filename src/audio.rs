//! Sound cues
//!
//! The simulation driver reports every event to an [`AudioSink`] and never
//! looks at the outcome. Playback failures stay inside the sink.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallHit,
    /// Ball left the field
    Score,
    /// Power-up collected
    PowerUp,
    /// Match decided
    GameOver,
}

/// A square-wave beep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: f32,
    pub volume: f32,
}

impl SoundEffect {
    pub fn tone(self) -> Tone {
        match self {
            SoundEffect::PaddleHit | SoundEffect::PowerUp => Tone {
                frequency_hz: 400.0,
                duration_ms: 80.0,
                volume: 0.1,
            },
            SoundEffect::WallHit => Tone {
                frequency_hz: 220.0,
                duration_ms: 80.0,
                volume: 0.1,
            },
            SoundEffect::Score | SoundEffect::GameOver => Tone {
                frequency_hz: 100.0,
                duration_ms: 180.0,
                volume: 0.2,
            },
        }
    }

    /// Cue for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::WallHit { .. } => SoundEffect::WallHit,
            GameEvent::PaddleHit { .. } => SoundEffect::PaddleHit,
            GameEvent::Score { .. } => SoundEffect::Score,
            GameEvent::PowerUpCollected { .. } => SoundEffect::PowerUp,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
        }
    }
}

/// Fire-and-forget sound output
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Silent sink for headless runs and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

#[cfg(target_arch = "wasm32")]
pub use web_audio::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web_audio {
    use web_sys::{AudioContext, OscillatorType};

    use super::{AudioSink, SoundEffect};

    /// Web Audio sink playing procedurally generated beeps
    pub struct WebAudio {
        ctx: Option<AudioContext>,
    }

    impl Default for WebAudio {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudio {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx }
        }

        fn beep(ctx: &AudioContext, effect: SoundEffect) -> Option<()> {
            let tone = effect.tone();
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(OscillatorType::Square);
            osc.frequency().set_value(tone.frequency_hz);
            gain.gain().set_value(tone.volume);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            let t = ctx.current_time();
            osc.start().ok()?;
            osc.stop_with_when(t + tone.duration_ms as f64 / 1000.0).ok()
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, effect: SoundEffect) {
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            if Self::beep(ctx, effect).is_none() {
                log::debug!("Failed to play {effect:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{PowerUpKind, Side};
    use glam::Vec2;

    #[test]
    fn test_event_cues() {
        let cases = [
            (GameEvent::WallHit { point: Vec2::ZERO }, 220.0),
            (
                GameEvent::PaddleHit {
                    side: Side::Player,
                    point: Vec2::ZERO,
                },
                400.0,
            ),
            (
                GameEvent::Score {
                    side: Side::Opponent,
                    point: Vec2::ZERO,
                },
                100.0,
            ),
            (
                GameEvent::PowerUpCollected {
                    kind: PowerUpKind::SpeedBoost,
                },
                400.0,
            ),
            (GameEvent::GameOver { winner: Side::Player }, 100.0),
        ];
        for (event, freq) in cases {
            assert_eq!(SoundEffect::for_event(&event).tone().frequency_hz, freq);
        }
    }

    #[test]
    fn test_score_tone_is_long_and_loud() {
        let tone = SoundEffect::Score.tone();
        assert_eq!(tone.duration_ms, 180.0);
        assert_eq!(tone.volume, 0.2);
    }
}
