//! Procedural sound effects as plain data.
//!
//! A [`Tone`] describes one voice: a source (oscillator or white noise), an
//! optional biquad filter and a gain envelope. The site turns tones into a
//! Web Audio graph; nothing here touches the browser, so the recipes are
//! testable natively.

use std::collections::HashMap;

use crate::mascot::{Cue, Phase};
use crate::theme::Theme;

/// Gain the envelope decays to. Exponential ramps cannot reach zero.
pub const SILENCE: f64 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    LowPass,
    HighPass,
    BandPass,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Source {
    Oscillator { waveform: Waveform, frequency: f64 },
    /// White noise, one buffer as long as the envelope.
    Noise,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Filter {
    pub kind: FilterKind,
    pub frequency: f64,
}

/// Linear attack to `peak`, then exponential decay to [`SILENCE`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub attack: f64,
    pub peak: f64,
    /// Seconds from start until the voice is silent and stopped.
    pub duration: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub source: Source,
    pub filter: Option<Filter>,
    pub envelope: Envelope,
    /// Start delay in seconds from "now".
    pub delay: f64,
}

impl Tone {
    /// When this voice ends, relative to "now".
    pub fn end(&self) -> f64 {
        self.delay + self.envelope.duration
    }
}

// ============================================================================
// Effects
// ============================================================================

/// Every sound the widgets make.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Mascot footstep while walking.
    Footstep,
    /// Scrape as the mascots set the sign down and take hold of it.
    Dig,
    /// Two-note chime when the celebration starts.
    Chime,
    /// Theme switch; pitch depends on the theme switched *to*.
    Click(Theme),
}

impl Effect {
    pub fn name(self) -> &'static str {
        match self {
            Effect::Footstep => "footstep",
            Effect::Dig => "dig",
            Effect::Chime => "chime",
            Effect::Click(_) => "click",
        }
    }

    /// Sound for a sequencer cue, if it has one.
    pub fn for_cue(cue: Cue) -> Option<Self> {
        match cue {
            Cue::Footstep => Some(Effect::Footstep),
            Cue::Entered(Phase::Crouching | Phase::Grabbing) => Some(Effect::Dig),
            Cue::Entered(Phase::Celebrating) => Some(Effect::Chime),
            Cue::Entered(_) | Cue::Beat => None,
        }
    }

    /// Voices making up this effect.
    ///
    /// `jitter` in `0.0..1.0` varies the pitch so repeated footsteps don't
    /// sound mechanical; other effects ignore it.
    pub fn tones(self, jitter: f64) -> Vec<Tone> {
        let jitter = if jitter.is_finite() { jitter.clamp(0.0, 1.0) } else { 0.0 };

        match self {
            Effect::Footstep => vec![Tone {
                source: Source::Oscillator {
                    waveform: Waveform::Sine,
                    frequency: 100.0 + jitter * 50.0,
                },
                filter: Some(Filter {
                    kind: FilterKind::LowPass,
                    frequency: 300.0,
                }),
                envelope: Envelope {
                    attack: 0.01,
                    peak: 0.6,
                    duration: 0.15,
                },
                delay: 0.0,
            }],
            Effect::Dig => vec![Tone {
                source: Source::Noise,
                filter: Some(Filter {
                    kind: FilterKind::BandPass,
                    frequency: 900.0,
                }),
                envelope: Envelope {
                    attack: 0.005,
                    peak: 0.25,
                    duration: 0.12,
                },
                delay: 0.0,
            }],
            Effect::Chime => [660.0, 880.0]
                .into_iter()
                .enumerate()
                .map(|(i, frequency)| Tone {
                    source: Source::Oscillator {
                        waveform: Waveform::Triangle,
                        frequency,
                    },
                    filter: None,
                    envelope: Envelope {
                        attack: 0.01,
                        peak: 0.3,
                        duration: 0.35,
                    },
                    delay: i as f64 * 0.09,
                })
                .collect(),
            Effect::Click(theme) => vec![Tone {
                source: Source::Oscillator {
                    waveform: Waveform::Square,
                    frequency: if theme.is_dark() { 520.0 } else { 780.0 },
                },
                filter: Some(Filter {
                    kind: FilterKind::HighPass,
                    frequency: 400.0,
                }),
                envelope: Envelope {
                    attack: 0.002,
                    peak: 0.15,
                    duration: 0.05,
                },
                delay: 0.0,
            }],
        }
    }
}

/// Seconds until every voice of `tones` is silent.
pub fn total_duration(tones: &[Tone]) -> f64 {
    tones.iter().map(Tone::end).fold(0.0, f64::max)
}

// ============================================================================
// PlaybackGate
// ============================================================================

/// Drops an effect while the same effect is still sounding.
///
/// Several mascot instances on one page would otherwise stack their
/// footsteps into a roar. Times are in seconds on any monotonic clock.
#[derive(Clone, Debug, Default)]
pub struct PlaybackGate {
    busy_until: HashMap<&'static str, f64>,
}

impl PlaybackGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `effect` at `now` for `duration` seconds. Returns `false` if the
    /// previous claim has not expired.
    pub fn try_acquire(&mut self, effect: Effect, now: f64, duration: f64) -> bool {
        let until = self.busy_until.entry(effect.name()).or_insert(f64::MIN);
        if now < *until {
            return false;
        }
        *until = now + duration.max(0.0);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footstep_pitch_range() {
        let low = Effect::Footstep.tones(0.0)[0];
        let high = Effect::Footstep.tones(1.0)[0];
        assert_eq!(
            low.source,
            Source::Oscillator {
                waveform: Waveform::Sine,
                frequency: 100.0
            }
        );
        assert_eq!(
            high.source,
            Source::Oscillator {
                waveform: Waveform::Sine,
                frequency: 150.0
            }
        );
        assert_eq!(low.envelope.peak, 0.6);
    }

    #[test]
    fn test_jitter_clamped() {
        assert_eq!(Effect::Footstep.tones(7.0), Effect::Footstep.tones(1.0));
        assert_eq!(Effect::Footstep.tones(f64::NAN), Effect::Footstep.tones(0.0));
    }

    #[test]
    fn test_chime_is_staggered() {
        let tones = Effect::Chime.tones(0.0);
        assert_eq!(tones.len(), 2);
        assert!(tones[1].delay > tones[0].delay);
        assert!((total_duration(&tones) - 0.44).abs() < 1e-9);
    }

    #[test]
    fn test_cue_mapping() {
        assert_eq!(Effect::for_cue(Cue::Footstep), Some(Effect::Footstep));
        assert_eq!(
            Effect::for_cue(Cue::Entered(Phase::Grabbing)),
            Some(Effect::Dig)
        );
        assert_eq!(Effect::for_cue(Cue::Entered(Phase::Walking)), None);
        assert_eq!(Effect::for_cue(Cue::Beat), None);
    }

    #[test]
    fn test_gate_blocks_overlap() {
        let mut gate = PlaybackGate::new();
        assert!(gate.try_acquire(Effect::Footstep, 10.0, 0.15));
        assert!(!gate.try_acquire(Effect::Footstep, 10.1, 0.15));
        // Different effect is independent
        assert!(gate.try_acquire(Effect::Dig, 10.1, 0.12));
        assert!(gate.try_acquire(Effect::Footstep, 10.2, 0.15));
    }
}
