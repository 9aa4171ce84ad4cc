//! Phase sequencer for the "About" mascot.
//!
//! Two figures carry the "More About Us" sign in from the left, set it
//! down, pick it up again, hoist it overhead and dance. The sequencer only
//! tracks time: it reports which phase is active, emits [`Cue`]s for the
//! sound effects, and derives a cosmetic [`Pose`] for the view.
//!
//! ```text
//! (idle) ──intro──▶ Walking ─▶ Crouching ─▶ Grabbing ─▶ Lifting ─▶ Celebrating
//!                      ▲                                               │
//!                      └──────────────────── replay ───────────────────┘
//! ```

use std::f64::consts::PI;

// ============================================================================
// Phase
// ============================================================================

/// One step of the fixed animation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Walking,
    Crouching,
    Grabbing,
    Lifting,
    Celebrating,
}

impl Phase {
    /// Declared visiting order.
    pub const ORDER: [Phase; 5] = [
        Phase::Walking,
        Phase::Crouching,
        Phase::Grabbing,
        Phase::Lifting,
        Phase::Celebrating,
    ];

    /// The phase that follows this one, `None` for the terminal phase.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Walking => Some(Phase::Crouching),
            Phase::Crouching => Some(Phase::Grabbing),
            Phase::Grabbing => Some(Phase::Lifting),
            Phase::Lifting => Some(Phase::Celebrating),
            Phase::Celebrating => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Walking => "walking",
            Phase::Crouching => "crouching",
            Phase::Grabbing => "grabbing",
            Phase::Lifting => "lifting",
            Phase::Celebrating => "celebrating",
        }
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// Phase durations and cue cadences, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    /// Hidden time before the walk-in starts.
    pub intro_delay_ms: f64,
    pub walking_ms: f64,
    pub crouching_ms: f64,
    pub grabbing_ms: f64,
    pub lifting_ms: f64,
    /// Footstep cadence while walking.
    pub step_ms: f64,
    /// Dance beat cadence while celebrating.
    pub beat_ms: f64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            intro_delay_ms: 800.0,
            walking_ms: 4000.0,
            crouching_ms: 450.0,
            grabbing_ms: 350.0,
            lifting_ms: 600.0,
            step_ms: 280.0,
            beat_ms: 400.0,
        }
    }
}

impl Timeline {
    /// How long `phase` lasts. The terminal phase has no end.
    pub fn duration(&self, phase: Phase) -> Option<f64> {
        match phase {
            Phase::Walking => Some(self.walking_ms),
            Phase::Crouching => Some(self.crouching_ms),
            Phase::Grabbing => Some(self.grabbing_ms),
            Phase::Lifting => Some(self.lifting_ms),
            Phase::Celebrating => None,
        }
    }

    fn cadence(&self, phase: Phase) -> Option<f64> {
        match phase {
            Phase::Walking => Some(self.step_ms),
            Phase::Celebrating => Some(self.beat_ms),
            _ => None,
        }
        .filter(|ms| *ms > 0.0)
    }
}

// ============================================================================
// Cues and poses
// ============================================================================

/// Something the view should react to (usually with a sound).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Entered(Phase),
    Footstep,
    Beat,
}

/// Which leg is forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stride {
    Planted,
    LeftForward,
    RightForward,
}

/// What the figures' arms are doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arms {
    /// One arm on the sign at hip height.
    Carrying,
    /// Both arms down towards the sign.
    Reaching,
    /// Both arms overhead; alternates on every beat.
    Raised { left_high: bool },
}

/// Cosmetic attributes for the current instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Walk-in progress: 0 is off-screen left, 1 is centred.
    pub walk_in: f64,
    /// Vertical bounce of the figures in px (positive is up).
    pub bob: f64,
    /// Lean of the left figure in degrees; the right figure mirrors it.
    pub body_tilt: f64,
    /// 0 standing, 1 fully crouched.
    pub crouch: f64,
    /// Height of the sign in px above its carrying position.
    pub sign_lift: f64,
    /// Rotation of the sign in degrees.
    pub sign_tilt: f64,
    pub stride: Stride,
    pub arms: Arms,
}

impl Pose {
    fn hidden() -> Self {
        Self {
            walk_in: 0.0,
            bob: 0.0,
            body_tilt: 0.0,
            crouch: 0.0,
            sign_lift: 0.0,
            sign_tilt: 0.0,
            stride: Stride::Planted,
            arms: Arms::Carrying,
        }
    }
}

const WALK_BOB_PX: f64 = 4.0;
const DANCE_BOB_PX: f64 = 8.0;
const CARRY_TILT_DEG: f64 = -12.0;
const OVERHEAD_PX: f64 = 40.0;
const DANCE_TILT_DEG: f64 = 5.0;

/// Half-sine bump over one period, 0 at both ends and 1 in the middle.
fn bump(elapsed: f64, period: f64) -> f64 {
    if period <= 0.0 {
        return 0.0;
    }
    (PI * (elapsed % period) / period).sin()
}

fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}

// ============================================================================
// Sequencer
// ============================================================================

/// Timer-driven walk through [`Phase::ORDER`].
///
/// `phase` is `None` while the intro delay runs; the mascot is hidden then.
#[derive(Clone, Debug)]
pub struct Sequencer {
    timeline: Timeline,
    phase: Option<Phase>,
    elapsed_ms: f64,
    steps: u32,
    beats: u32,
    generation: u32,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(Timeline::default())
    }
}

impl Sequencer {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            phase: None,
            elapsed_ms: 0.0,
            steps: 0,
            beats: 0,
            generation: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.phase.is_some()
    }

    /// Time spent in the current phase (or in the intro delay).
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[inline]
    pub fn beats(&self) -> u32 {
        self.beats
    }

    /// Number of [`replay`](Self::replay)s so far.
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Skip the play-through and go straight to the terminal phase.
    ///
    /// Used when the intro already ran earlier in the browser session.
    pub fn start_settled(&mut self) {
        self.phase = Some(Phase::Celebrating);
        self.elapsed_ms = 0.0;
        self.steps = 0;
        self.beats = 0;
    }

    /// Restart from the first phase without the intro delay.
    pub fn replay(&mut self) {
        self.phase = Some(Phase::Walking);
        self.elapsed_ms = 0.0;
        self.steps = 0;
        self.beats = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Advance by `dt_ms` and return the cues crossed, in order.
    ///
    /// A long `dt_ms` (a throttled background tab) may cross several
    /// phases; each one is still entered exactly once.
    pub fn tick(&mut self, dt_ms: f64) -> Vec<Cue> {
        let mut cues = Vec::new();
        let mut remaining = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };

        loop {
            match self.phase {
                None => {
                    let left = (self.timeline.intro_delay_ms - self.elapsed_ms).max(0.0);
                    if remaining < left {
                        self.elapsed_ms += remaining;
                        break;
                    }
                    remaining -= left;
                    self.enter(Phase::Walking, &mut cues);
                }
                Some(phase) => {
                    let left = self
                        .timeline
                        .duration(phase)
                        .map(|d| (d - self.elapsed_ms).max(0.0));
                    let span = left.map_or(remaining, |l| l.min(remaining));

                    self.emit_periodic(phase, span, &mut cues);
                    self.elapsed_ms += span;
                    remaining -= span;

                    match (left, phase.next()) {
                        (Some(l), Some(next)) if span >= l => self.enter(next, &mut cues),
                        _ => break,
                    }
                }
            }
        }

        cues
    }

    fn enter(&mut self, phase: Phase, cues: &mut Vec<Cue>) {
        tracing::trace!(phase = phase.name(), "mascot phase");
        self.phase = Some(phase);
        self.elapsed_ms = 0.0;
        cues.push(Cue::Entered(phase));
    }

    fn emit_periodic(&mut self, phase: Phase, span: f64, cues: &mut Vec<Cue>) {
        let Some(period) = self.timeline.cadence(phase) else {
            return;
        };
        let before = (self.elapsed_ms / period).floor() as u32;
        let after = ((self.elapsed_ms + span) / period).floor() as u32;

        for _ in before..after {
            match phase {
                Phase::Walking => {
                    self.steps += 1;
                    cues.push(Cue::Footstep);
                }
                _ => {
                    self.beats += 1;
                    cues.push(Cue::Beat);
                }
            }
        }
    }

    /// Cosmetic pose for the current instant.
    pub fn pose(&self) -> Pose {
        let t = &self.timeline;
        let elapsed = self.elapsed_ms;

        let Some(phase) = self.phase else {
            return Pose::hidden();
        };

        match phase {
            Phase::Walking => {
                let wave = bump(elapsed, t.step_ms);
                Pose {
                    walk_in: progress(elapsed, t.walking_ms),
                    bob: WALK_BOB_PX * wave,
                    body_tilt: 0.0,
                    crouch: 0.0,
                    sign_lift: 5.0 * wave,
                    sign_tilt: CARRY_TILT_DEG + 4.0 * wave,
                    stride: if self.steps % 2 == 0 {
                        Stride::LeftForward
                    } else {
                        Stride::RightForward
                    },
                    arms: Arms::Carrying,
                }
            }
            Phase::Crouching => {
                let p = progress(elapsed, t.crouching_ms);
                Pose {
                    crouch: p,
                    sign_tilt: CARRY_TILT_DEG * (1.0 - p),
                    arms: Arms::Reaching,
                    walk_in: 1.0,
                    ..Pose::hidden()
                }
            }
            Phase::Grabbing => Pose {
                walk_in: 1.0,
                crouch: 1.0,
                arms: Arms::Reaching,
                ..Pose::hidden()
            },
            Phase::Lifting => {
                let p = progress(elapsed, t.lifting_ms);
                Pose {
                    walk_in: 1.0,
                    crouch: 1.0 - p,
                    sign_lift: OVERHEAD_PX * p,
                    arms: Arms::Raised { left_high: true },
                    ..Pose::hidden()
                }
            }
            Phase::Celebrating => {
                let left_high = self.beats % 2 == 0;
                let wave = bump(elapsed, t.beat_ms);
                let sway = if left_high { -3.0 } else { 3.0 };
                Pose {
                    walk_in: 1.0,
                    bob: DANCE_BOB_PX * wave,
                    body_tilt: if left_high {
                        -DANCE_TILT_DEG
                    } else {
                        DANCE_TILT_DEG
                    },
                    crouch: 0.0,
                    sign_lift: OVERHEAD_PX + DANCE_BOB_PX * wave,
                    sign_tilt: sway * wave,
                    stride: if left_high {
                        Stride::LeftForward
                    } else {
                        Stride::RightForward
                    },
                    arms: Arms::Raised { left_high },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entered(cues: &[Cue]) -> Vec<Phase> {
        cues.iter()
            .filter_map(|c| match c {
                Cue::Entered(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_hidden_during_intro() {
        let mut seq = Sequencer::default();
        assert!(seq.tick(799.0).is_empty());
        assert!(!seq.is_visible());
        assert_eq!(seq.pose(), Pose::hidden());

        assert_eq!(seq.tick(1.0), vec![Cue::Entered(Phase::Walking)]);
        assert!(seq.is_visible());
    }

    #[test]
    fn test_footsteps_while_walking() {
        let mut seq = Sequencer::default();
        seq.tick(800.0);
        let cues = seq.tick(4000.0);

        let steps = cues.iter().filter(|c| **c == Cue::Footstep).count();
        // 4000 / 280 = 14.28
        assert_eq!(steps, 14);
        assert_eq!(seq.steps(), 14);
        assert_eq!(seq.phase(), Some(Phase::Crouching));
    }

    #[test]
    fn test_large_tick_crosses_every_phase_in_order() {
        let mut seq = Sequencer::default();
        let cues = seq.tick(60_000.0);
        assert_eq!(entered(&cues), Phase::ORDER.to_vec());
        assert_eq!(seq.phase(), Some(Phase::Celebrating));
    }

    #[test]
    fn test_beats_only_while_celebrating() {
        let mut seq = Sequencer::default();
        seq.tick(800.0 + 4000.0 + 450.0 + 350.0 + 600.0);
        assert_eq!(seq.phase(), Some(Phase::Celebrating));
        assert_eq!(seq.beats(), 0);

        let cues = seq.tick(1200.0);
        assert_eq!(cues, vec![Cue::Beat, Cue::Beat, Cue::Beat]);
    }

    #[test]
    fn test_replay_resets_to_walking() {
        let mut seq = Sequencer::default();
        seq.tick(10_000.0);
        seq.replay();

        assert_eq!(seq.phase(), Some(Phase::Walking));
        assert_eq!(seq.steps(), 0);
        assert_eq!(seq.beats(), 0);
        assert_eq!(seq.generation(), 1);
        assert_eq!(seq.pose().walk_in, 0.0);
    }

    #[test]
    fn test_start_settled() {
        let mut seq = Sequencer::default();
        seq.start_settled();
        assert_eq!(seq.phase(), Some(Phase::Celebrating));
        assert!(entered(&seq.tick(5000.0)).is_empty());
    }

    #[test]
    fn test_negative_and_nan_ticks_ignored() {
        let mut seq = Sequencer::default();
        assert!(seq.tick(-50.0).is_empty());
        assert!(seq.tick(f64::NAN).is_empty());
        assert_eq!(seq.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_pose_lift_reaches_overhead() {
        let mut seq = Sequencer::default();
        seq.tick(800.0 + 4000.0 + 450.0 + 350.0 + 300.0);
        assert_eq!(seq.phase(), Some(Phase::Lifting));
        let pose = seq.pose();
        assert!((pose.sign_lift - OVERHEAD_PX / 2.0).abs() < 1e-9);
        assert!((pose.crouch - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_stride_alternates_with_steps() {
        let mut seq = Sequencer::default();
        seq.tick(800.0);
        assert_eq!(seq.pose().stride, Stride::LeftForward);
        seq.tick(280.0);
        assert_eq!(seq.pose().stride, Stride::RightForward);
    }
}
