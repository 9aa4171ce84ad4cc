//! Web Audio playback for [`Effect`]s.
//!
//! One `AudioContext` per page, created lazily on the first sound and kept
//! in a thread-local so duplicate widgets share it and its
//! [`PlaybackGate`]. Browsers start the context suspended until a user
//! gesture; [`unlock`] is wired to the first pointer or key press.
//!
//! Sound is decoration: every failure is logged at debug level and dropped.

use std::cell::RefCell;

use refine_core::AudioError;
use refine_core::audio::{
    Effect, FilterKind, PlaybackGate, SILENCE, Source, Tone, Waveform, total_duration,
};
use wasm_bindgen::JsValue;
use web_sys::{
    AudioBuffer, AudioContext, AudioContextState, AudioNode, BiquadFilterType, OscillatorType,
};

thread_local! {
    static ENGINE: RefCell<Option<AudioEngine>> = const { RefCell::new(None) };
}

/// Play `effect`, unless the same effect is still sounding.
pub fn play(effect: Effect) {
    if let Err(e) = with_engine(|engine| engine.play(effect)) {
        tracing::debug!(effect = effect.name(), error = %e, "sound skipped");
    }
}

/// Resume the audio context after a user gesture.
pub fn unlock() {
    if let Err(e) = with_engine(|engine| {
        engine.resume();
        Ok(())
    }) {
        tracing::debug!(error = %e, "audio unlock failed");
    }
}

fn with_engine(
    f: impl FnOnce(&mut AudioEngine) -> Result<(), AudioError>,
) -> Result<(), AudioError> {
    ENGINE.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(AudioEngine::new()?);
        }
        match slot.as_mut() {
            Some(engine) => f(engine),
            None => Err(AudioError::Unsupported),
        }
    })
}

fn graph(err: JsValue) -> AudioError {
    AudioError::Graph(format!("{err:?}"))
}

struct AudioEngine {
    ctx: AudioContext,
    gate: PlaybackGate,
}

impl AudioEngine {
    fn new() -> Result<Self, AudioError> {
        let ctx = AudioContext::new().map_err(|_| AudioError::Unsupported)?;
        tracing::debug!(sample_rate = ctx.sample_rate(), "audio context created");
        Ok(Self {
            ctx,
            gate: PlaybackGate::new(),
        })
    }

    fn resume(&self) {
        if self.ctx.state() == AudioContextState::Suspended {
            let _ = self.ctx.resume();
        }
    }

    fn play(&mut self, effect: Effect) -> Result<(), AudioError> {
        self.resume();

        let tones = effect.tones(js_sys::Math::random());
        let now = self.ctx.current_time();
        if !self.gate.try_acquire(effect, now, total_duration(&tones)) {
            return Ok(());
        }

        for tone in &tones {
            self.voice(tone, now)?;
        }
        Ok(())
    }

    /// Build and schedule one source → filter → gain → destination chain.
    fn voice(&self, tone: &Tone, now: f64) -> Result<(), AudioError> {
        let ctx = &self.ctx;
        let env = tone.envelope;
        let start = now + tone.delay;
        let end = start + env.duration;

        let gain = ctx.create_gain().map_err(graph)?;
        let level = gain.gain();
        level.set_value_at_time(0.0, start).map_err(graph)?;
        level
            .linear_ramp_to_value_at_time(env.peak as f32, start + env.attack)
            .map_err(graph)?;
        level
            .exponential_ramp_to_value_at_time(SILENCE as f32, end)
            .map_err(graph)?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(graph)?;

        let input: AudioNode = match tone.filter {
            Some(shape) => {
                let filter = ctx.create_biquad_filter().map_err(graph)?;
                filter.set_type(match shape.kind {
                    FilterKind::LowPass => BiquadFilterType::Lowpass,
                    FilterKind::HighPass => BiquadFilterType::Highpass,
                    FilterKind::BandPass => BiquadFilterType::Bandpass,
                });
                filter.frequency().set_value(shape.frequency as f32);
                filter.connect_with_audio_node(&gain).map_err(graph)?;
                filter.into()
            }
            None => gain.into(),
        };

        match tone.source {
            Source::Oscillator {
                waveform,
                frequency,
            } => {
                let osc = ctx.create_oscillator().map_err(graph)?;
                osc.set_type(match waveform {
                    Waveform::Sine => OscillatorType::Sine,
                    Waveform::Square => OscillatorType::Square,
                    Waveform::Triangle => OscillatorType::Triangle,
                });
                osc.frequency().set_value(frequency as f32);
                osc.connect_with_audio_node(&input).map_err(graph)?;
                osc.start_with_when(start).map_err(graph)?;
                osc.stop_with_when(end).map_err(graph)?;
            }
            Source::Noise => {
                let buffer = self.noise(env.duration)?;
                let src = ctx.create_buffer_source().map_err(graph)?;
                src.set_buffer(Some(&buffer));
                src.connect_with_audio_node(&input).map_err(graph)?;
                src.start_with_when(start).map_err(graph)?;
                src.stop_with_when(end).map_err(graph)?;
            }
        }
        Ok(())
    }

    /// Mono white-noise buffer of `seconds`.
    fn noise(&self, seconds: f64) -> Result<AudioBuffer, AudioError> {
        let rate = self.ctx.sample_rate();
        let frames = ((f64::from(rate) * seconds).ceil() as u32).max(1);
        let mut samples: Vec<f32> = (0..frames)
            .map(|_| (js_sys::Math::random() * 2.0 - 1.0) as f32)
            .collect();

        let buffer = self.ctx.create_buffer(1, frames, rate).map_err(graph)?;
        buffer.copy_to_channel(&mut samples, 0).map_err(graph)?;
        Ok(buffer)
    }
}
