//! Fire-and-forget audio cue sinks.

use log::debug;

use swarmfall_core::events::AudioCue;

pub trait AudioSink {
    fn play(&mut self, cue: &AudioCue);
}

/// Writes cues to the debug log. `Shoot` is skipped; it fires every volley.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: &AudioCue) {
        if !matches!(cue, AudioCue::Shoot { .. }) {
            debug!("audio: {cue:?}");
        }
    }
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mute;

impl AudioSink for Mute {
    fn play(&mut self, _cue: &AudioCue) {}
}
