//! Sound-effect collaborator
//!
//! The simulation only asks for a sound by index; playback belongs to the
//! platform. Failures are reported back but never interrupt the game.

use crate::error::AudioError;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Projectile hits a target
    Hit,
}

impl SoundEffect {
    /// Index in the platform's sound bank
    pub fn index(self) -> usize {
        match self {
            SoundEffect::Hit => 0,
        }
    }
}

/// Fire-and-forget audio backend
pub trait AudioSink {
    fn play_sound(&mut self, index: usize) -> Result<(), AudioError>;
}

/// Play an effect, logging and discarding any failure
pub fn play(audio: &mut dyn AudioSink, effect: SoundEffect) {
    if let Err(err) = audio.play_sound(effect.index()) {
        log::warn!("Ignoring audio failure for {:?}: {}", effect, err);
    }
}

/// Silent backend
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_sound(&mut self, _index: usize) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Backend that logs each request (headless runs)
#[derive(Debug, Default, Clone)]
pub struct LogAudio {
    /// Number of sounds in the bank; indices past it are rejected
    pub bank_size: usize,
    pub played: u64,
}

impl LogAudio {
    pub fn new(bank_size: usize) -> Self {
        Self {
            bank_size,
            played: 0,
        }
    }
}

impl AudioSink for LogAudio {
    fn play_sound(&mut self, index: usize) -> Result<(), AudioError> {
        if index >= self.bank_size {
            return Err(AudioError::UnknownSound(index));
        }
        self.played += 1;
        log::debug!("♪ sound {}", index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenAudio;

    impl AudioSink for BrokenAudio {
        fn play_sound(&mut self, _index: usize) -> Result<(), AudioError> {
            Err(AudioError::Unavailable("no device".into()))
        }
    }

    #[test]
    fn test_hit_is_index_zero() {
        assert_eq!(SoundEffect::Hit.index(), 0);
    }

    #[test]
    fn test_failures_are_swallowed() {
        play(&mut BrokenAudio, SoundEffect::Hit);
        let mut empty = LogAudio::new(0);
        play(&mut empty, SoundEffect::Hit);
        assert_eq!(empty.played, 0);
    }

    #[test]
    fn test_log_audio_counts() {
        let mut audio = LogAudio::new(1);
        play(&mut audio, SoundEffect::Hit);
        play(&mut audio, SoundEffect::Hit);
        assert_eq!(audio.played, 2);
    }
}
