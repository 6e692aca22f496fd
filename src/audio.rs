//! Audio triggers
//!
//! The simulation only ever asks for a bump. The manager applies volume and
//! mute, then hands the sound handle to whatever backend the host provides.

use crate::assets::{AssetHandle, Sounds};
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a wall, block or the paddle
    Bump,
}

/// Plays a loaded sound. Fire-and-forget: no completion is reported back.
pub trait AudioBackend {
    fn play(&mut self, sound: AssetHandle, volume: f32);
}

/// Backend that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, sound: AssetHandle, volume: f32) {
        log::trace!("play {:?} at {:.2}", sound, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    sounds: Sounds,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>, sounds: Sounds) -> Self {
        Self {
            backend,
            sounds,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Pick up volume and mute preferences
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let handle = match effect {
            SoundEffect::Bump => self.sounds.bump,
        };
        self.backend.play(handle, vol);
    }
}
