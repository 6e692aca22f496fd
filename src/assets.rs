//! Asset manifest and preload tracking
//!
//! The game never looks inside its images or sounds. Each manifest key gets an
//! opaque [`AssetHandle`] that is handed to the renderer and audio backends;
//! the core only needs to know when everything has finished loading.

use crate::error::{Error, Result};

/// Opaque reference to a loaded image or sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Sprite,
    Sound,
}

const SPRITE_KEYS: [&str; 4] = ["background", "ball", "platform", "block"];
const SOUND_KEYS: [&str; 1] = ["bump"];

/// Sprite handles used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprites {
    pub background: AssetHandle,
    pub ball: AssetHandle,
    pub platform: AssetHandle,
    pub block: AssetHandle,
}

/// Sound handles used by the audio manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sounds {
    pub bump: AssetHandle,
}

#[derive(Debug, Clone)]
struct Entry {
    key: &'static str,
    kind: AssetKind,
}

/// Every asset the game needs, in a fixed order (the order is the handle)
#[derive(Debug, Clone)]
pub struct AssetManifest {
    entries: Vec<Entry>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        let sprites = SPRITE_KEYS.iter().map(|&key| Entry {
            key,
            kind: AssetKind::Sprite,
        });
        let sounds = SOUND_KEYS.iter().map(|&key| Entry {
            key,
            kind: AssetKind::Sound,
        });
        Self {
            entries: sprites.chain(sounds).collect(),
        }
    }
}

impl AssetManifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn handle(&self, key: &str) -> Result<AssetHandle> {
        self.entries
            .iter()
            .position(|e| e.key == key)
            .map(|i| AssetHandle(i as u32))
            .ok_or_else(|| Error::UnknownAsset {
                key: key.to_string(),
            })
    }

    /// Path the loader should fetch for `key`
    pub fn path(&self, key: &str) -> Result<String> {
        let entry = &self.entries[self.handle(key)?.0 as usize];
        Ok(match entry.kind {
            AssetKind::Sprite => format!("img/{}.png", entry.key),
            AssetKind::Sound => format!("sounds/{}.mp3", entry.key),
        })
    }

    /// (key, kind) pairs in handle order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, AssetKind)> + '_ {
        self.entries.iter().map(|e| (e.key, e.kind))
    }

    pub fn sprites(&self) -> Result<Sprites> {
        Ok(Sprites {
            background: self.handle("background")?,
            ball: self.handle("ball")?,
            platform: self.handle("platform")?,
            block: self.handle("block")?,
        })
    }

    pub fn sounds(&self) -> Result<Sounds> {
        Ok(Sounds {
            bump: self.handle("bump")?,
        })
    }
}

/// Counts load completions until every manifest entry is in
#[derive(Debug, Clone)]
pub struct Preloader {
    manifest: AssetManifest,
    loaded: Vec<bool>,
    signalled: bool,
}

impl Preloader {
    pub fn new(manifest: AssetManifest) -> Self {
        let loaded = vec![false; manifest.len()];
        Self {
            manifest,
            loaded,
            signalled: false,
        }
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    pub fn required(&self) -> usize {
        self.loaded.len()
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.iter().filter(|&&l| l).count()
    }

    /// Record that `key` finished loading.
    ///
    /// Returns `true` exactly once: on the completion that makes the set
    /// whole. Repeat completions of the same key are counted once.
    pub fn mark_loaded(&mut self, key: &str) -> Result<bool> {
        let AssetHandle(index) = self.manifest.handle(key)?;
        self.loaded[index as usize] = true;
        log::debug!(
            "Loaded {key} ({}/{})",
            self.loaded_count(),
            self.required()
        );

        if self.signalled || self.loaded_count() < self.required() {
            return Ok(false);
        }
        self.signalled = true;
        log::info!("All {} assets loaded", self.required());
        Ok(true)
    }

    pub fn is_ready(&self) -> bool {
        self.signalled
    }
}
