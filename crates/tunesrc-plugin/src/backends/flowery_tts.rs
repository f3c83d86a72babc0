// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flowery text-to-speech backend: source only.

use async_trait::async_trait;
use tunesrc_config::model::AudioFormat;
use tunesrc_core::{BackendAdapter, BackendKind, HealthStatus, SourceProvider, TunesrcError};

use super::matches_identifier;

pub const SOURCE_NAME: &str = "flowery-tts";
pub const DEFAULT_VOICE: &str = "Salli";
pub const DEFAULT_SPEED: f32 = 1.0;
pub const DEFAULT_AUDIO_FORMAT: AudioFormat = AudioFormat::Mp3;

const PREFIXES: &[&str] = &["ftts://"];

#[derive(Debug, Clone, PartialEq)]
pub struct FloweryTtsSourceManager {
    voice: String,
    translate: bool,
    silence_ms: u32,
    speed: f32,
    audio_format: AudioFormat,
}

impl FloweryTtsSourceManager {
    /// `None` or a blank voice selects [`DEFAULT_VOICE`].
    pub fn new(voice: Option<String>) -> Self {
        Self {
            voice: voice
                .filter(|voice| !voice.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            translate: false,
            silence_ms: 0,
            speed: DEFAULT_SPEED,
            audio_format: DEFAULT_AUDIO_FORMAT,
        }
    }

    pub fn set_translate(&mut self, translate: bool) {
        self.translate = translate;
    }

    pub fn set_silence(&mut self, silence_ms: u32) {
        self.silence_ms = silence_ms;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn set_audio_format(&mut self, audio_format: AudioFormat) {
        self.audio_format = audio_format;
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn translate(&self) -> bool {
        self.translate
    }

    pub fn silence(&self) -> u32 {
        self.silence_ms
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn audio_format(&self) -> AudioFormat {
        self.audio_format
    }
}

#[async_trait]
impl BackendAdapter for FloweryTtsSourceManager {
    fn kind(&self) -> BackendKind {
        BackendKind::FloweryTts
    }

    async fn health_check(&self) -> Result<HealthStatus, TunesrcError> {
        Ok(HealthStatus::Healthy)
    }
}

impl SourceProvider for FloweryTtsSourceManager {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    fn can_load(&self, identifier: &str) -> bool {
        matches_identifier(identifier, PREFIXES, &[])
    }
}
