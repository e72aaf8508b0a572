//! What the front end shows for the current card

use std::path::{Path, PathBuf};

use mnemo_algo::{progress_line, ProgressEntry, RevealStage, WordRecord};

/// Availability of a word's mnemonic picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    NoImage,
    Missing(PathBuf),
    Available(PathBuf),
}

impl ImageStatus {
    pub fn probe(image: Option<&str>) -> Self {
        match image {
            None => Self::NoImage,
            Some(path) if Path::new(path).exists() => Self::Available(PathBuf::from(path)),
            Some(path) => Self::Missing(PathBuf::from(path)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::NoImage => "[No image available]".to_string(),
            Self::Missing(path) => format!("[Image not found: {}]", path.display()),
            Self::Available(path) => format!("[Image: {}]", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub word: &'a str,
    pub translation: Option<&'a str>,
    pub mnemonic: Option<&'a str>,
    /// Probed only once the image stage is reached
    pub image: Option<ImageStatus>,
    pub stage: RevealStage,
    pub instruction: &'static str,
    pub counters: String,
}

impl<'a> CardView<'a> {
    pub fn new(record: &'a WordRecord, entry: &ProgressEntry, stage: RevealStage) -> Self {
        Self {
            word: &record.word,
            translation: stage.shows_translation().then_some(record.translation.as_str()),
            mnemonic: stage.shows_mnemonic().then_some(record.mnemonic.as_str()),
            image: stage
                .shows_image()
                .then(|| ImageStatus::probe(record.image.as_deref())),
            stage,
            instruction: stage.instruction(),
            counters: progress_line(&record.word, entry),
        }
    }

    /// Plain-text rendering, one field per line
    pub fn render(&self) -> String {
        let mut lines = vec![self.word.to_string()];
        if let Some(translation) = self.translation {
            lines.push(format!("Translation: {translation}"));
        }
        if let Some(mnemonic) = self.mnemonic {
            lines.push(format!("Mnemonic: {mnemonic}"));
        }
        if let Some(image) = &self.image {
            lines.push(image.describe());
        }
        lines.push(self.instruction.to_string());
        lines.push(self.counters.clone());
        lines.join("\n")
    }
}
