//! Reveal stages
//!
//! How much of the current word is visible. Each reveal trigger moves one
//! stage forward and [`RevealStage::ImageShown`] is terminal.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevealStage {
    #[default]
    WordOnly,
    TranslationShown,
    MnemonicShown,
    ImageShown,
}

impl RevealStage {
    /// Next stage; `ImageShown` stays where it is
    pub fn advance(self) -> Self {
        match self {
            Self::WordOnly => Self::TranslationShown,
            Self::TranslationShown => Self::MnemonicShown,
            Self::MnemonicShown | Self::ImageShown => Self::ImageShown,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::ImageShown
    }

    pub fn shows_translation(self) -> bool {
        self != Self::WordOnly
    }

    pub fn shows_mnemonic(self) -> bool {
        matches!(self, Self::MnemonicShown | Self::ImageShown)
    }

    pub fn shows_image(self) -> bool {
        self == Self::ImageShown
    }

    /// Prompt telling the user what the next interaction does
    pub fn instruction(self) -> &'static str {
        match self {
            Self::WordOnly => "Click anywhere to reveal translation, mnemonic, and image",
            Self::TranslationShown => "Click again to reveal mnemonic",
            Self::MnemonicShown => "Click again to reveal image",
            Self::ImageShown => "Rate your answer using the buttons below",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::WordOnly => "WORD_ONLY",
            Self::TranslationShown => "TRANSLATION_SHOWN",
            Self::MnemonicShown => "MNEMONIC_SHOWN",
            Self::ImageShown => "IMAGE_SHOWN",
        }
    }
}

impl std::fmt::Display for RevealStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_reveals_reach_image() {
        let stage = RevealStage::default().advance().advance().advance();
        assert_eq!(stage, RevealStage::ImageShown);
        assert_eq!(stage.advance(), RevealStage::ImageShown);
    }

    #[test]
    fn test_visibility_is_monotonic() {
        let mut stage = RevealStage::WordOnly;
        assert!(!stage.shows_translation());
        stage = stage.advance();
        assert!(stage.shows_translation() && !stage.shows_mnemonic());
        stage = stage.advance();
        assert!(stage.shows_mnemonic() && !stage.shows_image());
        stage = stage.advance();
        assert!(stage.shows_translation() && stage.shows_mnemonic() && stage.shows_image());
        assert!(stage.is_terminal());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&RevealStage::MnemonicShown).unwrap(), "\"MNEMONIC_SHOWN\"");
        assert_eq!(RevealStage::TranslationShown.to_string(), "TRANSLATION_SHOWN");
    }
}
