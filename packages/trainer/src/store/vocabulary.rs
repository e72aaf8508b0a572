//! Vocabulary catalog
//!
//! The catalog is a JSON array of records:
//!
//! ```json
//! [{ "word": "gato", "translation": "cat", "mnemonic": "...", "image": "img/gato.png" }]
//! ```
//!
//! `word` is required and unique. `translation` and `mnemonic` default to the
//! empty string, `image` may be absent, null or empty. A leading UTF-8 BOM is
//! accepted. Duplicate words are rejected rather than resolved.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use mnemo_algo::WordRecord;
use serde::Deserialize;

use crate::error::{Result, TrainerError};

#[derive(Debug, Deserialize)]
struct RawRecord {
    word: Option<String>,
    translation: Option<String>,
    mnemonic: Option<String>,
    image: Option<String>,
}

/// Read and validate the catalog at `path`
pub fn load(path: &Path) -> Result<Vec<WordRecord>> {
    let text = fs::read_to_string(path).map_err(|err| TrainerError::DataFormat {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let records = parse(&text, path)?;
    tracing::info!(path = %path.display(), count = records.len(), "vocabulary loaded");
    Ok(records)
}

/// Parse catalog text; `path` is only used in error messages
pub fn parse(text: &str, path: &Path) -> Result<Vec<WordRecord>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let raw: Vec<RawRecord> = serde_json::from_str(text).map_err(|err| TrainerError::DataFormat {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let mut seen: HashMap<String, usize> = HashMap::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());

    for (index, item) in raw.into_iter().enumerate() {
        let word = match item.word {
            Some(word) if !word.trim().is_empty() => word,
            Some(_) => {
                return Err(TrainerError::Validation {
                    index,
                    reason: "`word` is empty".to_string(),
                })
            }
            None => {
                return Err(TrainerError::Validation {
                    index,
                    reason: "missing `word` field".to_string(),
                })
            }
        };

        if let Some(&first) = seen.get(&word) {
            return Err(TrainerError::DuplicateWord {
                word,
                first,
                second: index,
            });
        }
        seen.insert(word.clone(), index);

        let mut record = WordRecord::new(
            word,
            item.translation.unwrap_or_default(),
            item.mnemonic.unwrap_or_default(),
        );
        if let Some(image) = item.image {
            record = record.with_image(image);
        }
        records.push(record);
    }

    Ok(records)
}
