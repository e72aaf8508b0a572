use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use mnemo_trainer::config::Config;

pub const CATALOG: &str = r#"[
  {"word": "agua", "translation": "water", "mnemonic": "a guava dripping water", "image": ""},
  {"word": "fuego", "translation": "fire", "mnemonic": "fuel, go!"},
  {"word": "tierra", "translation": "earth", "mnemonic": "terrain", "image": "img/tierra.png"}
]"#;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
}

pub fn write_catalog(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("vocabulary.json");
    fs::write(&path, text).unwrap();
    path
}

pub fn config_in(dir: &Path, seed: u64) -> Config {
    Config {
        vocabulary_path: write_catalog(dir, CATALOG),
        progress_path: dir.join("progress.json"),
        review_seed: Some(seed),
        ..Config::default()
    }
}
