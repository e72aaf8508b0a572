use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub vocabulary_path: PathBuf,
    pub progress_path: PathBuf,
    pub log_level: String,
    /// Fixed seed for the selection jitter, `None` draws one from the OS
    pub review_seed: Option<u64>,
    /// Refuse to start on a corrupt progress file instead of starting empty
    pub strict_progress: bool,
    /// Directory for the daily rolling log file, `None` keeps logs on stderr only
    pub file_log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary_path: PathBuf::from("vocabulary.json"),
            progress_path: PathBuf::from("progress.json"),
            log_level: "info".to_string(),
            review_seed: None,
            strict_progress: false,
            file_log_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values keep their default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let vocabulary_path = lookup("VOCABULARY_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.vocabulary_path);

        let progress_path = lookup("PROGRESS_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.progress_path);

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        let review_seed = lookup("REVIEW_SEED").and_then(|value| value.trim().parse::<u64>().ok());

        let strict_progress = lookup("STRICT_PROGRESS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(defaults.strict_progress);

        let file_logs = lookup("ENABLE_FILE_LOGS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let file_log_dir = file_logs.then(|| {
            lookup("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./logs"))
        });

        Self {
            vocabulary_path,
            progress_path,
            log_level,
            review_seed,
            strict_progress,
            file_log_dir,
        }
    }
}
