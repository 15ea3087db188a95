//! Substring benchmark configuration
//!
//! Read once at process start, from environment variables or a JSON document.
//! Unknown bucket levels are accepted and select the default bucket.

use serde::{Deserialize, Serialize};

use crate::error::BenchError;
use crate::search::SearcherKind;

/// Seed of the generator shared by corpus and candidate generation.
pub const DEFAULT_SEED: u64 = 68_798_243_246_987;

pub const DEFAULT_MAX_NUM_STRINGS: usize = 10;

/// Inclusive `[min, max]` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub min: usize,
    pub max: usize,
}

impl Bucket {
    const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Substring length range for a length level.
pub fn length_bucket(level: i32) -> Bucket {
    match level {
        2 => Bucket::new(80, 120),
        3 => Bucket::new(800, 1200),
        4 => Bucket::new(9000, 11000),
        // Below 8 bytes substrings stop being unique in the article.
        _ => Bucket::new(8, 20),
    }
}

/// Start-offset range for an index level.
pub fn index_bucket(level: i32) -> Bucket {
    match level {
        2 => Bucket::new(80, 120),
        3 => Bucket::new(800, 1200),
        4 => Bucket::new(48000, 51000),
        _ => Bucket::new(1, 50),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringSearchConfig {
    pub max_num_strings: usize,
    pub string_length: i32,
    pub index_level: i32,
    pub use_random_string: bool,
    pub seed: u64,
    pub searcher: SearcherKind,
}

impl Default for StringSearchConfig {
    fn default() -> Self {
        Self {
            max_num_strings: DEFAULT_MAX_NUM_STRINGS,
            string_length: 1,
            index_level: 1,
            use_random_string: false,
            seed: DEFAULT_SEED,
            searcher: SearcherKind::Memmem,
        }
    }
}

impl StringSearchConfig {
    pub const ENV_MAX_NUM_STRINGS: &'static str = "MICROBENCH_MAX_NUM_STRINGS";
    pub const ENV_STRING_LENGTH: &'static str = "MICROBENCH_STRING_LENGTH";
    pub const ENV_INDEX_LEVEL: &'static str = "MICROBENCH_INDEX_LEVEL";
    pub const ENV_USE_RANDOM_STRING: &'static str = "MICROBENCH_USE_RANDOM_STRING";
    pub const ENV_SEED: &'static str = "MICROBENCH_SEED";
    pub const ENV_SEARCHER: &'static str = "MICROBENCH_SEARCHER";

    pub fn from_env() -> Result<Self, BenchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a key lookup; missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BenchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = lookup(Self::ENV_MAX_NUM_STRINGS) {
            config.max_num_strings = parse_number(Self::ENV_MAX_NUM_STRINGS, &v)?;
        }
        if let Some(v) = lookup(Self::ENV_STRING_LENGTH) {
            config.string_length = parse_number(Self::ENV_STRING_LENGTH, &v)?;
        }
        if let Some(v) = lookup(Self::ENV_INDEX_LEVEL) {
            config.index_level = parse_number(Self::ENV_INDEX_LEVEL, &v)?;
        }
        if let Some(v) = lookup(Self::ENV_USE_RANDOM_STRING) {
            config.use_random_string = parse_bool(Self::ENV_USE_RANDOM_STRING, &v)?;
        }
        if let Some(v) = lookup(Self::ENV_SEED) {
            config.seed = parse_number(Self::ENV_SEED, &v)?;
        }
        if let Some(v) = lookup(Self::ENV_SEARCHER) {
            config.searcher = SearcherKind::parse(&v).ok_or_else(|| BenchError::InvalidOption {
                name: Self::ENV_SEARCHER,
                value: v.clone(),
            })?;
        }
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, BenchError> {
        serde_json::from_str(json).map_err(|e| BenchError::InvalidOption {
            name: "config",
            value: e.to_string(),
        })
    }

    pub fn length_bucket(&self) -> Bucket {
        length_bucket(self.string_length)
    }

    pub fn index_bucket(&self) -> Bucket {
        index_bucket(self.index_level)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, BenchError> {
    value.trim().parse().map_err(|_| BenchError::InvalidOption {
        name,
        value: value.to_string(),
    })
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, BenchError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(BenchError::InvalidOption {
            name,
            value: value.to_string(),
        }),
    }
}
