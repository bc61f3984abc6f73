use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub ocr: OcrConfig,
}

/// Chunking parameters, measured in characters.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessingConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// Tesseract language codes, `+`-separated (e.g. `eng+deu`)
    pub languages: String,
    pub max_image_dimension: u32,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: "eng".to_string(),
            max_image_dimension: 4096,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let processing = ProcessingConfig::default();
        let ocr = OcrConfig::default();
        Self {
            processing: ProcessingConfig {
                chunk_size: parse_env_or("CHUNK_SIZE", processing.chunk_size),
                chunk_overlap: parse_env_or("CHUNK_OVERLAP", processing.chunk_overlap),
            },
            ocr: OcrConfig {
                languages: env::var("OCR_LANGUAGES").unwrap_or(ocr.languages),
                max_image_dimension: parse_env_or("OCR_MAX_DIMENSION", ocr.max_image_dimension),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
