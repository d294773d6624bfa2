use std::fs::File;
use std::io::Write;
use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::errors::SubtitleError;
use crate::subtitle_processor::DialoguePair;

// @module: Plain-text output of dialogue pairs

/// Field separator used in the output records
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// A single tab character
    Tab,
    /// A literal " - "
    #[default]
    Dash,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tab => "\t",
            Self::Dash => " - ",
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tab => write!(f, "tab"),
            Self::Dash => write!(f, "dash"),
        }
    }
}

impl std::str::FromStr for Separator {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "tab" => Ok(Self::Tab),
            "dash" => Ok(Self::Dash),
            _ => Err(anyhow::anyhow!("Invalid separator: {}", s)),
        }
    }
}

/// Render pairs as `<index><sep><source><sep><target>` lines, 1-indexed
pub fn format_dialogues(pairs: &[DialoguePair], separator: Separator) -> String {
    let sep = separator.as_str();

    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| format!("{}{}{}{}{}\n", i + 1, sep, pair.source, sep, pair.target))
        .collect()
}

/// Write pairs to `path` as UTF-8, replacing any existing file
pub fn write_dialogues<P: AsRef<Path>>(
    pairs: &[DialoguePair],
    path: P,
    separator: Separator,
) -> Result<(), SubtitleError> {
    let path = path.as_ref();
    let write_error = |e: std::io::Error| SubtitleError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(format_dialogues(pairs, separator).as_bytes())
        .map_err(write_error)?;
    file.flush().map_err(write_error)?;

    Ok(())
}
