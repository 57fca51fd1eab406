use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::audio_format::AudioFormat;

/// Generated name of a temporary audio artifact: `<uuid-v4>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScratchFileName {
    id: Uuid,
    format: AudioFormat,
}

impl ScratchFileName {
    pub fn generate(format: AudioFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            format,
        }
    }

    /// Accepts only names this service could have generated. Anything else,
    /// including names with path separators, is rejected.
    pub fn parse(raw: &str) -> Result<Self, InvalidScratchFileName> {
        let invalid = || InvalidScratchFileName(raw.to_string());

        let (stem, ext) = raw.rsplit_once('.').ok_or_else(invalid)?;
        let format = AudioFormat::from_extension(ext).ok_or_else(invalid)?;
        if ext != format.extension() {
            return Err(invalid());
        }
        let id = Uuid::try_parse(stem).map_err(|_| invalid())?;
        if id.hyphenated().to_string() != stem {
            return Err(invalid());
        }

        Ok(Self { id, format })
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn path(&self) -> ScratchPath {
        ScratchPath(self.to_string())
    }
}

impl FromStr for ScratchFileName {
    type Err = InvalidScratchFileName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ScratchFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.id.hyphenated(), self.format.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid scratch file name: {0}")]
pub struct InvalidScratchFileName(pub String);

/// Key of an object inside the scratch store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchPath(String);

impl ScratchPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScratchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
