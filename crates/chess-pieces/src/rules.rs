//! Legality rule configuration.
//!
//! Two behaviours are configurable because the plain occupancy query leaves
//! them open: whether a pawn's straight advance needs empty squares, and
//! whether a capture must land on an opposing piece. The defaults keep the
//! permissive behaviour; [`LegalityRules::strict`] turns both checks on.
//!
//! Rules can be loaded from a TOML file:
//!
//! ```toml
//! pawn_advance = "require_empty"
//! captures = "opponent_only"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading legality rules.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the rules file from disk.
    #[error("failed to read rules file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The rules file is not valid TOML or has unknown values.
    #[error("failed to parse rules: {0}")]
    Parse(#[from] toml::de::Error),
    /// The rules could not be written as TOML.
    #[error("failed to serialize rules: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// How a pawn's straight, non-capturing advance treats occupied squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceRule {
    /// Advance squares are candidates regardless of occupancy.
    #[default]
    Unconditional,
    /// The destination must be empty, and a double step also needs the
    /// square it passes over to be empty.
    RequireEmpty,
}

/// Which occupied squares a piece may capture on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureRule {
    /// Any occupied square can be captured, whoever stands there.
    #[default]
    AnyOccupant,
    /// Squares the board reports as held by the mover's own color cannot be
    /// captured. Occupants of unknown color remain capturable.
    OpponentOnly,
}

/// Legality switches shared by all pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalityRules {
    pub pawn_advance: AdvanceRule,
    pub captures: CaptureRule,
}

impl LegalityRules {
    /// Rules matching over-the-board chess: blocked pawns stay put and
    /// pieces cannot take their own side.
    pub const fn strict() -> Self {
        LegalityRules {
            pawn_advance: AdvanceRule::RequireEmpty,
            captures: CaptureRule::OpponentOnly,
        }
    }

    /// Parses rules from TOML. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads rules from `path`, or the defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it is not valid rules TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "rules file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?rules, "loaded legality rules");
        Ok(rules)
    }

    /// Serializes the rules back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
