//! Garment size tags.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unknown size tag.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown size: {0}. Valid sizes: S, M, G, XG")]
pub struct ParseSizeError(String);

/// A garment size tag.
///
/// The catalog uses the Latin American size scale (G = grande).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    /// Small.
    S,
    /// Medium.
    M,
    /// Large.
    G,
    /// Extra large.
    #[serde(rename = "XG")]
    Xg,
}

impl Size {
    /// All sizes, in display order.
    pub const ALL: [Self; 4] = [Self::S, Self::M, Self::G, Self::Xg];

    /// Get the wire/display form of the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::G => "G",
            Self::Xg => "XG",
        }
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "G" => Ok(Self::G),
            "XG" => Ok(Self::Xg),
            other => Err(ParseSizeError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_round_trip() {
        for size in Size::ALL {
            let parsed: Size = size.as_str().parse().unwrap();
            assert_eq!(parsed, size);
        }
    }

    #[test]
    fn test_serde_uses_wire_form() {
        assert_eq!(serde_json::to_string(&Size::Xg).unwrap(), "\"XG\"");
        let sizes: Vec<Size> = serde_json::from_str(r#"["S", "G", "XG"]"#).unwrap();
        assert_eq!(sizes, vec![Size::S, Size::G, Size::Xg]);
    }

    #[test]
    fn test_unknown_size_is_rejected() {
        assert!("XL".parse::<Size>().is_err());
    }
}
