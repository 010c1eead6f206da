use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Chart variant: standard or deluxe notation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Variant {
    #[strum(serialize = "STD")]
    Std,
    #[strum(serialize = "DX")]
    Dx,
}

impl Variant {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Chart identifier (title + difficulty tier + variant)
///
/// The difficulty tier is a free-text label ("MAS", "EXP", ...) taken
/// verbatim from the master data; scores must use the same labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartKey {
    pub title: String,
    pub difficulty: String,
    pub variant: Variant,
}

/// Chart information held by a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    /// Difficulty constant (typically 1.0 to 15.0).
    pub constant: f64,
    /// Display level label, e.g. "13+".
    pub level: String,
    pub variant: Variant,
    /// Jacket artwork file name, if the master data carries one.
    pub artwork: Option<String>,
}

impl ChartMetadata {
    /// Placeholder metadata for a score that matched no catalog.
    ///
    /// The zero constant guarantees a rating of 0 downstream instead of a
    /// computation error.
    pub fn unresolved(variant: Variant) -> Self {
        Self {
            constant: 0.0,
            level: "N/A".to_string(),
            variant,
            artwork: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!("STD".parse::<Variant>().unwrap(), Variant::Std);
        assert_eq!("DX".parse::<Variant>().unwrap(), Variant::Dx);
        assert!("UTAGE".parse::<Variant>().is_err());
        assert!("dx".parse::<Variant>().is_err());
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Std.to_string(), "STD");
        assert_eq!(Variant::Dx.to_string(), "DX");
    }

    #[test]
    fn test_chart_key_equality() {
        let a = ChartKey {
            title: "Oshama Scramble!".to_string(),
            difficulty: "MAS".to_string(),
            variant: Variant::Dx,
        };
        let b = a.clone();
        let c = ChartKey {
            variant: Variant::Std,
            ..a.clone()
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_unresolved_metadata() {
        let meta = ChartMetadata::unresolved(Variant::Std);
        assert_eq!(meta.constant, 0.0);
        assert_eq!(meta.level, "N/A");
        assert!(meta.artwork.is_none());
    }
}
