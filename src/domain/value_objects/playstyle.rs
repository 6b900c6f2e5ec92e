//! Playstyle value object - the strategic style a combination is built for

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Playing style used to key equipment suggestions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum Playstyle {
    /// Close-to-the-table topspin attack
    Attacker,
    /// Mid/far distance chopping and blocking
    Defender,
    /// Balanced attack and defence
    #[serde(alias = "allround")]
    AllRound,
    /// Counter-hitting from a short block
    Counter,
    /// Equal forehand and backhand attack
    TwoWinged,
    /// Anything else; also the catalog fallback
    #[default]
    Other,
}

impl Playstyle {
    pub const ALL: [Playstyle; 6] = [
        Playstyle::Attacker,
        Playstyle::Defender,
        Playstyle::AllRound,
        Playstyle::Counter,
        Playstyle::TwoWinged,
        Playstyle::Other,
    ];

    /// Parse free text, falling back to `Other` for anything unrecognized.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or(Playstyle::Other)
    }

    /// Stable identifier used in config files and CLI arguments
    pub fn key(&self) -> &'static str {
        match self {
            Playstyle::Attacker => "attacker",
            Playstyle::Defender => "defender",
            Playstyle::AllRound => "all-round",
            Playstyle::Counter => "counter",
            Playstyle::TwoWinged => "two-winged",
            Playstyle::Other => "other",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Playstyle::Attacker => "Attacker",
            Playstyle::Defender => "Defender",
            Playstyle::AllRound => "All-round",
            Playstyle::Counter => "Counter",
            Playstyle::TwoWinged => "Two-Winged",
            Playstyle::Other => "Other",
        }
    }
}

impl std::fmt::Display for Playstyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when text does not name a known playstyle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown playstyle '{0}'")]
pub struct UnknownPlaystyle(pub String);

impl FromStr for Playstyle {
    type Err = UnknownPlaystyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        // Japanese labels come from documents written by the first release.
        match normalized.as_str() {
            "attacker" | "attack" | "offensive" | "攻撃型" => Ok(Playstyle::Attacker),
            "defender" | "defense" | "defence" | "defensive" | "chopper" | "守備型" => {
                Ok(Playstyle::Defender)
            }
            "allround" | "allrounder" | "オールラウンド" => Ok(Playstyle::AllRound),
            "counter" | "counterattacker" | "blocker" => Ok(Playstyle::Counter),
            "twowinged" | "twowings" => Ok(Playstyle::TwoWinged),
            "other" | "custom" | "その他" => Ok(Playstyle::Other),
            _ => Err(UnknownPlaystyle(s.to_string())),
        }
    }
}
