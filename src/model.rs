// Data shapes exchanged with the tournament API. Field names follow the
// JSON the backend speaks (camelCase placements, `type` as a lowercase tag).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a tournament was played by individuals or by teams.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TournamentType {
    Single,
    Team,
}

impl TournamentType {
    pub const ALL: [TournamentType; 2] = [TournamentType::Single, TournamentType::Team];

    pub fn as_str(self) -> &'static str {
        match self {
            TournamentType::Single => "single",
            TournamentType::Team => "team",
        }
    }
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three ranks a participant can be placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    First,
    Second,
    Third,
}

impl Rank {
    /// Ranks in the order the form asks for them.
    pub const ALL: [Rank; 3] = [Rank::First, Rank::Second, Rank::Third];

    pub fn label(self) -> &'static str {
        match self {
            Rank::First => "First",
            Rank::Second => "Second",
            Rank::Third => "Third",
        }
    }
}

/// Winners per rank. Each rank holds zero or more participant names; the
/// same name may appear on several ranks.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Placements {
    #[serde(default)]
    pub first_place: Vec<String>,
    #[serde(default)]
    pub second_place: Vec<String>,
    #[serde(default)]
    pub third_place: Vec<String>,
}

impl Placements {
    pub fn get(&self, rank: Rank) -> &[String] {
        match rank {
            Rank::First => &self.first_place,
            Rank::Second => &self.second_place,
            Rank::Third => &self.third_place,
        }
    }

    pub fn set(&mut self, rank: Rank, names: Vec<String>) {
        match rank {
            Rank::First => self.first_place = names,
            Rank::Second => self.second_place = names,
            Rank::Third => self.third_place = names,
        }
    }
}

/// A complete tournament record as submitted on create/update and as
/// returned by the detail endpoint. The server-assigned ID is not part of
/// the payload; unknown keys such as `id` are ignored when parsing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TournamentType,
    #[serde(default)]
    pub flavor: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub placements: Placements,
}

/// One row of the collection endpoint. The list view only needs a few
/// fields and the server decides how `participants` is summarised, so it
/// is kept as raw JSON.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TournamentSummary {
    pub id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub flavor: String,
    #[serde(default)]
    pub participants: Option<serde_json::Value>,
}

impl TournamentSummary {
    /// Label shown in the update/delete pickers.
    pub fn choice_label(&self) -> String {
        format!("{}: {} - {}", self.id, self.date, self.flavor)
    }

    /// Participants cell for the list table.
    pub fn participants_cell(&self) -> String {
        use serde_json::Value;
        match &self.participants {
            None | Some(Value::Null) => "N/A".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            Some(other) => other.to_string(),
        }
    }
}

/// Body returned by the create endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Created {
    #[serde(rename = "tournamentId", alias = "id")]
    pub id: i64,
}

/// Success marker for a delete, distinct from the `None` failure sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted;
