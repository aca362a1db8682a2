//! Wire format of the bracket service. Lists of participants and matches
//! arrive wrapped one record per object (`{"participant": {...}}`), these
//! wrappers only live here and are unwrapped when a [`Tournament`] is built.
//!
//! [`Tournament`]: crate::model::Tournament

use chrono::{DateTime, FixedOffset};
use serde::Deserializer;
use serde_derive::Deserialize;

use crate::model::{Match, Participant};

/// The service sends `null` for empty strings and lists.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[derive(Deserialize, Debug, Default)]
pub struct ApiResponse {
    #[serde(default)]
    pub tournament: Option<TournamentRecord>,
    #[serde(default)]
    pub participant: Option<Participant>,
    #[serde(default, rename = "match")]
    pub match_: Option<Match>,
    #[serde(default, deserialize_with = "nullable")]
    pub errors: Vec<String>,
}

impl ApiResponse {
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// Tournament attributes, shared by the wire record and the resolved model.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TournamentInfo {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, rename = "full_challonge_url", deserialize_with = "nullable")]
    pub full_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub state: String,
    #[serde(default, deserialize_with = "nullable")]
    pub subdomain: String,
    #[serde(default, deserialize_with = "nullable")]
    pub participants_count: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub tournament_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub game_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub progress_meter: u32,
    #[serde(default)]
    pub started_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<FixedOffset>>,
}

#[derive(Deserialize, Debug, Default)]
pub struct TournamentRecord {
    #[serde(flatten)]
    pub info: TournamentInfo,
    #[serde(default, deserialize_with = "nullable")]
    pub participants: Vec<ParticipantItem>,
    #[serde(default, deserialize_with = "nullable")]
    pub matches: Vec<MatchItem>,
}

#[derive(Deserialize, Debug)]
pub struct ParticipantItem {
    pub participant: Participant,
}

#[derive(Deserialize, Debug)]
pub struct MatchItem {
    #[serde(rename = "match")]
    pub match_: Match,
}
