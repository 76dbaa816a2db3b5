use serde::Serialize;
use serde_json::Value;

/// Curated player profile: identity, market value, honours, career and
/// recent form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: Value,
    pub name: String,
    pub position: String,
    pub age: i64,
    pub country: String,
    pub height: String,
    pub preferred_foot: String,
    pub team: String,
    /// Upstream value passed through untyped; `"N/A"` when no entry is
    /// flagged current.
    pub market_value: Value,
    pub injured: bool,
    pub injury_detail: String,
    pub trophies: Vec<TrophyCount>,
    pub career: Vec<CareerEntry>,
    pub form: Vec<FormEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophyCount {
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerEntry {
    pub team: String,
    pub from: String,
    pub to: String,
    pub appearances: i64,
    pub goals: i64,
}

/// One of the last few matches, as shown in the profile form strip.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    pub opponent: String,
    pub rating: Value,
    pub minutes: i64,
}

/// Compact player card for list views: bio, current club and a season
/// statistics block.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    pub id: Value,
    pub name: String,
    pub age: i64,
    pub country: String,
    pub height: String,
    pub preferred_foot: String,
    pub team: String,
    pub team_id: i64,
    pub league: String,
    pub position: String,
    pub market_value: Value,
    pub player_image: String,
    pub team_logo: String,
    pub season_statistics: SeasonStatistics,
    pub form: Vec<CardFormEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStatistics {
    pub matches: i64,
    pub goals: i64,
    pub assists: i64,
    pub rating: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFormEntry {
    pub date: String,
    pub opponent: String,
    pub rating: Value,
    pub home: bool,
}
