use serde_json::{json, Value};

use crate::models::{CareerEntry, FormEntry, PlayerProfile, TrophyCount};

use super::{integer, lookup, text, value_or_na};

/// Most-recent matches kept in the form list.
const FORM_LIMIT: usize = 5;

/// Curated profile projection of the raw player payload.
pub fn build(payload: &Value) -> PlayerProfile {
    PlayerProfile {
        id: payload.get("id").cloned().unwrap_or(Value::Null),
        name: text(payload, &["name"]),
        position: text(payload, &["positionDescription", "label"]),
        age: integer(payload, &["bio", "age"]),
        country: text(payload, &["bio", "country"]),
        height: text(payload, &["bio", "height"]),
        preferred_foot: text(payload, &["bio", "preferredFoot"]),
        team: text(payload, &["currentTeam", "name"]),
        market_value: current_market_value(payload),
        injured: payload.get("injury").is_some_and(Value::is_object),
        injury_detail: text(payload, &["injury", "description"]),
        trophies: trophies(payload),
        career: career(payload),
        form: form(payload),
    }
}

/// The `value` of the market-value entry flagged current; `"N/A"` when no
/// entry carries the flag.
fn current_market_value(payload: &Value) -> Value {
    payload
        .get("marketValues")
        .and_then(Value::as_array)
        .and_then(|entries| {
            entries
                .iter()
                .find(|entry| entry.get("isCurrent").and_then(Value::as_bool) == Some(true))
        })
        .and_then(|entry| entry.get("value"))
        .filter(|value| !value.is_null())
        .cloned()
        .unwrap_or_else(|| json!("N/A"))
}

fn trophies(payload: &Value) -> Vec<TrophyCount> {
    payload
        .get("trophies")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .map(|trophy| TrophyCount {
                    name: text(trophy, &["name"]),
                    count: integer(trophy, &["count"]),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn career(payload: &Value) -> Vec<CareerEntry> {
    lookup(payload, &["careerHistory", "entries"])
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| CareerEntry {
                    team: text(entry, &["team"]),
                    from: text(entry, &["from"]),
                    to: text(entry, &["to"]),
                    appearances: integer(entry, &["appearances"]),
                    goals: integer(entry, &["goals"]),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// First `FORM_LIMIT` recent matches in upstream order.
fn form(payload: &Value) -> Vec<FormEntry> {
    payload
        .get("recentMatches")
        .and_then(Value::as_array)
        .map(|matches| {
            matches
                .iter()
                .take(FORM_LIMIT)
                .map(|game| FormEntry {
                    opponent: text(game, &["opponent"]),
                    rating: value_or_na(game, &["rating"]),
                    minutes: integer(game, &["minutesPlayed"]),
                })
                .collect()
        })
        .unwrap_or_default()
}
