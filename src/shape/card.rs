use serde_json::{json, Value};

use crate::models::{CardFormEntry, PlayerCard, SeasonStatistics};

use super::{integer, lookup, text, value_or_na};

/// Compact card projection of the raw player payload. `image_base_url` is
/// the asset host the player photo and team logo URLs are templated onto.
pub fn build(payload: &Value, image_base_url: &str) -> PlayerCard {
    let image_base = image_base_url.trim_end_matches('/');
    let player_id = payload.get("id").and_then(Value::as_i64).unwrap_or(0);
    let team_id = integer(payload, &["currentTeam", "id"]);

    PlayerCard {
        id: payload.get("id").cloned().unwrap_or(Value::Null),
        name: text(payload, &["name"]),
        age: integer(payload, &["bio", "age"]),
        country: text(payload, &["bio", "country"]),
        height: text(payload, &["bio", "height"]),
        preferred_foot: text(payload, &["bio", "preferredFoot"]),
        team: text(payload, &["currentTeam", "name"]),
        team_id,
        league: text(payload, &["mainLeague", "leagueName"]),
        position: text(payload, &["positionDescription", "label"]),
        market_value: value_or_na(payload, &["bio", "marketValue"]),
        player_image: format!("{}/playerimages/{}.png", image_base, player_id),
        team_logo: format!("{}/logo/teamlogo/{}.png", image_base, team_id),
        season_statistics: season_statistics(payload),
        form: form(payload),
    }
}

/// Season block assembled by scanning the titled stats list for exact
/// title matches. Counting stats default to 0, the rating to `"N/A"`.
fn season_statistics(payload: &Value) -> SeasonStatistics {
    let items = lookup(payload, &["mainLeague", "stats"]).and_then(Value::as_array);

    SeasonStatistics {
        matches: stat(items, "Matches").and_then(Value::as_i64).unwrap_or(0),
        goals: stat(items, "Goals").and_then(Value::as_i64).unwrap_or(0),
        assists: stat(items, "Assists").and_then(Value::as_i64).unwrap_or(0),
        rating: stat(items, "Rating")
            .filter(|value| !value.is_null())
            .cloned()
            .unwrap_or_else(|| json!("N/A")),
    }
}

fn stat<'a>(items: Option<&'a Vec<Value>>, title: &str) -> Option<&'a Value> {
    items?
        .iter()
        .find(|item| item.get("title").and_then(Value::as_str) == Some(title))?
        .get("value")
}

/// Every recent match, untruncated.
fn form(payload: &Value) -> Vec<CardFormEntry> {
    payload
        .get("recentMatches")
        .and_then(Value::as_array)
        .map(|matches| {
            matches
                .iter()
                .map(|game| CardFormEntry {
                    date: text(game, &["date"]),
                    opponent: text(game, &["opponent"]),
                    rating: value_or_na(game, &["rating"]),
                    home: game.get("isHome").and_then(Value::as_bool).unwrap_or(false),
                })
                .collect()
        })
        .unwrap_or_default()
}
