// Output shaping: named mappings from the raw upstream payload to the
// response body. All field access is defensive; a payload that does not
// match the expected structure degrades to defaults instead of failing.

mod card;
mod profile;

use std::str::FromStr;

use serde_json::{json, Value};
use thiserror::Error;

/// Which projection of the upstream payload the service emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileMode {
    /// Upstream JSON unmodified.
    Raw,
    /// Curated profile: identity, market value, honours, career, form.
    #[default]
    Profile,
    /// Compact card: bio, club, asset URLs, season statistics block.
    Card,
}

#[derive(Debug, Error)]
#[error("unknown profile mode `{0}`, expected raw, profile, or card")]
pub struct UnknownMode(String);

impl FromStr for ProfileMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Self::Raw),
            "profile" => Ok(Self::Profile),
            "card" => Ok(Self::Card),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Apply the configured mapping to a raw upstream payload.
pub fn shape(mode: ProfileMode, payload: &Value, image_base_url: &str) -> Value {
    match mode {
        ProfileMode::Raw => payload.clone(),
        ProfileMode::Profile => {
            serde_json::to_value(profile::build(payload)).unwrap_or(Value::Null)
        }
        ProfileMode::Card => {
            serde_json::to_value(card::build(payload, image_base_url)).unwrap_or(Value::Null)
        }
    }
}

/// Walk `path` through nested objects; `None` as soon as a step is missing.
fn lookup<'a>(payload: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(payload, |value, key| value.get(*key))
}

fn text(payload: &Value, path: &[&str]) -> String {
    lookup(payload, path)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn integer(payload: &Value, path: &[&str]) -> i64 {
    lookup(payload, path).and_then(Value::as_i64).unwrap_or(0)
}

/// Pass an upstream value through untyped, with `"N/A"` standing in for a
/// missing or null field.
fn value_or_na(payload: &Value, path: &[&str]) -> Value {
    lookup(payload, path)
        .filter(|value| !value.is_null())
        .cloned()
        .unwrap_or_else(|| json!("N/A"))
}
