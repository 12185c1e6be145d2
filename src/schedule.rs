use serde::{Deserialize, Serialize};
use serde_json::Value;

const UNKNOWN: &str = "Unknown";

pub const SCHEDULE_FETCHED: &str = "Serie A schedule fetched successfully.";
pub const SCHEDULE_EMPTY: &str = "No Serie A schedule available.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedGame {
    pub away_team: String,
    pub home_team: String,
    pub venue: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub message: String,
    pub games: Vec<NormalizedGame>,
}

/// Reshape the raw search payload into a fixed schedule schema. Missing or
/// malformed fields degrade to "Unknown" rather than failing the request.
pub fn normalize_schedule(raw: &Value) -> ScheduleResponse {
    let games = raw
        .get("sports_results")
        .and_then(|results| results.get("games"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if games.is_empty() {
        return ScheduleResponse {
            message: SCHEDULE_EMPTY.to_owned(),
            games: Vec::new(),
        };
    }

    ScheduleResponse {
        message: SCHEDULE_FETCHED.to_owned(),
        games: games.iter().map(normalize_game).collect(),
    }
}

fn normalize_game(game: &Value) -> NormalizedGame {
    // The upstream payload carries no home/away tag; entry 0 is treated as
    // the away team and entry 1 as the home team.
    let (away_team, home_team) = match game.get("teams").and_then(Value::as_array) {
        Some(teams) if teams.len() == 2 => (team_name(&teams[0]), team_name(&teams[1])),
        _ => (UNKNOWN.to_owned(), UNKNOWN.to_owned()),
    };

    NormalizedGame {
        away_team,
        home_team,
        venue: field_or_unknown(game, "venue"),
        date: field_or_unknown(game, "date"),
        time: normalize_time(game.get("time").and_then(Value::as_str)),
    }
}

fn team_name(team: &Value) -> String {
    team.get("name")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN)
        .to_owned()
}

fn field_or_unknown(game: &Value, key: &str) -> String {
    game.get(key)
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN)
        .to_owned()
}

fn normalize_time(time: Option<&str>) -> String {
    match time {
        Some(time) if time != UNKNOWN => format!("{} ET", time),
        _ => UNKNOWN.to_owned(),
    }
}
