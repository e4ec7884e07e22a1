use super::enums::{Gamemode, Interval, LeaderboardType, Mode};

/// Options for [`JartexNetwork::get_leaderboard`](super::JartexNetwork::get_leaderboard).
///
/// Unset optional fields fall back to limit 15, interval
/// [`Interval::Weekly`], mode [`Mode::AllModes`] and offset 0 before
/// validation runs, so leaving them out can never fail validation.
#[derive(Debug, Clone)]
pub struct LeaderboardOptions {
    pub gamemode: Gamemode,
    pub leaderboard_type: LeaderboardType,
    pub interval: Option<Interval>,
    pub mode: Option<Mode>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl LeaderboardOptions {
    pub fn new(gamemode: Gamemode, leaderboard_type: LeaderboardType) -> Self {
        Self {
            gamemode,
            leaderboard_type,
            interval: None,
            mode: None,
            limit: None,
            offset: None,
        }
    }
}

/// Options for [`JartexNetwork::get_profile_leaderboard`](super::JartexNetwork::get_profile_leaderboard).
/// Same defaulting rules as [`LeaderboardOptions`], minus the offset.
#[derive(Debug, Clone)]
pub struct ProfileLeaderboardOptions {
    pub username: String,
    pub gamemode: Gamemode,
    pub interval: Option<Interval>,
    pub mode: Option<Mode>,
    pub limit: Option<u32>,
}

impl ProfileLeaderboardOptions {
    pub fn new(username: impl Into<String>, gamemode: Gamemode) -> Self {
        Self {
            username: username.into(),
            gamemode,
            interval: None,
            mode: None,
            limit: None,
        }
    }
}
