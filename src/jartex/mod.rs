//! Client for the JartexNetwork stats API.

pub mod enums;
pub mod options;

pub use enums::{Gamemode, Interval, LeaderboardType, Mode};
pub use options::{LeaderboardOptions, ProfileLeaderboardOptions};

use reqwest::Client;
use serde_json::Value;

use crate::error::PikaApiError;
use crate::models::Count;
use crate::queue::queue;
use crate::validate::Violations;

const BASE_URL: &str = "https://stats.jartexnetwork.com/api";
const COUNT_URL: &str = "https://api.craftigames.net/count/play.jartexnetwork.com";

const DEFAULT_LIMIT: u32 = 15;
const DEFAULT_OFFSET: u32 = 0;

/// Client for `stats.jartexnetwork.com`.
///
/// Cheap to clone; all methods take `&self` and can run concurrently.
#[derive(Debug, Clone)]
pub struct JartexNetwork {
    http: Client,
    base_url: String,
    count_url: String,
}

impl Default for JartexNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl JartexNetwork {
    pub fn new() -> Self {
        Self::with_base_urls(BASE_URL, COUNT_URL)
    }

    /// Point the client at different hosts. Mostly useful for tests and
    /// mirrors; [`new`](Self::new) wires up the production endpoints.
    pub fn with_base_urls(base_url: impl Into<String>, count_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            count_url: count_url.into(),
        }
    }

    /// All-time totals across every leaderboard of a gamemode.
    pub async fn get_total_leaderboard(&self, gamemode: Gamemode) -> Result<Value, PikaApiError> {
        let url = format!("{}/leaderboards/total?type={}", self.base_url, gamemode);
        queue(&self.http, &url).await
    }

    /// Leaderboard of one stat within a gamemode.
    pub async fn get_leaderboard(&self, options: LeaderboardOptions) -> Result<Value, PikaApiError> {
        let interval = options.interval.unwrap_or(Interval::Weekly);
        let mode = options.mode.unwrap_or(Mode::AllModes);
        let limit = options.limit.unwrap_or(DEFAULT_LIMIT);
        let offset = options.offset.unwrap_or(DEFAULT_OFFSET);

        let mut violations = Violations::new();
        violations.min("limit", limit, 1);
        violations.finish()?;

        let url = format!(
            "{}/leaderboards?type={}&stat={}&interval={}&mode={}&limit={}&offset={}",
            self.base_url, options.gamemode, options.leaderboard_type, interval, mode, limit, offset,
        );
        queue(&self.http, &url).await
    }

    /// Profile of a player by username.
    pub async fn get_profile(&self, username: &str) -> Result<Value, PikaApiError> {
        let mut violations = Violations::new();
        violations.username("username", username);
        violations.finish()?;

        let url = format!("{}/profile/{}", self.base_url, username);
        queue(&self.http, &url).await
    }

    /// One player's standing on the leaderboards of a gamemode.
    pub async fn get_profile_leaderboard(
        &self,
        options: ProfileLeaderboardOptions,
    ) -> Result<Value, PikaApiError> {
        let interval = options.interval.unwrap_or(Interval::Weekly);
        let mode = options.mode.unwrap_or(Mode::AllModes);
        let limit = options.limit.unwrap_or(DEFAULT_LIMIT);

        let mut violations = Violations::new();
        violations.username("username", &options.username);
        violations.min("limit", limit, 1);
        violations.finish()?;

        let url = format!(
            "{}/profile/{}/leaderboard?type={}&interval={}&mode={}&limit={}",
            self.base_url, options.username, options.gamemode, interval, mode, limit,
        );
        queue(&self.http, &url).await
    }

    /// A game recap by its UUID.
    pub async fn get_recap(&self, id: &str) -> Result<Value, PikaApiError> {
        let mut violations = Violations::new();
        violations.uuid("id", id);
        violations.finish()?;

        let url = format!("{}/recaps/{}", self.base_url, id);
        queue(&self.http, &url).await
    }

    /// Top factions of the OpFactions gamemode.
    pub async fn get_factions_top(&self) -> Result<Value, PikaApiError> {
        let url = format!("{}/factionstop?type=opfactions", self.base_url);
        queue(&self.http, &url).await
    }

    /// Live network information (IP, player count, discord online count).
    /// Served from a different host than the stats endpoints.
    pub async fn get_count(&self) -> Result<Count, PikaApiError> {
        let value = queue(&self.http, &self.count_url).await?;
        Ok(Count::from_value(value))
    }

    /// Guild information by guild name.
    ///
    /// The name only has to be non-empty and is placed in the URL path
    /// verbatim; characters that need percent-encoding are the caller's
    /// responsibility.
    pub async fn get_guild(&self, name: &str) -> Result<Value, PikaApiError> {
        let mut violations = Violations::new();
        violations.non_empty("name", name);
        violations.finish()?;

        let url = format!("{}/clans/{}", self.base_url, name);
        queue(&self.http, &url).await
    }
}
