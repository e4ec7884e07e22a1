//! Closed wire-string vocabularies of the JartexNetwork stats API. Kept
//! separate from [`crate::pika`]: the networks overlap in names but not in
//! accepted values.

/// Gamemodes with stats tracking on JartexNetwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gamemode {
    OpPrison,
    OpFactions,
    OpSkyblock,
    Prison,
    Survival,
    SkyWars,
    BedWars,
    KitPvp,
    Lifesteal,
}

impl Gamemode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Gamemode::OpPrison => "opprison",
            Gamemode::OpFactions => "opfactions",
            Gamemode::OpSkyblock => "opskyblock",
            Gamemode::Prison => "prison",
            Gamemode::Survival => "survival",
            Gamemode::SkyWars => "skywars",
            Gamemode::BedWars => "bedwars",
            Gamemode::KitPvp => "kitpvp",
            Gamemode::Lifesteal => "lifesteal",
        }
    }
}

/// Stat columns a leaderboard can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderboardType {
    Kills,
    Deaths,
    Wins,
    Losses,
    FinalKills,
    FinalDeaths,
    BedsDestroyed,
    GamesPlayed,
    HighestWinStreak,
    Playtime,
}

impl LeaderboardType {
    pub const fn as_str(self) -> &'static str {
        match self {
            LeaderboardType::Kills => "kills",
            LeaderboardType::Deaths => "deaths",
            LeaderboardType::Wins => "wins",
            LeaderboardType::Losses => "losses",
            LeaderboardType::FinalKills => "final_kills",
            LeaderboardType::FinalDeaths => "final_deaths",
            LeaderboardType::BedsDestroyed => "beds_destroyed",
            LeaderboardType::GamesPlayed => "games_played",
            LeaderboardType::HighestWinStreak => "highest_win_streak",
            LeaderboardType::Playtime => "playtime",
        }
    }
}

/// Time window a leaderboard is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Weekly,
    Monthly,
    Total,
}

impl Interval {
    pub const fn as_str(self) -> &'static str {
        match self {
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
            Interval::Total => "total",
        }
    }
}

/// Team-size variant of a gamemode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    AllModes,
    Solo,
    Doubles,
    Triples,
    Quad,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::AllModes => "ALL_MODES",
            Mode::Solo => "SOLO",
            Mode::Doubles => "DOUBLES",
            Mode::Triples => "TRIPLES",
            Mode::Quad => "QUAD",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}

display_as_str!(Gamemode, LeaderboardType, Interval, Mode);
