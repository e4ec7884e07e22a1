//! Closed wire-string vocabularies of the PikaNetwork stats API. These are
//! deliberately not shared with [`crate::jartex`]: each network maintains
//! its own value sets, even where the names overlap.

/// Gamemodes with stats tracking on PikaNetwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gamemode {
    OpPrison,
    OpFactions,
    OpSkyblock,
    ClassicSkyblock,
    Survival,
    KitPvp,
    Practice,
    SkyWars,
    LifeSteal,
    BedWars,
}

impl Gamemode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Gamemode::OpPrison => "opprison",
            Gamemode::OpFactions => "opfactions",
            Gamemode::OpSkyblock => "opskyblock",
            Gamemode::ClassicSkyblock => "classicskyblock",
            Gamemode::Survival => "survival",
            Gamemode::KitPvp => "kitpvp",
            Gamemode::Practice => "practice",
            Gamemode::SkyWars => "skywars",
            Gamemode::LifeSteal => "lifesteal",
            Gamemode::BedWars => "bedwars",
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
    BowKills,
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
            LeaderboardType::BowKills => "bow_kills",
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
