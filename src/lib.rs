//! Async client for the public stats APIs of the PikaNetwork and
//! JartexNetwork Minecraft server networks: leaderboards, player profiles,
//! recaps, guilds and live player counts.
//!
//! The two networks expose the same kind of API but with independent wire
//! vocabularies (gamemodes, intervals, modes, stat types), so each gets its
//! own client and its own enum tables — see [`pika`] and [`jartex`].
//!
//! Every request goes through one shared dispatcher that transparently
//! retries while the server answers with its textual rate-limit sentinel.

pub mod error;
pub mod jartex;
pub mod models;
pub mod pika;

mod queue;
mod validate;

pub use error::PikaApiError;
pub use jartex::JartexNetwork;
pub use models::Count;
pub use pika::PikaNetwork;
