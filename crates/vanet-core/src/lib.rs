//! `vanet-core` — foundational types for the `rust_vanet` scenario suite.
//!
//! This crate is a dependency of every other `vanet-*` crate.  It
//! intentionally has no `vanet-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`ids`]     | `FlowId`, `MoverId`, `AnchorId`                 |
//! | [`vec2`]    | `Vec2`, planar distance and heading math        |
//! | [`time`]    | `SimTime`                                       |
//! | [`rng`]     | `StreamId`, `StreamRng` (named random streams)  |
//! | [`error`]   | `VanetError`, `VanetResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{VanetError, VanetResult};
pub use ids::{AnchorId, FlowId, MoverId};
pub use rng::{StreamId, StreamRng};
pub use time::SimTime;
pub use vec2::Vec2;
