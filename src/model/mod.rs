//! Domain model: the color palette, trip records, and the profile session.

pub mod auth;
pub mod palette;
pub mod trips;
