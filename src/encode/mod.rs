//! Encode session: configuration, status codes, the controller and its driver loop.

/// Encode parameters and render options.
pub mod config;
/// The owned encoder context.
pub mod controller;
/// Paced present-then-produce loop.
pub mod driver;
/// Session and result statuses.
pub mod status;
