#![warn(
    clippy::all,
    clippy::nursery,
    // clippy::unwrap_used
)]

pub mod calendar;
pub mod cli;
pub mod config;
pub mod views;
