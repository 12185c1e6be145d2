mod client;
mod rest;
mod schedule;

pub use client::{SerpClient, SerpConfig, SerpError};
pub use rest::start_server;
pub use schedule::{normalize_schedule, NormalizedGame, ScheduleResponse};
