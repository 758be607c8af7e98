//! matchup_dashboard_rust - terminal dashboard for a two-team NBA matchup

pub mod config;
pub mod render;

pub use config::DashboardConfig;
pub use render::{JsonRenderer, OutputFormat, Renderer, TextRenderer};
