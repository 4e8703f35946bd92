pub mod app;
pub mod chores;
pub mod config;
pub mod cues;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use tracker::Tracker;
