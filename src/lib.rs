pub mod app;
pub mod client;
pub mod errors;
pub mod glossary;
pub mod graph;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use client::{ClientError, GlossaryClient};
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
