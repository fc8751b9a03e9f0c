pub mod app;
pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;

pub use app::{build_service, serve};
pub use config::Settings;
pub use routes::create_router;
pub use state::ApiState;
