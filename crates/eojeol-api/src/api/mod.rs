//! API module

mod extract;
mod handlers;
mod routes;
mod state;

pub use extract::ApiJson;
pub use handlers::{get_health, post_analyze, post_batch_analyze};
pub use routes::{create_router, run_server};
pub use state::AppState;
