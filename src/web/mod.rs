pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod middleware;
pub mod session;
pub mod state;
pub mod templates;
pub mod views;

pub use state::AppState;
