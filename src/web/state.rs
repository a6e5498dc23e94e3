use std::sync::Arc;

use crate::config::Config;
use crate::gateway::ContentGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ContentGateway>,
    pub config: Config,
}
