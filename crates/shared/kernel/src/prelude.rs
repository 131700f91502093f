pub use crate::config::{ConfigError, load_config};
pub use dumps_content::{ContentError, ContentStore};
pub use dumps_domain::config::AppConfig;
pub use dumps_domain::models::{Engine, Game};

#[cfg(feature = "server")]
pub use crate::server::{AppState, AppStateError};
