//! Kernel utilities shared by the catalog feature and the server app.
//! Keep this crate lightweight: configuration loading, application state and the
//! operational endpoints, nothing catalog-specific.
//!
//! ## Config loading
//! ```rust,ignore
//! use dumps_kernel::config::load_config;
//! use dumps_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("server")).unwrap();
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use dumps_content as content;
pub use dumps_domain as domain;
