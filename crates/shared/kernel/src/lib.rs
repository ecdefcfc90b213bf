//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading plus the server-side state and system routes.
//!
//! ## Config loading
//! ```rust,no_run
//! use homeval_kernel::config::load_config;
//! use homeval_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap();
//! assert!(cfg.server.port > 0);
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use homeval_domain as domain;
