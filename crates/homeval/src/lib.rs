//! Facade crate for the home valuation service.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `homeval` with the `server` feature.
//! - Call `homeval::init` once at startup and register the returned slices in the API state.

pub use homeval_domain as domain;
use homeval_domain::config::ApiConfig;
pub use homeval_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use homeval_kernel::server::router::system_router;
        pub use homeval_valuation::server::router as valuation_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use homeval_valuation as valuation;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "valuation",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails; the service must not start serving.
pub async fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Valuation
    slices.push(features::valuation::init(&config.valuation).await?);

    Ok(slices)
}
