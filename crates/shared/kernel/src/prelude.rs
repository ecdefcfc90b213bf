pub use crate::config::{ConfigError, load_config};
pub use homeval_domain::config::ApiConfig;
pub use homeval_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError};
