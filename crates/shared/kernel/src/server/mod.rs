//! Server-side building blocks shared by every slice: the API state, CORS policy and system routes.

mod cors;
mod health;
pub mod router;
mod state;

pub use cors::cors_layer;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateErrorExt, ApiStateInner};
