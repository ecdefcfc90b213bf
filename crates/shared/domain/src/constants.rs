/// `OpenAPI` tag for health and diagnostics endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the location listing and price estimation endpoints.
pub const VALUATION_TAG: &str = "Valuation";

/// Environment variable prefix for configuration overrides (`HOMEVAL__SERVER__PORT`).
pub const ENV_PREFIX: &str = "HOMEVAL";
/// Base name of the configuration file looked up when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";
