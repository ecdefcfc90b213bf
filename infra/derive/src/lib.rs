#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! * [`homeval_error`] turns an enum into a `thiserror` error with context support.
//! * [`api_model`] / [`api_handler`] wire DTOs and Axum handlers into `OpenAPI`.
//! * [`homeval_slice`] generates the `Arc` handle for a feature slice.
//! * [`main`] bootstraps the tuned Tokio runtime (re-exported by `homeval-runtime`).
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros in doctests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the specialized Tokio runtime.
///
/// Transforms an `async fn main` into a plain `fn main` that builds a runtime from one of the
/// `homeval_runtime::RuntimeConfig` presets and blocks on the original body.
///
/// # Arguments
///
/// * `high_performance` - Server profile: larger stacks, longer keep-alive.
/// * `memory_efficient` - Half the worker threads, smaller stacks.
/// * `default` (or no argument) - Auto-detected worker count.
///
/// # Examples
///
/// ```rust,ignore
/// #[homeval_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro to define an API data transfer object.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize` and `Deserialize` unless already derived.
/// * **`OpenAPI`**: `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * **Serde Policy**: `rename_all = "snake_case"` and `deny_unknown_fields` unless overridden.
///
/// # Arguments
///
/// * `rename_all = "camelCase"` - Overrides the default rename policy.
/// * `deny_unknown_fields = false` - Accept and ignore unknown fields.
///
/// # Example
///
/// ```rust,ignore
/// #[api_model(deny_unknown_fields = false)]
/// pub struct PriceRequest {
///     pub total_sqft: f64,
///     pub location: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Accepts the usual `utoipa::path` arguments (`get`, `post`, `path = "..."`, `responses(...)`,
/// `tag = ...`) and forwards them when the consuming crate enables its `server` feature.
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> Json<HealthResponse> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: `Debug` and `thiserror::Error` unless already derived.
/// * **Context Support**: a companion `<Name>Ext` trait adding `.context(...)` to
///   `Result<T, Name>` and to `Result<T, Source>` for every variant with a source.
/// * **Conversions**: `From<Source>` for each variant holding a `source` (or `#[source]`/`#[from]`)
///   field, so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Applied to an **enum** with named-field variants only.
/// 2. Variants with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[homeval_error]
/// pub enum ArtifactError {
///     #[error("Artifact read error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<Vec<u8>, ArtifactError> {
///     std::fs::read(path).context("Reading model artifact")
/// }
/// ```
#[proc_macro_attribute]
pub fn homeval_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// Given `struct Foo { .. }` it generates `FooInner` with the declared fields, a cloneable
/// `Foo` wrapping `Arc<FooInner>` with `Deref`, and the `FeatureSlice` impl used by the
/// kernel's slice registry.
///
/// # Example
/// ```rust,ignore
/// #[homeval_derive::homeval_slice]
/// pub struct Valuation {
///     pub estimator: PriceEstimator,
/// }
///
/// let slice = Valuation::new(ValuationInner { estimator });
/// ```
#[proc_macro_attribute]
pub fn homeval_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
