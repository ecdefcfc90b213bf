use std::borrow::Cow;

/// A specialized [`ValuationError`] enum of this crate.
#[homeval_derive::homeval_error]
pub enum ValuationError {
    /// An artifact file could not be read.
    #[error("Valuation IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
    /// An artifact file is not valid JSON of the expected shape.
    #[error("Valuation decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// Artifacts parsed but are inconsistent (columns vs. coefficients, duplicates, ...).
    #[error("Invalid artifact{}: {message}", format_context(.context))]
    Artifact { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The request body or one of its fields is malformed.
    #[error("{message}")]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The requested location is not part of the vocabulary.
    #[error("Unknown location: {message}")]
    UnknownLocation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The model produced an unusable value.
    #[error("Model error{}: {message}", format_context(.context))]
    Model { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The slice is not registered in the shared state.
    #[cfg(feature = "server")]
    #[error("Valuation state error{}: {source}", format_context(.context))]
    State {
        source: homeval_kernel::server::ApiStateError,
        context: Option<Cow<'static, str>>,
    },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal valuation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ValuationError {
    pub(crate) fn invalid_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidInput { message: message.into(), context: None }
    }

    pub(crate) fn artifact(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Artifact { message: message.into(), context: None }
    }

    /// True for errors caused by the caller rather than the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::UnknownLocation { .. })
    }
}
