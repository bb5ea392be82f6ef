/// Errors raised while building the ripple effect.
///
/// Only construction can fail: once a pool exists, pointer samples and frame
/// updates are infallible.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RippleError {
    #[error("invalid ripple configuration: `{field}` {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: String,
    },
}

impl RippleError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending configuration field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { field, .. } => field,
        }
    }
}
