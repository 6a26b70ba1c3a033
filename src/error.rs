use thiserror::Error;

/// Failure modes of the spectral computations.
///
/// Every condition is detected before any division takes place, so callers
/// never see NaN or infinite fields. There are no transient failure modes;
/// whether to skip a malformed wave condition or abort the whole batch is
/// the caller's call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A parameter or axis is outside its documented domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A normalization divisor came out zero or non-finite, e.g. a frequency
    /// axis that does not bracket the spectral peak.
    #[error("numeric degeneracy in {context}: {reason}")]
    NumericDegeneracy {
        context: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
