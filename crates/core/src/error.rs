//! Domain, store, and service error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Coarse fault classification the boundary layer maps to a transport
/// response.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fault {
    /// User-input failure (4xx-class).
    Client,
    /// Infrastructure failure surfaced unchanged (5xx-class).
    Internal,
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, stock). Infrastructure concerns belong in [`StoreError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty field, zero quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The email is already registered to another customer.
    #[error("email already in use: {0}")]
    DuplicateEmail(String),

    /// The referenced customer does not exist.
    #[error("customer not found")]
    CustomerNotFound,

    /// One or more requested product ids did not resolve.
    #[error("invalid products: {0}")]
    InvalidProducts(String),

    /// A requested quantity exceeds the available stock.
    #[error("insufficient stock: {0}")]
    InsufficientStock(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail(email.into())
    }

    pub fn invalid_products(msg: impl Into<String>) -> Self {
        Self::InvalidProducts(msg.into())
    }

    pub fn insufficient_stock(msg: impl Into<String>) -> Self {
        Self::InsufficientStock(msg.into())
    }

    /// Every domain error is a user-input failure.
    pub fn fault(&self) -> Fault {
        Fault::Client
    }
}

/// Infrastructure failure raised by a store implementation.
///
/// The services never produce these themselves; they propagate unchanged to
/// the caller (no retries, no compensation at this layer).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend could not be reached or is in a bad state.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Any other backend failure, wrapped as-is.
    #[error("store backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn fault(&self) -> Fault {
        Fault::Internal
    }
}

/// Error surfaced by the request-handling services: a domain rejection or a
/// pass-through store failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn fault(&self) -> Fault {
        match self {
            ServiceError::Domain(e) => e.fault(),
            ServiceError::Store(e) => e.fault(),
        }
    }

    /// The domain rejection, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            ServiceError::Domain(e) => Some(e),
            ServiceError::Store(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_classify_as_client_faults() {
        let errors = [
            DomainError::validation("empty name"),
            DomainError::invalid_id("not a uuid"),
            DomainError::duplicate_email("ana@x.com"),
            DomainError::CustomerNotFound,
            DomainError::invalid_products("unknown id"),
            DomainError::insufficient_stock("requested 3, available 2"),
        ];
        for e in errors {
            assert_eq!(e.fault(), Fault::Client);
        }
    }

    #[test]
    fn store_errors_classify_as_internal_faults() {
        let err: ServiceError = StoreError::unavailable("connection refused").into();
        assert_eq!(err.fault(), Fault::Internal);
        assert!(err.as_domain().is_none());
    }

    #[test]
    fn messages_carry_the_offending_detail() {
        let e = DomainError::duplicate_email("ana@x.com");
        assert_eq!(e.to_string(), "email already in use: ana@x.com");
    }
}
