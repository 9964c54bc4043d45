//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and order operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Export attempted on a cart with no items.
    #[error("Cart is empty")]
    EmptyCart,

    /// Stored snapshot does not describe a valid cart.
    ///
    /// Recovered internally by treating the snapshot as absent.
    #[error("Malformed cart snapshot: {0}")]
    MalformedSnapshot(String),

    /// Order form submitted without any dish.
    #[error("No dish selected")]
    NoDishSelected,

    /// Phone number does not look like a reachable number.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Delivery order without an address.
    #[error("Delivery address is required for delivery orders")]
    MissingAddress,

    /// Dish value not in the `"Name - price"` format.
    #[error("Invalid dish value: {0}")]
    InvalidDishValue(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Outbound channel refused the message.
    #[error("Channel error: {0}")]
    ChannelError(String),
}

impl From<topchef_cache::CacheError> for CommerceError {
    fn from(e: topchef_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}
