use crate::error::{BindError, CallbackError};

/// Result of reading or writing a bound property
pub type BindResult<T> = Result<T, BindError>;

/// Result of invoking a late-bound model method
pub type CallbackResult<T> = Result<T, CallbackError>;
