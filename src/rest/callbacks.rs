//! Callback helpers for operation results.
//!
//! Every model operation returns a `Result`. [`ResultCallbacks`] adds
//! `on_success` and `on_error` to any `Result` for code that prefers
//! registering handlers over matching:
//!
//! ```rust,ignore
//! use thickm::rest::ResultCallbacks;
//!
//! let users = User::query(&client, None)
//!     .await
//!     .on_success(|users| println!("{} users", users.len()))
//!     .on_error(|e| eprintln!("query failed: {e}"))?;
//! ```

/// Handler registration on `Result`.
///
/// Each method runs its handler by reference and returns the result
/// unchanged, so calls chain.
pub trait ResultCallbacks<T, E> {
    /// Runs `f` with the value if the result is `Ok`.
    #[must_use]
    fn on_success<F: FnOnce(&T)>(self, f: F) -> Self;

    /// Runs `f` with the error if the result is `Err`.
    #[must_use]
    fn on_error<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E> ResultCallbacks<T, E> for Result<T, E> {
    fn on_success<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Ok(value) = &self {
            f(value);
        }
        self
    }

    fn on_error<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(error) = &self {
            f(error);
        }
        self
    }
}
