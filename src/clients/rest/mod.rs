//! REST client used by the model layer.
//!
//! - [`RestClient`]: configuration plus a [`Transport`](crate::clients::Transport),
//!   with `get()`, `post()`, `update()` and `delete()` methods
//! - [`RestError`]: error type for REST client operations
//!
//! The client is the single dependency every model operation receives. It
//! owns the [`ThickmConfig`](crate::ThickmConfig) (base URL, default write
//! headers, update verb) and turns non-2xx responses into errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use thickm::{BaseUrl, RestClient, ThickmConfig};
//!
//! let config = ThickmConfig::builder()
//!     .base_url(BaseUrl::new("http://coolapp.com/api/v1/")?)
//!     .build()?;
//!
//! let client = RestClient::new(config)?;
//! let response = client.get("http://coolapp.com/api/v1/users", None).await?;
//! println!("Users: {}", response.body);
//! ```

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
