//! Fluent construction of absolute URLs from discrete components.
//!
//! Setters on [`UrlBuilder`] only accumulate state; [`UrlBuilder::build`]
//! validates everything at once and serializes
//! `scheme://[user:pass@]host[:port][/path][?query][#fragment]`.
//!
//! ```
//! use url_builder::UrlBuilder;
//!
//! let url = UrlBuilder::new()
//!     .scheme_https()
//!     .domain("example.com")
//!     .path(["hello world"])
//!     .query("q", ["a b"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(url, "https://example.com/hello%20world?q=a+b");
//! ```

// Internal modules (not public API)
mod builder;
mod checkers;
mod error;
mod helpers;
mod parser;
mod percent_encode;
mod query_params;
mod serializer;
mod types;
mod url_components;

// Public API
pub use builder::UrlBuilder;
pub use error::{BuildError, Result};
pub use query_params::QueryParams;
pub use types::{QueryOrder, QueryPolicy};
