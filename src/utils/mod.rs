//! Utility functions shared across the application.
//!
//! - [`url_scheme`] - Scheme prefixing for resolved URLs

pub mod url_scheme;
