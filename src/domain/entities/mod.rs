//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL shortening service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`ShortUrl`] - A stored identifier-to-URL mapping with its click counter
//! - [`NewShortUrl`] - The insert payload for a freshly registered mapping
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
