//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::id_allocator::IdAllocator`] - Collision-free identifier allocation
//! - [`services::registration_service::RegistrationService`] - Idempotent URL registration
//! - [`services::resolution_service::ResolutionService`] - Identifier resolution with click tracking
//! - [`services::listing_service::ListingService`] - Paginated record listing

pub mod services;
