//! Business logic services for the application layer.

pub mod id_allocator;
pub mod listing_service;
pub mod registration_service;
pub mod resolution_service;

pub use id_allocator::IdAllocator;
pub use listing_service::ListingService;
pub use registration_service::RegistrationService;
pub use resolution_service::ResolutionService;
