//! Repository trait definitions for the domain layer.
//!
//! The storage contract is a single trait, [`LinkRepository`]. Concrete
//! implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for testing.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
