//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; PostgreSQL
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`PostRepository`] - Blog posts
//! - [`ViewRepository`] - Daily views and first-visit records
//! - [`UkDataRepository`] - UK election dataset
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod post_repository;
pub mod uk_data_repository;
pub mod view_repository;

pub use post_repository::PostRepository;
pub use uk_data_repository::UkDataRepository;
pub use view_repository::ViewRepository;

#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use uk_data_repository::MockUkDataRepository;
#[cfg(test)]
pub use view_repository::MockViewRepository;
