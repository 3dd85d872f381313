//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgPostRepository`] - Blog post storage
//! - [`PgViewRepository`] - Daily view counters and first-visit records
//! - [`PgUkDataRepository`] - UK election dataset

pub mod pg_post_repository;
pub mod pg_uk_data_repository;
pub mod pg_view_repository;

pub use pg_post_repository::PgPostRepository;
pub use pg_uk_data_repository::PgUkDataRepository;
pub use pg_view_repository::PgViewRepository;
