//! Core domain entities representing the blog and analytics data model.
//!
//! Entities are plain data structures; persistence lives in
//! [`crate::infrastructure::persistence`].
//!
//! # Entity Types
//!
//! - [`BlogPost`] - A published post
//! - [`Day`] - Page views for one calendar date
//! - [`IpView`] - First visit of an IP address on a date
//! - [`UkData`] - One constituency of the UK election dataset

pub mod blog_post;
pub mod day;
pub mod ip_view;
pub mod uk_data;

pub use blog_post::{BlogPost, DEFAULT_AUTHOR_ID, NewBlogPost};
pub use day::{Day, DaySummary, VisitOutcome};
pub use ip_view::IpView;
pub use uk_data::UkData;
