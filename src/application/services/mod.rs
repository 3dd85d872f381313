//! Business logic services for the application layer.

pub mod chart_service;
pub mod post_service;
pub mod view_service;

pub use chart_service::ChartService;
pub use post_service::PostService;
pub use view_service::ViewService;
