//! HTML template rendering handlers.

mod charts;
mod pages;
mod posts;

pub use charts::{
    dashboard_handler, regional_party_comparison_handler, student_conservative_handler,
};
pub use pages::{about_handler, home_handler};
pub use posts::{create_post_handler, new_post_form_handler};
