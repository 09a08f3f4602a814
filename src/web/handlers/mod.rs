//! HTML template rendering handlers.

mod dashboard;
mod welcome;

pub use dashboard::{DashboardTemplate, dashboard_handler};
pub use welcome::{WelcomeTemplate, welcome_handler};
