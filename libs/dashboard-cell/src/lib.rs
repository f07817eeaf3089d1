// Dashboard Cell - greeting and navigation between the health sections
pub mod dashboard;
pub mod section;

pub use dashboard::Dashboard;
pub use section::Section;
