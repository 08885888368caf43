//! Page components for OpsDeck Dashboard

mod layout;
mod login;
mod overview;
mod projects;
mod resources;
mod shared;

pub use layout::{Layout, Sidebar};
pub use login::Login;
pub use overview::Overview;
pub use projects::{EditProject, ProjectDetail, ProjectList};
pub use resources::CloudResources;
