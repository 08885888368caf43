//! Project pages: list, detail and the create/edit form

mod detail;
mod edit;
mod list;

pub use detail::ProjectDetail;
pub use edit::EditProject;
pub use list::ProjectList;
