//! State management module
//!
//! This module handles the per-page form state and the page loaders

pub mod form;
pub mod page;

// Re-export commonly used state components
pub use form::{FormPhase, FormSession};
pub use page::{new_page, open_edit_page, open_list_page, EditPage};
