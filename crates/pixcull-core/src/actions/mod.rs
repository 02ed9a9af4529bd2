//! Destructive filesystem actions: delete and relocate.

pub mod delete;
pub mod relocate;

pub use delete::delete_images;
pub use relocate::{move_file, Relocator};
