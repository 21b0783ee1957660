/// Uploaded image library
pub mod library;
/// Session state and regeneration triggers
pub mod state;

pub use library::{ContentLibrary, ImportReport};
pub use state::{CardCount, Session};
