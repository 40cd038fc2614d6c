pub mod cs;
pub mod error;

pub use cs::{dynamic, search, sort};
pub use error::{Error, Result};
