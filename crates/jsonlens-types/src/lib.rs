pub mod error;
pub mod flags;
pub mod schema;
mod util;

pub use error::{Error, Result};
pub use flags::ViewFlags;
pub use schema::*;
pub use util::*;
