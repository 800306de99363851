//! Common types shared between modules

mod address;
mod error;
mod utils;

pub use address::*;
pub use error::*;
pub use utils::*;
