//! Core bill-splitting model: parsing, validation, calculation and rendering

mod bill;
mod error;
mod parse;
mod summary;

pub use bill::*;
pub use error::*;
pub use parse::*;
pub use summary::*;
