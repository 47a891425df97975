pub mod analyzer;
pub mod error;


pub use analyzer::analyze;
pub use error::{TypeError, TypeErrorKind};
