mod error;
mod value;

pub use error::ValueError;
pub use value::{Value, ValueKind};

#[cfg(test)]
mod value_test;
