mod context;
pub mod registry;
mod types;


pub use context::TypeContext;
pub use registry::{BinaryOpSignature, TypeDef, TypeRegistry};
pub use types::StaticType;
