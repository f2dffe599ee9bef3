pub mod node;
pub mod properties;

pub use node::{NodeKind, RunState, TestNode};
pub use properties::{keys, PropertyBag};
