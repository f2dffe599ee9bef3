pub mod markers;
pub mod method;
pub mod registry;
pub mod type_info;
pub mod value;

pub use markers::{DataSource, FixtureMarker, MethodMarker, ProvidesData, TypeMarker};
pub use method::{MethodInfo, ParameterInfo};
pub use registry::{DeclarationRegistry, RegistryError};
pub use type_info::{TypeInfo, TypeInfoBuilder};
pub use value::ArgValue;
