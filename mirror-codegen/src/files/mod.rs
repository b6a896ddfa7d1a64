mod component;
mod model;

pub use component::{ComponentArtifact, ComponentContext, ComponentFile, stimulus_value_type};
pub use model::{DEFAULT_SCOPE, ModelFile, associations, validations};
