pub mod entities;
pub mod helpers;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod value_objects;

mod generator;

#[cfg(test)]
pub(crate) mod test_support;

pub use entities::*;
pub use generator::RecipeGenerator;
pub use ports::*;
pub use value_objects::*;
