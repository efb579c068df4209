pub mod builder;
pub mod installer;
pub mod metadata;
pub mod validation;

pub use builder::*;
pub use installer::*;
pub use metadata::*;
pub use validation::*;
