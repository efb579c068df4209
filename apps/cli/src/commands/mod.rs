pub mod create;
pub mod schema;
pub mod validate;
