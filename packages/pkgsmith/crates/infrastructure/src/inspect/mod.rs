pub mod file_name;
pub mod local;
pub mod probe;
pub mod remote;
