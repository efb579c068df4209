pub mod http;
pub mod inspect;
pub mod store;
pub mod submission;

pub use inspect::local::LocalInspector;
pub use inspect::remote::RemoteInspector;
pub use store::FsManifestStore;
pub use submission::HttpSubmissionClient;
