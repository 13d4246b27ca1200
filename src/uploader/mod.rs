// Upload pipeline - file resolution, transport, and backend descriptors
//
// Each command invocation resolves at most one file and performs at most
// one HTTP request; nothing here is shared across invocations.

pub mod backends;
pub mod file_resolver;
pub mod hosting_client;

pub use backends::{find_backend, BackendSpec, TransportMode, UrlRule, BACKENDS};
pub use file_resolver::FileBuffer;
pub use hosting_client::{HostingClient, UploadResult};
