// Chat-framework plugin that uploads the file attached to a replied-to
// message to one of several public hosting services and reports the URL.
//
// The host framework owns the event loop and command dispatch; this crate
// turns one command invocation into one upload round trip and a notice.

pub mod commands;
pub mod config;
pub mod errors;
pub mod host;
pub mod security;
pub mod strings;
pub mod uploader;

pub use commands::UploaderModule;
pub use config::{load_config, validate_config, UploaderConfig};
pub use errors::{AppError, AppResult};
pub use host::{
    AttachmentKind, ChatHost, MediaAttachment, MessageRef, ReplyContent, ReplyTarget,
};
pub use strings::MessageCatalog;
pub use uploader::{BackendSpec, FileBuffer, TransportMode, UploadResult, UrlRule, BACKENDS};
