use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

/// Handle to the message that invoked a command. The host owns the real
/// message object; this carries just enough to address answers back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    pub chat_id: i64,
    pub message_id: i64,
}

/// The kind of media attached to the replied-to message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Document,
    Photo,
}

/// Metadata for a media attachment; the host resolves it to bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAttachment {
    pub id: i64,
    pub kind: AttachmentKind,
    pub file_name: Option<String>,
}

/// What the replied-to message carries, resolved once so the rest of the
/// pipeline never touches the host's concrete message shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyContent {
    Media(MediaAttachment),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTarget {
    pub message_id: i64,
    pub content: ReplyContent,
}

/// The capabilities this plugin consumes from the chat framework.
#[async_trait]
pub trait ChatHost: Send + Sync {
    /// Look up the message the invoking message replies to, if any.
    async fn reply_target(&self, message: &MessageRef) -> AppResult<Option<ReplyTarget>>;

    /// Download the full binary content of an attachment into memory.
    async fn download_media(&self, attachment: &MediaAttachment) -> AppResult<Vec<u8>>;

    /// Deliver a user-facing status message for this invocation.
    async fn answer(&self, message: &MessageRef, text: &str) -> AppResult<()>;
}
