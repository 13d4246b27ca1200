use crate::errors::AppResult;
use crate::host::{AttachmentKind, ChatHost, MessageRef, ReplyContent};
use crate::security::InputValidator;

/// An in-memory file staged for upload. Created once per successful
/// resolution and dropped when the request completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBuffer {
    pub name: String,
    pub data: Vec<u8>,
}

/// Resolve the replied-to message into an uploadable file.
///
/// Returns `Ok(None)` when the invoking message is not a reply; the caller
/// surfaces the "reply to a file" notice. No network request is made in
/// that case.
pub async fn resolve(host: &dyn ChatHost, message: &MessageRef) -> AppResult<Option<FileBuffer>> {
    let Some(reply) = host.reply_target(message).await? else {
        log::debug!(
            "Message {} in chat {} has no reply target",
            message.message_id,
            message.chat_id
        );
        return Ok(None);
    };

    let file = match reply.content {
        ReplyContent::Media(attachment) => {
            let data = host.download_media(&attachment).await?;
            let name = match attachment.kind {
                AttachmentKind::Document => attachment
                    .file_name
                    .as_deref()
                    .map(InputValidator::sanitize_filename)
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| format!("file_{}", attachment.id)),
                AttachmentKind::Photo => format!("file_{}.jpg", attachment.id),
            };

            log::info!(
                "Resolved attachment {} of message {} as {} ({} bytes)",
                attachment.id,
                reply.message_id,
                name,
                data.len()
            );
            FileBuffer { name, data }
        }
        ReplyContent::Text(text) => {
            log::info!(
                "Resolved text of message {} as text.txt ({} bytes)",
                reply.message_id,
                text.len()
            );
            FileBuffer {
                name: "text.txt".to_string(),
                data: text.into_bytes(),
            }
        }
    };

    Ok(Some(file))
}
