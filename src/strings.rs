use serde::{Deserialize, Serialize};

/// User-facing message templates. `{}` marks the insertion point for the
/// URL or error detail. The texts carry HTML markup rendered by the chat
/// client; dynamic values must be escaped before formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCatalog {
    pub uploading: String,
    pub reply_to_file: String,
    pub uploaded: String,
    pub error: String,
}

impl MessageCatalog {
    pub fn english() -> Self {
        Self {
            uploading: "⚡ <b>Uploading file...</b>".to_string(),
            reply_to_file: "❌ <b>Reply to file!</b>".to_string(),
            uploaded: "❤️ <b>File uploaded!</b>\n\n🔥 <b>URL:</b> <code>{}</code>".to_string(),
            error: "❌ <b>Error while uploading: {}</b>".to_string(),
        }
    }

    pub fn russian() -> Self {
        Self {
            uploading: "⚡ <b>Загружаю файл...</b>".to_string(),
            reply_to_file: "❌ <b>Ответьте на файл!</b>".to_string(),
            uploaded: "❤️ <b>Файл загружен!</b>\n\n🔥 <b>URL:</b> <code>{}</code>".to_string(),
            error: "❌ <b>Ошибка при загрузке: {}</b>".to_string(),
        }
    }

    pub fn for_locale(locale: &str) -> Self {
        match locale {
            "ru" => Self::russian(),
            _ => Self::english(),
        }
    }

    pub fn uploaded_notice(&self, url: &str) -> String {
        self.uploaded.replace("{}", url)
    }

    pub fn error_notice(&self, detail: &str) -> String {
        self.error.replace("{}", detail)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}
