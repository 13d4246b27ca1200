use std::sync::Arc;
use std::time::Duration;

use crate::config::UploaderConfig;
use crate::errors::{AppError, AppResult};
use crate::host::{ChatHost, MessageRef};
use crate::security::InputValidator;
use crate::strings::MessageCatalog;
use crate::uploader::backends::{self, BackendSpec, BACKENDS};
use crate::uploader::file_resolver;
use crate::uploader::hosting_client::HostingClient;

/// The plugin object the host registers commands against. One command per
/// hosting service; each invocation is stateless and self-contained.
pub struct UploaderModule {
    host: Arc<dyn ChatHost>,
    catalog: MessageCatalog,
    config: UploaderConfig,
    backends: &'static [BackendSpec],
}

impl UploaderModule {
    pub fn new(host: Arc<dyn ChatHost>) -> Self {
        Self::with_config(host, UploaderConfig::default())
    }

    pub fn with_config(host: Arc<dyn ChatHost>, config: UploaderConfig) -> Self {
        let catalog = MessageCatalog::for_locale(&config.locale);
        Self {
            host,
            catalog,
            config,
            backends: BACKENDS,
        }
    }

    /// Replace the backend table; lets tests point commands at local servers.
    pub fn with_backends(mut self, backends: &'static [BackendSpec]) -> Self {
        self.backends = backends;
        self
    }

    /// Command names for host-side registration.
    pub fn commands(&self) -> Vec<&'static str> {
        self.backends.iter().map(|spec| spec.command).collect()
    }

    /// Entry point the host dispatches a command invocation to.
    ///
    /// Upload and parse failures are reported to the chat and swallowed;
    /// the returned error is only ever an unknown command name (so the host
    /// can fall through to other plugins) or a failure of the host's own
    /// `answer` channel.
    pub async fn handle_command(&self, command: &str, message: &MessageRef) -> AppResult<()> {
        let spec = backends::find_backend_in(self.backends, command)
            .ok_or_else(|| AppError::unknown_command(command))?;

        self.host.answer(message, &self.catalog.uploading).await?;

        match self.run_upload(spec, message).await {
            Ok(Some(url)) => {
                log::info!("{} upload finished: {}", spec.service, url);
                let notice = self
                    .catalog
                    .uploaded_notice(&InputValidator::escape_html(&url));
                self.host.answer(message, &notice).await
            }
            Ok(None) => {
                self.host
                    .answer(message, &self.catalog.reply_to_file)
                    .await
            }
            Err(error) => self.report_error(spec, message, error).await,
        }
    }

    /// Resolve the reply into a buffer and perform the single upload
    /// request. `Ok(None)` means the invoking message was not a reply.
    async fn run_upload(
        &self,
        spec: &BackendSpec,
        message: &MessageRef,
    ) -> AppResult<Option<String>> {
        let Some(file) = file_resolver::resolve(self.host.as_ref(), message).await? else {
            return Ok(None);
        };

        let timeout = Duration::from_secs(self.config.request_timeout_secs);
        let client = HostingClient::new(timeout)?;
        let result = client.upload(spec, &file).await?;

        if !result.ok {
            return Err(AppError::backend(spec.service, result.status));
        }

        let url = backends::extract_url(spec, &result.body)?;
        if InputValidator::validate_public_url(&url).is_err() {
            log::warn!(
                "{} returned ok but the extracted value is not a URL: {}",
                spec.service,
                url
            );
            return Err(AppError::url_not_found(
                spec.service,
                "response is not a URL",
            ));
        }

        Ok(Some(url))
    }

    /// Map a failure onto the user-facing error notice. The numeric status
    /// code stands alone for backend failures; everything else shows the
    /// escaped error text.
    async fn report_error(
        &self,
        spec: &BackendSpec,
        message: &MessageRef,
        error: AppError,
    ) -> AppResult<()> {
        let detail = match &error {
            AppError::Backend { status, .. } => {
                log::warn!("{} upload rejected: {}", spec.service, error);
                status.to_string()
            }
            _ if error.is_parse_error() => {
                log::warn!("{} upload unparseable: {}", spec.service, error);
                InputValidator::escape_html(&error.to_string())
            }
            _ => {
                log::error!("{} upload failed: {}", spec.service, error);
                InputValidator::escape_html(&error.to_string())
            }
        };

        let notice = self.catalog.error_notice(&detail);
        self.host.answer(message, &notice).await
    }
}
