use reqwest::{multipart, Client};
use std::time::Duration;

use crate::errors::AppResult;

use super::backends::{BackendSpec, TransportMode};
use super::file_resolver::FileBuffer;

/// Raw outcome of one upload request. The body is returned verbatim;
/// interpreting it is the backend rule's job.
#[derive(Debug, Clone)]
pub struct UploadResult {
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

/// One-shot HTTP client for hosting-service uploads. Built per command
/// invocation; the connection is torn down when it is dropped.
pub struct HostingClient {
    client: Client,
}

impl HostingClient {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Perform the single upload request for this invocation. Transport
    /// failures (DNS, connect, TLS, timeout) propagate; there is no retry.
    pub async fn upload(&self, spec: &BackendSpec, file: &FileBuffer) -> AppResult<UploadResult> {
        log::info!(
            "Uploading {} ({} bytes) to {}",
            file.name,
            file.data.len(),
            spec.service
        );

        let response = match spec.transport {
            TransportMode::Multipart { field, extra } => {
                let form = build_form(field, extra, file);
                self.client.post(spec.endpoint).multipart(form).send().await?
            }
            TransportMode::RawPut => {
                self.client
                    .put(spec.endpoint)
                    .body(file.data.clone())
                    .send()
                    .await?
            }
        };

        let status = response.status();
        let body = response.text().await?;

        log::debug!(
            "{} responded with {} ({} byte body)",
            spec.service,
            status,
            body.len()
        );

        Ok(UploadResult {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }
}

/// Build the multipart form: the whole buffer as one file part plus the
/// descriptor's static fields.
fn build_form(field: &str, extra: &[(&str, &str)], file: &FileBuffer) -> multipart::Form {
    let part = multipart::Part::bytes(file.data.clone()).file_name(file.name.clone());

    let mut form = multipart::Form::new().part(field.to_string(), part);
    for (key, value) in extra {
        form = form.text(key.to_string(), value.to_string());
    }

    form
}
