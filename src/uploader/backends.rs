use crate::errors::{AppError, AppResult};

/// How the file travels to the hosting service.
#[derive(Debug, Clone, Copy)]
pub enum TransportMode {
    /// multipart/form-data POST; the file part is named `field`, `extra`
    /// holds static string fields sent alongside it.
    Multipart {
        field: &'static str,
        extra: &'static [(&'static str, &'static str)],
    },
    /// HTTP PUT with the raw bytes as the entire request body.
    RawPut,
}

/// How the final URL is recovered from an ok response body.
#[derive(Debug, Clone, Copy)]
pub enum UrlRule {
    /// The trimmed response body is the URL.
    Verbatim,
    /// Parse the body as JSON and read the string at `pointer`
    /// (RFC 6901), prepending `prefix` when the service returns a bare id.
    JsonPointer {
        pointer: &'static str,
        prefix: Option<&'static str>,
    },
    /// Take the first line containing `marker`; the URL is its last
    /// whitespace-separated token.
    LineScan { marker: &'static str },
}

/// Static descriptor for one hosting service.
#[derive(Debug, Clone, Copy)]
pub struct BackendSpec {
    pub command: &'static str,
    pub service: &'static str,
    pub endpoint: &'static str,
    pub transport: TransportMode,
    pub url_rule: UrlRule,
}

pub const BACKENDS: &[BackendSpec] = &[
    BackendSpec {
        command: "catbox",
        service: "catbox.moe",
        endpoint: "https://catbox.moe/user/api.php",
        transport: TransportMode::Multipart {
            field: "fileToUpload",
            extra: &[("reqtype", "fileupload")],
        },
        url_rule: UrlRule::Verbatim,
    },
    BackendSpec {
        command: "envs",
        service: "envs.sh",
        endpoint: "https://envs.sh",
        transport: TransportMode::Multipart {
            field: "file",
            extra: &[],
        },
        url_rule: UrlRule::Verbatim,
    },
    BackendSpec {
        command: "kappa",
        service: "kappa.lol",
        endpoint: "https://kappa.lol/api/upload",
        transport: TransportMode::Multipart {
            field: "file",
            extra: &[],
        },
        url_rule: UrlRule::JsonPointer {
            pointer: "/id",
            prefix: Some("https://kappa.lol/"),
        },
    },
    BackendSpec {
        command: "oxo",
        service: "0x0.st",
        endpoint: "https://0x0.st",
        transport: TransportMode::Multipart {
            field: "file",
            extra: &[("secret", "true")],
        },
        url_rule: UrlRule::Verbatim,
    },
    BackendSpec {
        command: "x0",
        service: "x0.at",
        endpoint: "https://x0.at",
        transport: TransportMode::Multipart {
            field: "file",
            extra: &[],
        },
        url_rule: UrlRule::Verbatim,
    },
    BackendSpec {
        command: "tmpfiles",
        service: "tmpfiles.org",
        endpoint: "https://tmpfiles.org/api/v1/upload",
        transport: TransportMode::Multipart {
            field: "file",
            extra: &[],
        },
        url_rule: UrlRule::JsonPointer {
            pointer: "/data/url",
            prefix: None,
        },
    },
    BackendSpec {
        command: "pomf",
        service: "pomf.lain.la",
        endpoint: "https://pomf.lain.la/upload.php",
        transport: TransportMode::Multipart {
            field: "files[]",
            extra: &[],
        },
        url_rule: UrlRule::JsonPointer {
            pointer: "/files/0/url",
            prefix: None,
        },
    },
    BackendSpec {
        command: "bash",
        service: "bashupload.com",
        endpoint: "https://bashupload.com",
        transport: TransportMode::RawPut,
        url_rule: UrlRule::LineScan { marker: "wget" },
    },
];

pub fn find_backend(command: &str) -> Option<&'static BackendSpec> {
    BACKENDS.iter().find(|spec| spec.command == command)
}

pub fn find_backend_in<'a>(backends: &'a [BackendSpec], command: &str) -> Option<&'a BackendSpec> {
    backends.iter().find(|spec| spec.command == command)
}

/// Recover the hosted-file URL from an ok response body. Applied only when
/// the dispatcher reported a 2xx status.
pub fn extract_url(spec: &BackendSpec, body: &str) -> AppResult<String> {
    match spec.url_rule {
        UrlRule::Verbatim => {
            let url = body.trim();
            if url.is_empty() {
                return Err(AppError::url_not_found(spec.service, "empty response body"));
            }
            Ok(url.to_string())
        }
        UrlRule::JsonPointer { pointer, prefix } => {
            let value: serde_json::Value = serde_json::from_str(body)?;
            let field = value
                .pointer(pointer)
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    log::debug!(
                        "{} response JSON has no string at {}: {}",
                        spec.service,
                        pointer,
                        body
                    );
                    AppError::url_not_found(
                        spec.service,
                        &format!("missing `{}` in response JSON", pointer),
                    )
                })?;

            Ok(match prefix {
                Some(prefix) => format!("{}{}", prefix, field),
                None => field.to_string(),
            })
        }
        UrlRule::LineScan { marker } => body
            .lines()
            .find(|line| line.contains(marker))
            .and_then(|line| line.split_whitespace().last())
            .map(str::to_string)
            .ok_or_else(|| AppError::url_not_found(spec.service, "Could not find URL")),
    }
}
