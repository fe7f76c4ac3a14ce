//! Production HTTP client implementation using reqwest.

use super::{FormPart, HttpBody, HttpClient, HttpError, HttpRequest, HttpResponse, MultipartForm};

/// Production HTTP client using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements
/// the [`HttpClient`] trait. Connection pooling, TLS and DNS are left to
/// reqwest; no request timeout is configured.
///
/// # Example
///
/// ```no_run
/// use hookcast::webhook::{ReqwestClient, HttpClient, HttpRequest};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://discord.com/api/webhooks/1/token")?;
/// let response = client.request(HttpRequest::new(http::Method::GET, url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, TLS, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a form into reqwest's encoder, preserving part order.
pub(super) fn to_reqwest_form(form: MultipartForm) -> reqwest::multipart::Form {
    form.parts
        .into_iter()
        .fold(reqwest::multipart::Form::new(), |acc, part| match part {
            FormPart::Text { name, value } => acc.text(name, value),
            FormPart::File {
                name,
                file_name,
                data,
            } => acc.part(name, reqwest::multipart::Part::bytes(data).file_name(file_name)),
        })
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        builder = match req.body {
            Some(HttpBody::Bytes(body)) => builder.body(body),
            Some(HttpBody::Multipart(form)) => builder.multipart(to_reqwest_form(form)),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        // Buffer the whole body; JSON responses may span many chunks
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
