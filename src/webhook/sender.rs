//! Webhook client and request transport.

use std::sync::{PoisonError, RwLock};

use http::header::{CONTENT_TYPE, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::{Attachment, ExecuteData, ModifyWebhookOptions, WebhookReply};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, MultipartForm, WebhookError};

/// Multipart field carrying the JSON body when files are attached.
pub const PAYLOAD_JSON_FIELD: &str = "payload_json";

/// Connection options for a [`WebhookClient`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebhookOptions {
    /// Full webhook URL, including id and token
    pub url: String,
}

/// Display identity merged into every execute call.
///
/// Values set on the [`ExecuteData`] itself take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DefaultIdentity {
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

impl DefaultIdentity {
    /// Returns true if neither field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.username.is_none() && self.avatar_url.is_none()
    }

    /// Fills the unset identity fields of `data` from these defaults.
    #[must_use]
    pub fn apply(&self, mut data: ExecuteData) -> ExecuteData {
        if data.username.is_none() {
            data.username.clone_from(&self.username);
        }
        if data.avatar_url.is_none() {
            data.avatar_url.clone_from(&self.avatar_url);
        }
        data
    }
}

/// Client for a single webhook endpoint.
///
/// Each operation is one request/response exchange; the only state kept
/// between calls is the URL and the [`DefaultIdentity`].
///
/// # Transport
///
/// Requests without attachments carry a JSON body with
/// `Content-Type: application/json`. With attachments the request is
/// `multipart/form-data`: one part per file, named and filenamed after the
/// attachment, then a [`PAYLOAD_JSON_FIELD`] text field with the JSON body.
///
/// The response body is parsed as JSON regardless of status. An API error
/// object is returned as ordinary data; only transport failures and
/// non-JSON bodies are errors. Nothing is retried.
///
/// # Concurrency
///
/// Operations take `&self` and may run concurrently. The default identity
/// sits behind a lock: [`WebhookClient::set_username`] and
/// [`WebhookClient::set_avatar`] replace it atomically, and each
/// [`WebhookClient::execute`] reads one consistent snapshot when it starts.
///
/// # Example
///
/// ```no_run
/// use hookcast::model::ExecuteData;
/// use hookcast::webhook::{ReqwestClient, WebhookClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let url = url::Url::parse("https://discord.com/api/webhooks/123/token")?;
/// let webhook = WebhookClient::new(ReqwestClient::new(), url);
/// webhook.set_username("Release Bot");
///
/// let response = webhook.execute(ExecuteData::text("v1.2.0 shipped")).await?;
/// println!("{response}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WebhookClient<H> {
    client: H,
    url: url::Url,
    defaults: RwLock<DefaultIdentity>,
}

impl<H> WebhookClient<H> {
    /// Creates a client for the given webhook URL.
    #[must_use]
    pub fn new(client: H, url: url::Url) -> Self {
        Self {
            client,
            url,
            defaults: RwLock::new(DefaultIdentity::default()),
        }
    }

    /// Creates a client from [`WebhookOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the URL does not parse.
    pub fn from_options(client: H, options: &WebhookOptions) -> Result<Self, HttpError> {
        let url = url::Url::parse(&options.url)
            .map_err(|e| HttpError::InvalidUrl(format!("{}: {e}", options.url)))?;
        Ok(Self::new(client, url))
    }

    /// Returns the configured URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.client
    }

    /// Returns a snapshot of the default identity.
    #[must_use]
    pub fn defaults(&self) -> DefaultIdentity {
        self.defaults
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sets the default username. No I/O.
    pub fn set_username(&self, username: impl Into<String>) {
        let username = username.into();
        self.update_defaults(|d| d.username = Some(username));
    }

    /// Sets the default avatar URL. No I/O.
    pub fn set_avatar(&self, avatar_url: impl Into<String>) {
        let avatar_url = avatar_url.into();
        self.update_defaults(|d| d.avatar_url = Some(avatar_url));
    }

    fn update_defaults(&self, update: impl FnOnce(&mut DefaultIdentity)) {
        let mut defaults = self
            .defaults
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        update(&mut *defaults);
    }

    /// Builds the request for either transport mode.
    fn build_request(
        &self,
        method: http::Method,
        payload: Option<String>,
        files: &[Attachment],
    ) -> HttpRequest {
        let request = HttpRequest::new(method, self.url.clone());

        if files.is_empty() {
            let request =
                request.with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            return match payload {
                Some(json) => request.with_body(json.into_bytes()),
                None => request,
            };
        }

        let form = files
            .iter()
            .fold(MultipartForm::new(), |form, file| {
                form.file(file.name.as_str(), file.name.as_str(), file.data.clone())
            })
            .text(PAYLOAD_JSON_FIELD, payload.unwrap_or_else(|| "null".to_string()));

        request.with_multipart(form)
    }
}

impl<H: HttpClient> WebhookClient<H> {
    /// Fetches the webhook descriptor (`GET`).
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] on transport failure or a non-JSON body.
    pub async fn get(&self) -> Result<WebhookReply, WebhookError> {
        let request = self.build_request(http::Method::GET, None, &[]);
        self.send(request).await
    }

    /// Modifies the webhook (`PATCH`).
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] on serialization or transport failure, or a
    /// non-JSON body.
    pub async fn modify(
        &self,
        options: &ModifyWebhookOptions,
    ) -> Result<WebhookReply, WebhookError> {
        let payload = encode(options)?;
        let request = self.build_request(http::Method::PATCH, Some(payload), &[]);
        self.send(request).await
    }

    /// Deletes the webhook (`DELETE`).
    ///
    /// An empty response body yields `null`.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] on transport failure or a non-JSON body.
    pub async fn delete(&self) -> Result<serde_json::Value, WebhookError> {
        let request = self.build_request(http::Method::DELETE, None, &[]);
        self.send(request).await
    }

    /// Sends a message (`POST`).
    ///
    /// Unset `username`/`avatar_url` are filled from the default identity.
    /// Files on `data` switch the request to multipart.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] on serialization or transport failure, or a
    /// non-JSON body.
    pub async fn execute(&self, mut data: ExecuteData) -> Result<serde_json::Value, WebhookError> {
        let files = std::mem::take(&mut data.files);
        let merged = self.defaults().apply(data);
        let payload = encode(&merged)?;

        let request = self.build_request(http::Method::POST, Some(payload), &files);
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, WebhookError> {
        tracing::debug!(
            method = %request.method,
            host = self.url.host_str().unwrap_or_default(),
            multipart = request.multipart().is_some(),
            "Sending webhook request"
        );

        let response = self.client.request(request).await?;

        tracing::debug!(
            status = %response.status,
            bytes = response.body.len(),
            "Webhook response received"
        );

        decode(&response)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, WebhookError> {
    serde_json::to_string(body).map_err(WebhookError::Serialize)
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, WebhookError> {
    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &response.body
    };

    serde_json::from_slice(body).map_err(|source| WebhookError::Decode {
        status: response.status,
        body: response.body_text().map(ToString::to_string),
        source,
    })
}
