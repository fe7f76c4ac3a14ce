//! Webhook layer for sending HTTP requests to the webhook endpoint.
//!
//! This module provides types and traits for:
//! - Building HTTP requests with JSON or multipart bodies ([`HttpRequest`], [`MultipartForm`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Webhook operations: get, modify, delete, execute ([`WebhookClient`])

mod client;
mod error;
mod http;
mod sender;

#[cfg(test)]
mod test_fixtures;

pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use self::http::{FormPart, HttpBody, HttpClient, HttpRequest, HttpResponse, MultipartForm};
pub use sender::{DefaultIdentity, PAYLOAD_JSON_FIELD, WebhookClient, WebhookOptions};
