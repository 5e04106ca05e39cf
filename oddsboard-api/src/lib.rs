pub mod games;
pub mod http;
pub mod predictions;

use std::borrow::Cow;

use ::http::StatusCode;
use thiserror::Error;

use crate::games::GamesClient;
use crate::http::{Request, RequestBuilder, Response};
use crate::predictions::PredictionsClient;

pub use crate::games::{Game, Odd};
pub use crate::predictions::Prediction;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] crate::http::Error),
    #[error("failed to build request: {0}")]
    Request(#[from] ::http::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected status code {0}")]
    Status(StatusCode),
}

/// A client for the sports API.
///
/// Cloning a `Client` is cheap as long as the base url is `'static`.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Cow<'static, str>,
    http: http::Client,
}

impl Client {
    pub fn new<T>(base_url: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        let mut base_url = base_url.into();

        // Endpoint paths always start with a '/'.
        if base_url.ends_with('/') {
            base_url.to_mut().pop();
        }

        Self {
            base_url,
            http: http::Client::new(),
        }
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn games(&self) -> GamesClient<'_> {
        GamesClient::new(self)
    }

    pub fn predictions(&self) -> PredictionsClient<'_> {
        PredictionsClient::new(self)
    }

    /// Creates a new [`RequestBuilder`] for a request relative to the base url.
    pub(crate) fn request(&self) -> RequestBuilder {
        RequestBuilder::new(self.base_url.to_string())
    }

    /// Sends the request, rejecting all responses without a 2xx status code.
    pub(crate) async fn send(&self, request: Request) -> Result<Response> {
        log::debug!("GET {}", request.uri());

        let resp = self.http.send(request).await?;

        if !resp.is_success() {
            log::warn!("Request failed with status {}", resp.status());
            return Err(Error::Status(resp.status()));
        }

        Ok(resp)
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}
