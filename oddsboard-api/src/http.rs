use crate::Result;

use http::{header::ACCEPT, StatusCode};
use serde::de::DeserializeOwned;

use thiserror::Error;

/// An error from the underlying transport.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    #[from]
    error: hyper::Error,
    #[cfg(target_family = "wasm")]
    #[from]
    error: reqwasm::Error,
}

#[derive(Clone, Debug, Default)]
pub struct Client {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    inner: unix::InnerClient,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerClient,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn send(&self, request: Request) -> Result<Response> {
        self.inner.send(request).await
    }
}

/// A `GET` request accepting a json response.
#[derive(Clone, Debug)]
pub struct Request {
    uri: String,
    headers: Vec<(&'static str, String)>,
}

impl Request {
    #[inline]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the value of the first header with the given `key`.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct RequestBuilder {
    inner: Request,
}

impl RequestBuilder {
    /// Creates a new `RequestBuilder` with `uri` as the prefix for all paths.
    pub fn new(uri: String) -> Self {
        let inner = Request {
            uri,
            headers: vec![(ACCEPT.as_str(), String::from("application/json"))],
        };

        Self { inner }
    }

    pub fn uri(mut self, uri: &str) -> Self {
        self.inner.uri.push_str(uri);
        self
    }

    pub fn build(self) -> Request {
        self.inner
    }
}

#[derive(Debug)]
pub struct Response {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    inner: unix::InnerResponse,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerResponse,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Returns `true` if the response contains a 2xx status code.
    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }

    pub async fn json<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.inner.json().await
    }
}

#[cfg(any(target_family = "unix", target_family = "windows"))]
mod unix {
    use super::{Error, Request, Response};
    use crate::Result;

    use http::{Method, StatusCode};
    use hyper::{body, client::HttpConnector, Body};
    use hyper_tls::HttpsConnector;
    use serde::de::DeserializeOwned;

    #[derive(Clone, Debug)]
    pub struct InnerClient {
        inner: hyper::Client<HttpsConnector<HttpConnector>>,
    }

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response> {
            let req = hyper::Request::<Body>::try_from(request)?;

            let resp = self.inner.request(req).await.map_err(Error::from)?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    impl Default for InnerClient {
        fn default() -> Self {
            Self {
                inner: hyper::Client::builder().build(HttpsConnector::new()),
            }
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(hyper::Response<Body>);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            self.0.status()
        }

        pub async fn json<T>(self) -> Result<T>
        where
            T: DeserializeOwned,
        {
            let bytes = body::to_bytes(self.0.into_body())
                .await
                .map_err(Error::from)?;

            Ok(serde_json::from_slice(&bytes)?)
        }
    }

    impl TryFrom<Request> for hyper::Request<Body> {
        type Error = http::Error;

        fn try_from(request: Request) -> std::result::Result<Self, Self::Error> {
            let mut builder = hyper::Request::builder()
                .uri(request.uri)
                .method(Method::GET);

            for (key, value) in request.headers {
                builder = builder.header(key, value);
            }

            builder.body(Body::empty())
        }
    }
}

#[cfg(target_family = "wasm")]
mod wasm {
    use super::{Error, Request, Response};
    use crate::Result;

    use http::StatusCode;
    use serde::de::DeserializeOwned;

    #[derive(Copy, Clone, Debug, Default)]
    pub struct InnerClient;

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response> {
            let mut req = reqwasm::http::Request::new(&request.uri)
                .method(reqwasm::http::Method::GET);

            for (key, value) in &request.headers {
                req = req.header(key, value);
            }

            let resp = req.send().await.map_err(Error::from)?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(reqwasm::http::Response);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }

        pub async fn json<T>(self) -> Result<T>
        where
            T: DeserializeOwned,
        {
            Ok(self.0.json().await.map_err(Error::from)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RequestBuilder;

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::new(String::from("http://localhost"))
            .uri("/sports/games")
            .build();

        assert_eq!(req.uri(), "http://localhost/sports/games");
        assert_eq!(req.header("accept"), Some("application/json"));
        assert_eq!(req.header("Accept"), Some("application/json"));
        assert_eq!(req.header("content-type"), None);
    }
}
