//! Download of the documentation page.
//!
//! One GET, no retry. Connection failures, timeouts and non-2xx statuses all
//! surface as [`AppError::Network`](crate::error::AppError::Network).

use crate::error::Result;
use crate::utils::truncate_for_log;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Request settings for [`fetch_page`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Overall request timeout. `None` leaves the client default in place.
    pub timeout: Option<Duration>,
}

/// Fetch `url` and return the response body as text.
#[instrument(level = "info", skip(opts))]
pub async fn fetch_page(url: &str, opts: &FetchOptions) -> Result<String> {
    let mut builder = Client::builder().user_agent(opts.user_agent.as_str());
    if let Some(timeout) = opts.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    let response = client.get(url).send().await?.error_for_status()?;
    let status = response.status();
    let body = response.text().await?;

    info!(%status, bytes = body.len(), "Downloaded webpage");
    debug!(preview = %truncate_for_log(&body, 200), "Response body");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn opts() -> FetchOptions {
        FetchOptions {
            user_agent: "as-name-map-test/1.0".to_string(),
            timeout: Some(Duration::from_secs(5)),
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/isd-as/"))
            .and(header("user-agent", "as-name-map-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/isd-as/", mock_server.uri());
        let body = fetch_page(&url, &opts()).await.unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_http_error_status_is_network_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let err = fetch_page(&mock_server.uri(), &opts()).await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        // Port 9 (discard) on localhost is not expected to be listening.
        let err = fetch_page("http://127.0.0.1:9/", &opts()).await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }
}
