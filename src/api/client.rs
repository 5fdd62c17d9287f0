// HTTP client for the hosted REST API.
// Handles authentication and request/response processing.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{Result, XpostError};

const API_BASE: &str = "https://public-api.wordpress.com/wpcom/v2";

/// Authenticated client for the hosted REST API.
pub struct WpComClient {
    client: Client,
    base_url: String,
}

impl WpComClient {
    /// Create a new client with the given OAuth token.
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| XpostError::Other(e.to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("xpost-client"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(XpostError::Api)?;

        Ok(Self {
            client,
            base_url: API_BASE.to_string(),
        })
    }

    /// Create a client from the WPCOM_OAUTH_TOKEN environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("WPCOM_OAUTH_TOKEN").map_err(|_| XpostError::MissingToken)?;
        Self::new(&token)
    }

    /// Override the API base URL (local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(XpostError::Api)?;

        check_response(response).await
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(response),
        StatusCode::UNAUTHORIZED => Err(XpostError::Unauthorized),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(XpostError::NotFound(url))
        }
        status => Err(XpostError::Other(format!(
            "HTTP {}: {}",
            status,
            response.text().await.unwrap_or_default()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = WpComClient::new("token123").unwrap();
        assert_eq!(client.base_url, API_BASE);
    }

    #[test]
    fn test_base_url_override() {
        let client = WpComClient::new("token123")
            .unwrap()
            .with_base_url("http://localhost:8080/v2");
        assert_eq!(client.base_url, "http://localhost:8080/v2");
    }
}
