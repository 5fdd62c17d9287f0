// REST API endpoint functions.
// Provides the typed cross-post suggestion fetch and the trait seam that
// lets callers substitute a mock API in tests.

use crate::error::Result;

use super::client::WpComClient;
use super::types::Suggestion;

/// Fetches cross-post suggestions for a hostname.
///
/// `SuggestionCache` is generic over this trait so the network layer can be
/// replaced wholesale in tests.
pub trait XpostsApi {
    fn fetch_xposts(&self, hostname: &str) -> impl Future<Output = Result<Vec<Suggestion>>> + Send;
}

/// Path of the xposts endpoint for a hostname.
pub(crate) fn xposts_endpoint(hostname: &str) -> String {
    format!("/sites/{}/xposts", hostname)
}

impl XpostsApi for WpComClient {
    /// Get the sites available for cross-posting from the given site.
    async fn fetch_xposts(&self, hostname: &str) -> Result<Vec<Suggestion>> {
        let params = [("decode_html", "true")];
        let response = self
            .get_with_params(&xposts_endpoint(hostname), &params)
            .await?;
        let suggestions: Vec<Suggestion> = response.json().await?;
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xposts_endpoint_path() {
        assert_eq!(
            xposts_endpoint("example.wordpress.com"),
            "/sites/example.wordpress.com/xposts"
        );
    }
}
