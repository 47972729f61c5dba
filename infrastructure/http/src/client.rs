use std::time::Duration;

use reqwest::{Client, Url};

use business::domain::errors::RemoteError;

/// Shared HTTP client configuration for the storefront API.
pub struct StorefrontClient {
    pub client: Client,
    pub base_url: Url,
}

impl StorefrontClient {
    /// Builds a client whose requests fail once `timeout` elapses.
    ///
    /// # Errors
    /// Returns error if the TLS backend or system configuration cannot be loaded
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Builds `{base_url}/api/{segments...}`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::transport(format!("invalid base url: {}", self.base_url)))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> StorefrontClient {
        StorefrontClient::new(Url::parse(base).unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn should_prefix_api_segment() {
        let url = client("http://localhost:8000")
            .endpoint(&["cart", "add-to-cart"])
            .unwrap();

        assert_eq!(url.as_str(), "http://localhost:8000/api/cart/add-to-cart");
    }

    #[test]
    fn should_tolerate_trailing_slash_in_base() {
        let url = client("https://shop.example.com/")
            .endpoint(&["cart", "delete-all", "u1"])
            .unwrap();

        assert_eq!(url.as_str(), "https://shop.example.com/api/cart/delete-all/u1");
    }

    #[test]
    fn should_keep_base_path_prefix() {
        let url = client("https://example.com/store")
            .endpoint(&["categories", "all-categories"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://example.com/store/api/categories/all-categories"
        );
    }

    #[test]
    fn should_encode_path_segments() {
        let url = client("http://localhost:8000")
            .endpoint(&["cart", "delete-item", "user/1", "p 2"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/cart/delete-item/user%2F1/p%202"
        );
    }
}
