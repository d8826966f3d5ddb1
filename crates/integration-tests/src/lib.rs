//! Integration tests for Mercadito.
//!
//! Each test spawns the real storefront app on an ephemeral port and
//! drives it over HTTP with a cookie-carrying client, so session carts
//! behave exactly as they do for a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mercadito-integration-tests
//! ```

use mercadito_storefront::config::StorefrontConfig;
use mercadito_storefront::state::AppState;
use reqwest::Client;

/// A running storefront plus a client with its own cookie jar.
pub struct TestApp {
    pub base_url: String,
    pub client: Client,
}

impl TestApp {
    /// Spawn the storefront with the seed catalog.
    ///
    /// # Panics
    ///
    /// Panics when the test server cannot be started.
    pub async fn spawn() -> Self {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().expect("valid address"),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            store_name: "Mercadito".to_string(),
        };
        let state = AppState::new(config);
        let app = mercadito_storefront::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: format!("http://{addr}"),
            client,
        }
    }

    /// GET a path and return the response.
    ///
    /// # Panics
    ///
    /// Panics when the request fails at the transport level.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("GET request failed")
    }

    /// POST a form and return the response.
    ///
    /// # Panics
    ///
    /// Panics when the request fails at the transport level.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.base_url))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }
}

/// Pull the armed hide token out of a dropdown fragment, if any.
#[must_use]
pub fn hide_token(fragment: &str) -> Option<u64> {
    let marker = "\"token\": ";
    let start = fragment.find(marker)? + marker.len();
    let digits: String = fragment
        .get(start..)?
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Find the listing id wired into the buy control that follows the given
/// product name in a page or fragment.
#[must_use]
pub fn listing_id_after(html: &str, name: &str) -> Option<String> {
    let from = html.find(name)?;
    let marker = "{\"listing_id\": \"";
    let rest = html.get(from..)?;
    let start = rest.find(marker)? + marker.len();
    let tail = rest.get(start..)?;
    let end = tail.find('"')?;
    tail.get(..end).map(str::to_owned)
}

/// Count product cards in a page by their title markup.
#[must_use]
pub fn card_count(html: &str) -> usize {
    html.matches("card-title").count()
}
