use std::time::Duration;

use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tracing::debug;

use crate::error::Result;
use crate::{RenderSession, Renderer};

/// How long to let a page settle after navigation. Navigation resolves on
/// the document load event, but map tile imagery keeps arriving after it.
const DEFAULT_SETTLE: Duration = Duration::from_secs(2);

/// Browser viewport dimensions in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// [`Renderer`] backed by a WebDriver endpoint (chromedriver) running
/// headless Chrome.
pub struct WebDriverRenderer {
    webdriver_url: String,
    viewport: Viewport,
    settle: Duration,
}

impl WebDriverRenderer {
    pub fn new(webdriver_url: &str, viewport: Viewport) -> Self {
        Self {
            webdriver_url: webdriver_url.to_string(),
            viewport,
            settle: DEFAULT_SETTLE,
        }
    }

    /// Override the post-navigation settle delay
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }
}

#[async_trait]
impl Renderer for WebDriverRenderer {
    async fn open(&self) -> Result<Box<dyn RenderSession>> {
        debug!(url = %self.webdriver_url, "Starting browser session");

        let client = ClientBuilder::native()
            .capabilities(chrome_capabilities(self.viewport))
            .connect(&self.webdriver_url)
            .await?;

        client
            .set_window_size(self.viewport.width, self.viewport.height)
            .await?;

        Ok(Box::new(WebDriverSession {
            client,
            settle: self.settle,
        }))
    }
}

fn chrome_capabilities(viewport: Viewport) -> serde_json::Map<String, serde_json::Value> {
    let mut caps = serde_json::Map::new();
    caps.insert(
        "goog:chromeOptions".to_string(),
        json!({
            "args": [
                "--headless",
                format!("--window-size={},{}", viewport.width, viewport.height),
            ]
        }),
    );
    caps
}

struct WebDriverSession {
    client: Client,
    settle: Duration,
}

#[async_trait]
impl RenderSession for WebDriverSession {
    async fn render(&mut self, url: &str) -> Result<Vec<u8>> {
        self.client.goto(url).await?;
        tokio::time::sleep(self.settle).await;
        let png = self.client.screenshot().await?;
        debug!(bytes = png.len(), "Captured viewport");
        Ok(png)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}
