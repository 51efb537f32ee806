//! Map Rendering
//!
//! Turns a URL into PNG bytes. Callers only see the [`Renderer`] and
//! [`RenderSession`] traits; the production implementation drives headless
//! Chrome over WebDriver via fantoccini. Keeping the browser behind a trait
//! lets orchestration code run against a fake in tests.

mod error;
mod webdriver;

pub use error::{RenderError, Result};
pub use webdriver::{Viewport, WebDriverRenderer};

use async_trait::async_trait;

/// Factory for render sessions.
///
/// Opening a session is the expensive part (it starts a browser); callers
/// open one per batch, render through it serially, and close it when done.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn open(&self) -> Result<Box<dyn RenderSession>>;
}

/// An exclusively-owned browser session.
#[async_trait]
pub trait RenderSession: Send {
    /// Navigate to `url` and return the rendered viewport as PNG bytes.
    async fn render(&mut self, url: &str) -> Result<Vec<u8>>;

    /// Quit the underlying browser. Must be called exactly once.
    async fn close(self: Box<Self>) -> Result<()>;
}
