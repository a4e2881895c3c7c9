// ABOUTME: Decorative image fetching from external URLs for the web page
// ABOUTME: Silent skip on transport or non-2xx failure, no retry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! # Decorative Image Fetcher
//!
//! The page shows two decorative images pulled from external sources: a gym
//! equipment header icon and a motivational workout photo. They are purely
//! cosmetic, so any failure to fetch them is skipped silently and the page
//! renders without them.

use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

/// Gym equipment icon shown in the page header
pub const HEADER_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/1046/1046865.png";

/// Motivational workout photo shown under the results
pub const MOTIVATION_IMAGE_URL: &str = "https://source.unsplash.com/600x300/?workout,motivation";

/// Fetches decorative images for the presentation layer
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    /// Create a new fetcher with its own HTTP client
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch one image, returning `None` on any failure
    ///
    /// Non-success statuses and transport errors are logged at debug level
    /// and otherwise ignored; the caller renders without the image.
    pub async fn fetch(&self, url: &str) -> Option<(Bytes, Option<String>)> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Skipping decorative image {url}: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(
                "Skipping decorative image {url}: status {}",
                response.status()
            );
            return None;
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);

        match response.bytes().await {
            Ok(bytes) => Some((bytes, content_type)),
            Err(e) => {
                debug!("Skipping decorative image {url}: {e}");
                None
            }
        }
    }
}

impl Default for ImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
