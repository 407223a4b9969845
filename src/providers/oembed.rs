use crate::core::{AudioTrack, ProviderSource, VideoId};
use crate::providers::{Attempt, Provider};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

const ENDPOINT: &str = "https://www.youtube.com/oembed";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const STREAM_WARNING: &str =
    "Audio URL not available - info only. Please configure RapidAPI key or install yt-dlp.";

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: String,
    author_name: Option<String>,
    thumbnail_url: Option<String>,
}

/// Public oEmbed endpoint. Needs no auth and almost always answers, but it
/// never yields a stream URL; it exists so the pipeline can report title and
/// thumbnail even when every real provider is down.
pub struct OEmbedProvider {
    client: reqwest::Client,
}

impl OEmbedProvider {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    async fn fetch(&self, id: &VideoId) -> Result<OEmbedResponse> {
        let url = url::Url::parse_with_params(
            ENDPOINT,
            &[("url", id.watch_url().as_str()), ("format", "json")],
        )
        .context("failed to build oEmbed URL")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("request to oEmbed failed")?;

        if !response.status().is_success() {
            anyhow::bail!("oEmbed returned HTTP {}", response.status());
        }

        response
            .json::<OEmbedResponse>()
            .await
            .context("oEmbed returned a malformed payload")
    }
}

impl Default for OEmbedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for OEmbedProvider {
    fn name(&self) -> &'static str {
        "oembed"
    }

    fn source(&self) -> ProviderSource {
        ProviderSource::OEmbed
    }

    async fn attempt(&self, id: &VideoId) -> Attempt {
        info!("Trying oEmbed (info only)...");
        match self.fetch(id).await {
            Ok(data) => Attempt::Resolved(AudioTrack {
                video_id: id.clone(),
                title: data.title,
                author: data.author_name.unwrap_or_else(|| "Unknown".to_string()),
                duration_seconds: 0,
                thumbnail_url: data.thumbnail_url,
                audio_url: None,
                quality: "N/A".to_string(),
                view_count: 0,
                source: ProviderSource::OEmbed,
                warning: Some(STREAM_WARNING.to_string()),
            }),
            Err(e) => {
                warn!("oEmbed failed: {}", e);
                Attempt::Unavailable(e.to_string())
            }
        }
    }
}
