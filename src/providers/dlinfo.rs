use crate::core::track::default_thumbnail;
use crate::core::{AudioTrack, ProviderSource, VideoId};
use crate::providers::{Attempt, Provider};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const ENDPOINT: &str = "https://youtube-video-download-info.p.rapidapi.com/dl";
const API_HOST: &str = "youtube-video-download-info.p.rapidapi.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct DlInfoResponse {
    status: Option<String>,
    link: Option<String>,
    title: Option<String>,
    author: Option<String>,
    duration: Option<f64>,
    quality: Option<String>,
}

/// Second keyed RapidAPI service, same shared key as youtube-mp36.
/// Attempted only when the cheaper options came up empty.
pub struct DlInfoProvider {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl DlInfoProvider {
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, api_key }
    }

    async fn fetch(&self, id: &VideoId, key: &str) -> Result<DlInfoResponse> {
        let response = self
            .client
            .get(ENDPOINT)
            .query(&[("id", id.as_str())])
            .header("X-RapidAPI-Key", key)
            .header("X-RapidAPI-Host", API_HOST)
            .send()
            .await
            .context("request to youtube-video-download-info failed")?;

        response
            .json::<DlInfoResponse>()
            .await
            .context("youtube-video-download-info returned a malformed payload")
    }
}

#[async_trait]
impl Provider for DlInfoProvider {
    fn name(&self) -> &'static str {
        "youtube_explode"
    }

    fn source(&self) -> ProviderSource {
        ProviderSource::DlInfo
    }

    async fn attempt(&self, id: &VideoId) -> Attempt {
        let Some(key) = self.api_key.as_deref() else {
            debug!("RapidAPI key not configured");
            return Attempt::Unavailable("RapidAPI key not configured".to_string());
        };

        info!("Trying YouTube Explode API...");
        let data = match self.fetch(id, key).await {
            Ok(data) => data,
            Err(e) => {
                warn!("YouTube Explode API failed: {}", e);
                return Attempt::Unavailable(e.to_string());
            }
        };

        let link = match (data.status.as_deref(), data.link) {
            (Some("ok"), Some(link)) if !link.is_empty() => link,
            _ => {
                warn!("YouTube Explode API response was not ok");
                return Attempt::Unavailable(
                    "youtube-video-download-info response was not ok".to_string(),
                );
            }
        };

        Attempt::Resolved(AudioTrack {
            video_id: id.clone(),
            title: data.title.unwrap_or_default(),
            author: data.author.unwrap_or_else(|| "Unknown".to_string()),
            duration_seconds: data.duration.unwrap_or(0.0) as u64,
            thumbnail_url: Some(default_thumbnail(id)),
            audio_url: Some(link),
            quality: data.quality.unwrap_or_else(|| "128kbps".to_string()),
            view_count: 0,
            source: ProviderSource::DlInfo,
            warning: None,
        })
    }
}
