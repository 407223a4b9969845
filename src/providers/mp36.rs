use crate::core::track::default_thumbnail;
use crate::core::{AudioTrack, ProviderSource, VideoId};
use crate::providers::{Attempt, Provider};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const ENDPOINT: &str = "https://youtube-mp36.p.rapidapi.com/dl";
const API_HOST: &str = "youtube-mp36.p.rapidapi.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct Mp36Response {
    status: Option<String>,
    link: Option<String>,
    title: Option<String>,
    author: Option<String>,
    duration: Option<f64>,
}

/// RapidAPI youtube-mp36 service. Keyed, finite free quota, so it is only
/// attempted after the local tool.
pub struct Mp36Provider {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl Mp36Provider {
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, api_key }
    }

    async fn fetch(&self, id: &VideoId, key: &str) -> Result<Mp36Response> {
        let response = self
            .client
            .get(ENDPOINT)
            .query(&[("id", id.as_str())])
            .header("X-RapidAPI-Key", key)
            .header("X-RapidAPI-Host", API_HOST)
            .send()
            .await
            .context("request to youtube-mp36 failed")?;

        response
            .json::<Mp36Response>()
            .await
            .context("youtube-mp36 returned a malformed payload")
    }
}

#[async_trait]
impl Provider for Mp36Provider {
    fn name(&self) -> &'static str {
        "rapidapi"
    }

    fn source(&self) -> ProviderSource {
        ProviderSource::Mp36
    }

    async fn attempt(&self, id: &VideoId) -> Attempt {
        // Fail fast when unconfigured: no point burning a network call.
        let Some(key) = self.api_key.as_deref() else {
            debug!("RapidAPI key not configured");
            return Attempt::Unavailable("RapidAPI key not configured".to_string());
        };

        info!("Trying RapidAPI...");
        let data = match self.fetch(id, key).await {
            Ok(data) => data,
            Err(e) => {
                warn!("RapidAPI failed: {}", e);
                return Attempt::Unavailable(e.to_string());
            }
        };

        // A usable response must carry both the ok marker and a link.
        let link = match (data.status.as_deref(), data.link) {
            (Some("ok"), Some(link)) if !link.is_empty() => link,
            _ => {
                warn!("RapidAPI response was not ok");
                return Attempt::Unavailable("youtube-mp36 response was not ok".to_string());
            }
        };

        Attempt::Resolved(AudioTrack {
            video_id: id.clone(),
            title: data.title.unwrap_or_default(),
            author: data.author.unwrap_or_else(|| "Unknown".to_string()),
            duration_seconds: data.duration.unwrap_or(0.0) as u64,
            thumbnail_url: Some(default_thumbnail(id)),
            audio_url: Some(link),
            quality: "128kbps".to_string(),
            view_count: 0,
            source: ProviderSource::Mp36,
            warning: None,
        })
    }
}
