use crate::core::{AudioTrack, ProviderSource, VideoId};
use crate::providers::{Attempt, Provider};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, warn};

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);
const EXTRACT_TIMEOUT: Duration = Duration::from_secs(20);
const MAX_OUTPUT_BYTES: u64 = 10 * 1024 * 1024;

/// Local yt-dlp invocation. Most reliable path when the tool is installed:
/// no quota, no auth, and it always returns a playable stream URL.
pub struct YtDlpProvider;

impl YtDlpProvider {
    pub fn new() -> Self {
        Self
    }

    /// Fast liveness check so a missing binary fails in milliseconds
    /// instead of burning the full extraction timeout.
    async fn tool_available() -> bool {
        let mut probe = Command::new("yt-dlp");
        probe
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        matches!(timeout(PROBE_TIMEOUT, probe.status()).await, Ok(Ok(status)) if status.success())
    }

    async fn fetch_json(&self, id: &VideoId) -> Result<Value> {
        let mut child = Command::new("yt-dlp")
            .args(["-f", "bestaudio", "--dump-json", "--no-playlist"])
            .arg(id.watch_url())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .context("failed to spawn yt-dlp")?;

        let mut stdout = child.stdout.take().context("failed to capture yt-dlp stdout")?;

        // Cap the read so runaway output cannot exhaust memory; one extra
        // byte distinguishes "exactly at the cap" from "over it".
        let mut buf = Vec::new();
        let run = async {
            (&mut stdout)
                .take(MAX_OUTPUT_BYTES + 1)
                .read_to_end(&mut buf)
                .await
                .context("failed to read yt-dlp output")?;
            child.wait().await.context("failed to wait for yt-dlp")
        };

        let outcome = timeout(EXTRACT_TIMEOUT, run).await;
        let status = match outcome {
            Ok(result) => result?,
            Err(_) => {
                let _ = child.kill().await;
                anyhow::bail!("yt-dlp timed out after {}s", EXTRACT_TIMEOUT.as_secs());
            }
        };

        if buf.len() as u64 > MAX_OUTPUT_BYTES {
            anyhow::bail!("yt-dlp output exceeded {} bytes", MAX_OUTPUT_BYTES);
        }
        if !status.success() {
            anyhow::bail!("yt-dlp exited with {}", status);
        }

        let text = String::from_utf8(buf).context("yt-dlp output was not UTF-8")?;
        serde_json::from_str(text.trim()).context("failed to parse yt-dlp JSON")
    }

    fn build_track(&self, id: &VideoId, data: &Value) -> Result<AudioTrack> {
        let title = data
            .get("title")
            .and_then(Value::as_str)
            .context("yt-dlp output missing title")?
            .to_string();

        let author = data
            .get("uploader")
            .or_else(|| data.get("channel"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string();

        let abr = data.get("abr").and_then(Value::as_f64).unwrap_or(0.0);

        Ok(AudioTrack {
            video_id: id.clone(),
            title,
            author,
            duration_seconds: data.get("duration").and_then(Value::as_f64).unwrap_or(0.0) as u64,
            thumbnail_url: data
                .get("thumbnail")
                .and_then(Value::as_str)
                .map(str::to_string),
            audio_url: data.get("url").and_then(Value::as_str).map(str::to_string),
            quality: format!("{}kbps", abr.round() as u64),
            view_count: data.get("view_count").and_then(Value::as_u64).unwrap_or(0),
            source: ProviderSource::YtDlp,
            warning: None,
        })
    }
}

impl Default for YtDlpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for YtDlpProvider {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    fn source(&self) -> ProviderSource {
        ProviderSource::YtDlp
    }

    async fn attempt(&self, id: &VideoId) -> Attempt {
        if !Self::tool_available().await {
            debug!("yt-dlp not installed, skipping");
            return Attempt::Unavailable("yt-dlp not installed".to_string());
        }

        info!("Trying yt-dlp...");
        match self.fetch_json(id).await {
            Ok(data) => match self.build_track(id, &data) {
                Ok(track) => Attempt::Resolved(track),
                Err(e) => {
                    warn!("yt-dlp returned unusable metadata: {}", e);
                    Attempt::Unavailable(e.to_string())
                }
            },
            Err(e) => {
                warn!("yt-dlp failed: {}", e);
                Attempt::Unavailable(e.to_string())
            }
        }
    }
}
