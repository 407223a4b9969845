use crate::core::VideoId;
use serde::{Deserialize, Serialize};

/// Which upstream strategy produced a result.
///
/// Set exactly once when the track is built and never reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderSource {
    #[serde(rename = "yt-dlp")]
    YtDlp,
    #[serde(rename = "rapidapi")]
    Mp36,
    #[serde(rename = "youtube_explode")]
    DlInfo,
    #[serde(rename = "oembed")]
    OEmbed,
}

/// Normalized result of a successful provider attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioTrack {
    pub video_id: VideoId,
    pub title: String,
    pub author: String,
    pub duration_seconds: u64,
    pub thumbnail_url: Option<String>,
    /// Playable stream URL. Present iff this is a "full" success; a track
    /// without it is metadata-only and never cached.
    pub audio_url: Option<String>,
    pub quality: String,
    pub view_count: u64,
    pub source: ProviderSource,
    /// Set only by the metadata-only provider, explaining the missing stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl AudioTrack {
    pub fn has_stream(&self) -> bool {
        self.audio_url.is_some()
    }
}

/// Standard maxresdefault thumbnail for an id, used by providers whose
/// payload carries no thumbnail of its own.
pub fn default_thumbnail(id: &VideoId) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", id)
}
