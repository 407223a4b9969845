use crate::core::{AudioTrack, ProviderSource, VideoId};
use async_trait::async_trait;

pub mod dlinfo;
pub mod mp36;
pub mod oembed;
pub mod ytdlp;

pub use dlinfo::DlInfoProvider;
pub use mp36::Mp36Provider;
pub use oembed::OEmbedProvider;
pub use ytdlp::YtDlpProvider;

/// Outcome of one provider attempt.
///
/// `Unavailable` covers everything from "not configured" to a timeout or a
/// malformed upstream payload; providers absorb their own errors and the
/// reason string is only used for diagnostics.
#[derive(Debug)]
pub enum Attempt {
    Resolved(AudioTrack),
    Unavailable(String),
}

/// One upstream strategy for turning a video id into playable audio.
///
/// Attempts are idempotent from the pipeline's point of view: no provider
/// mutates shared state, and a failed call may be freely repeated.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short name for logging and diagnostics.
    fn name(&self) -> &'static str;

    fn source(&self) -> ProviderSource;

    /// Try to resolve `id`. Must complete within the provider's own bound;
    /// errors never escape as panics or `Err`, only as `Unavailable`.
    async fn attempt(&self, id: &VideoId) -> Attempt;
}
