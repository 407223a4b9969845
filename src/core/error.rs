use serde::Serialize;
use thiserror::Error;

/// One provider's reason for producing nothing, kept for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderFailure {
    pub provider: &'static str,
    pub reason: String,
}

/// Guidance surfaced when no provider could help.
pub const REMEDIATION_HINT: &str =
    "Install yt-dlp (https://github.com/yt-dlp/yt-dlp/releases) or set RAPIDAPI_KEY to a valid key";

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The input string carried no recognizable video id. Caller error,
    /// not worth retrying.
    #[error("invalid YouTube URL or video id: {0:?}")]
    InvalidInput(String),

    /// Every configured provider came up empty.
    #[error("all providers failed ({}): {hint}", format_failures(.failures))]
    AllProvidersFailed {
        failures: Vec<ProviderFailure>,
        hint: String,
    },
}

fn format_failures(failures: &[ProviderFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.provider, f.reason))
        .collect::<Vec<_>>()
        .join("; ")
}
