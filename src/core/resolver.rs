use crate::config::Config;
use crate::core::{AudioTrack, ProviderFailure, ResolveError, TrackCache, VideoId};
use crate::core::error::REMEDIATION_HINT;
use crate::providers::{
    Attempt, DlInfoProvider, Mp36Provider, OEmbedProvider, Provider, YtDlpProvider,
};
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

/// Per-provider outcome of a diagnostic probe.
#[derive(Debug, Serialize)]
pub struct ProbeOutcome {
    pub provider: &'static str,
    pub attempted: bool,
    pub succeeded: bool,
    pub has_stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Operator-facing health report: every provider exercised once,
/// regardless of cache state or pipeline ordering.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub video_id: VideoId,
    pub probes: Vec<ProbeOutcome>,
    pub recommendation: String,
}

/// Ordered-fallback resolution pipeline over the configured providers.
pub struct Resolver {
    providers: Vec<Box<dyn Provider>>,
    cache: TrackCache,
}

impl Resolver {
    /// Wire up the standard provider set in priority order: the local tool
    /// first (no rate limit, most reliable when present), the two keyed
    /// services next (finite quota), oEmbed last (never has a stream).
    pub fn new(config: &Config) -> Self {
        let key = config.api_key().map(str::to_string);
        let providers: Vec<Box<dyn Provider>> = vec![
            Box::new(YtDlpProvider::new()),
            Box::new(Mp36Provider::new(key.clone())),
            Box::new(DlInfoProvider::new(key)),
            Box::new(OEmbedProvider::new()),
        ];

        Self::with_providers(providers, TrackCache::with_ttl(config.cache_ttl()))
    }

    /// Custom provider set and cache, primarily for tests.
    pub fn with_providers(providers: Vec<Box<dyn Provider>>, cache: TrackCache) -> Self {
        Self { providers, cache }
    }

    pub fn cache(&self) -> &TrackCache {
        &self.cache
    }

    /// Main entry point: raw URL or bare id in, resolved track out.
    pub async fn resolve(&self, raw: &str) -> Result<AudioTrack, ResolveError> {
        let id = VideoId::extract(raw)
            .ok_or_else(|| ResolveError::InvalidInput(raw.to_string()))?;
        self.resolve_id(&id).await
    }

    /// Typed inner pipeline: cache lookup, then providers strictly in
    /// priority order until the first stream-capable success.
    pub async fn resolve_id(&self, id: &VideoId) -> Result<AudioTrack, ResolveError> {
        info!("Processing: {}", id);

        if let Some(track) = self.cache.get(id) {
            info!("Cache hit for {}", id);
            return Ok(track);
        }

        let mut failures = Vec::new();
        let mut info_only: Option<AudioTrack> = None;

        for provider in &self.providers {
            match provider.attempt(id).await {
                Attempt::Resolved(track) if track.has_stream() => {
                    info!("Success via {}: {}", provider.name(), track.title);
                    self.cache.put(id.clone(), track.clone());
                    return Ok(track);
                }
                Attempt::Resolved(track) => {
                    // Metadata without a stream is only good enough once
                    // every remaining provider has had its chance. Not
                    // cached: the next request should retry for a stream.
                    info!("Info only via {}", provider.name());
                    if info_only.is_none() {
                        info_only = Some(track);
                    }
                }
                Attempt::Unavailable(reason) => {
                    failures.push(ProviderFailure {
                        provider: provider.name(),
                        reason,
                    });
                }
            }
        }

        if let Some(track) = info_only {
            return Ok(track);
        }

        warn!("All providers failed for {}", id);
        Err(ResolveError::AllProvidersFailed {
            failures,
            hint: REMEDIATION_HINT.to_string(),
        })
    }

    /// Exercise every provider for the given input, bypassing the cache in
    /// both directions: no lookup, no insert. Probes run concurrently since
    /// the quota-saving short-circuit of `resolve` does not apply here.
    pub async fn probe_all(&self, raw: &str) -> Result<ProbeReport, ResolveError> {
        let id = VideoId::extract(raw)
            .ok_or_else(|| ResolveError::InvalidInput(raw.to_string()))?;

        info!("Probing all providers for: {}", id);

        let attempts = join_all(self.providers.iter().map(|p| p.attempt(&id))).await;

        let probes: Vec<ProbeOutcome> = self
            .providers
            .iter()
            .zip(attempts)
            .map(|(provider, attempt)| match attempt {
                Attempt::Resolved(track) => ProbeOutcome {
                    provider: provider.name(),
                    attempted: true,
                    succeeded: true,
                    has_stream: track.has_stream(),
                    note: track.warning,
                },
                Attempt::Unavailable(reason) => ProbeOutcome {
                    provider: provider.name(),
                    attempted: true,
                    succeeded: false,
                    has_stream: false,
                    note: Some(reason),
                },
            })
            .collect();

        let recommendation = if probes.iter().any(|p| p.has_stream) {
            "API is working".to_string()
        } else {
            format!("No working method found. {}", REMEDIATION_HINT)
        };

        Ok(ProbeReport {
            video_id: id,
            probes,
            recommendation,
        })
    }
}
