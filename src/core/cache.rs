use crate::core::{AudioTrack, VideoId};
use dashmap::DashMap;
use std::time::{Duration, Instant};

pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

struct CachedTrack {
    track: AudioTrack,
    inserted_at: Instant,
}

/// In-memory result cache keyed by video id.
///
/// Entries expire a fixed TTL after insertion, checked lazily on lookup;
/// there is no background sweep and no capacity bound. Lookups for distinct
/// ids never block each other.
pub struct TrackCache {
    entries: DashMap<VideoId, CachedTrack>,
    ttl: Duration,
}

impl TrackCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Returns a clone of the cached track, or `None` on miss or expiry.
    /// Expired entries are removed on the way out.
    pub fn get(&self, id: &VideoId) -> Option<AudioTrack> {
        let expired = match self.entries.get(id) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                return Some(entry.track.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(id);
        }
        None
    }

    /// Only stream-capable tracks belong here; the resolver enforces that.
    pub fn put(&self, id: VideoId, track: AudioTrack) {
        self.entries.insert(
            id,
            CachedTrack {
                track,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TrackCache {
    fn default() -> Self {
        Self::new()
    }
}
