pub mod cache;
pub mod error;
pub mod resolver;
pub mod track;
pub mod video_id;

pub use cache::TrackCache;
pub use error::{ProviderFailure, ResolveError};
pub use resolver::{ProbeOutcome, ProbeReport, Resolver};
pub use track::{AudioTrack, ProviderSource};
pub use video_id::VideoId;
