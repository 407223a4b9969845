pub mod cli;
pub mod config;
pub mod core;
pub mod providers;

pub use config::Config;
pub use crate::core::{AudioTrack, ProviderSource, ResolveError, Resolver, TrackCache, VideoId};
pub use providers::{Attempt, Provider};
