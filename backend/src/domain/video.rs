//! YouTube link normalisation for pitch videos.
//!
//! Submissions may carry a video link in any of the common YouTube shapes;
//! the portal stores only the canonical embeddable form so the client can
//! drop the URL straight into a player. Unrecognised input is discarded
//! rather than rejected: a pitch without a playable video is still a pitch.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static YOUTUBE_RE: OnceLock<Regex> = OnceLock::new();

fn youtube_regex() -> &'static Regex {
    YOUTUBE_RE.get_or_init(|| {
        // Host matching is case-insensitive; the id ends at whitespace, '&',
        // or '?'.
        let pattern = r"(?i)(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([^\s&?]+)";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("youtube regex failed to compile: {error}"))
    })
}

/// Canonical embeddable video URL (`https://www.youtube.com/embed/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbedUrl(String);

impl EmbedUrl {
    fn from_video_id(id: &str) -> Self {
        Self(format!("https://www.youtube.com/embed/{id}"))
    }
}

impl AsRef<str> for EmbedUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmbedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmbedUrl> for String {
    fn from(value: EmbedUrl) -> Self {
        value.0
    }
}

/// Normalise a user-supplied YouTube link into its embeddable form.
///
/// Accepts `youtube.com/watch?v=ID`, `youtube.com/embed/ID`, and
/// `youtu.be/ID` (any host case). Returns `None` for anything else,
/// including empty input.
///
/// # Examples
/// ```
/// use backend::domain::normalize_youtube_url;
///
/// let embed = normalize_youtube_url("https://youtu.be/abc123").unwrap();
/// assert_eq!(embed.as_ref(), "https://www.youtube.com/embed/abc123");
/// assert!(normalize_youtube_url("https://vimeo.com/12345").is_none());
/// ```
pub fn normalize_youtube_url(input: &str) -> Option<EmbedUrl> {
    youtube_regex()
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map(|id| EmbedUrl::from_video_id(id.as_str()))
}
