//! Pitch aggregate and its validated draft form.
//!
//! A pitch is created once and never edited; only its vote tally changes,
//! and only through [`crate::domain::ports::PitchStore::register_vote`].
//! The `votes == voted_by.len()` invariant is therefore maintained in one
//! place: the store's serialized vote registration.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::video::{normalize_youtube_url, EmbedUrl};
use super::UserId;

/// Validation errors raised by [`NewPitch::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PitchValidationError {
    /// Title was blank once trimmed.
    EmptyTitle,
    /// Founder name was blank once trimmed.
    EmptyFounder,
    /// Summary was blank once trimmed.
    EmptySummary,
}

impl fmt::Display for PitchValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyFounder => write!(f, "founder must not be empty"),
            Self::EmptySummary => write!(f, "summary must not be empty"),
        }
    }
}

impl std::error::Error for PitchValidationError {}

/// Stable pitch identifier assigned by the store at insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PitchId(Uuid, String);

impl PitchId {
    /// Validate and construct a [`PitchId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, uuid::Error> {
        let parsed = Uuid::parse_str(id.as_ref())?;
        Ok(Self(parsed, parsed.to_string()))
    }

    /// Generate a new random [`PitchId`].
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for PitchId {
    fn from(value: Uuid) -> Self {
        Self(value, value.to_string())
    }
}

impl AsRef<str> for PitchId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for PitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Validated pitch draft ready for insertion.
///
/// The draft carries no identifier or tally; the store assigns the id and
/// every pitch starts with zero votes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPitch {
    title: String,
    founder: String,
    summary: String,
    video_url: Option<EmbedUrl>,
    created_by: UserId,
}

impl NewPitch {
    /// Construct a draft from raw form inputs.
    ///
    /// `title`, `founder`, and `summary` must be non-empty once trimmed.
    /// The video link is normalised via [`normalize_youtube_url`]; input
    /// that matches no recognised form (including empty input) produces a
    /// pitch without a video rather than a failure.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{NewPitch, UserId};
    ///
    /// let draft = NewPitch::try_from_parts(
    ///     "Solar kettle",
    ///     "Ada",
    ///     "Boils water with sunlight",
    ///     "https://youtu.be/abc123",
    ///     UserId::random(),
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     draft.video_url().map(AsRef::as_ref),
    ///     Some("https://www.youtube.com/embed/abc123")
    /// );
    /// ```
    pub fn try_from_parts(
        title: &str,
        founder: &str,
        summary: &str,
        video_url: &str,
        created_by: UserId,
    ) -> Result<Self, PitchValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PitchValidationError::EmptyTitle);
        }
        let founder = founder.trim();
        if founder.is_empty() {
            return Err(PitchValidationError::EmptyFounder);
        }
        let summary = summary.trim();
        if summary.is_empty() {
            return Err(PitchValidationError::EmptySummary);
        }

        Ok(Self {
            title: title.to_owned(),
            founder: founder.to_owned(),
            summary: summary.to_owned(),
            video_url: normalize_youtube_url(video_url),
            created_by,
        })
    }

    /// Pitch title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Founder name.
    pub fn founder(&self) -> &str {
        self.founder.as_str()
    }

    /// Pitch summary.
    pub fn summary(&self) -> &str {
        self.summary.as_str()
    }

    /// Normalised video URL, when the submitted link was recognised.
    pub fn video_url(&self) -> Option<&EmbedUrl> {
        self.video_url.as_ref()
    }

    /// Identifier of the submitting user.
    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }
}

/// Stored pitch record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pitch {
    id: PitchId,
    title: String,
    founder: String,
    summary: String,
    video_url: Option<EmbedUrl>,
    created_by: UserId,
    votes: u32,
    voted_by: Vec<UserId>,
    created_at: DateTime<Utc>,
}

impl Pitch {
    /// Materialise a stored pitch from an accepted draft.
    ///
    /// Every pitch starts with `votes = 0` and an empty voter list
    /// regardless of input content.
    pub fn from_draft(id: PitchId, draft: NewPitch, created_at: DateTime<Utc>) -> Self {
        let NewPitch {
            title,
            founder,
            summary,
            video_url,
            created_by,
        } = draft;
        Self {
            id,
            title,
            founder,
            summary,
            video_url,
            created_by,
            votes: 0,
            voted_by: Vec::new(),
            created_at,
        }
    }

    /// Stable pitch identifier.
    pub fn id(&self) -> &PitchId {
        &self.id
    }

    /// Pitch title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Founder name.
    pub fn founder(&self) -> &str {
        self.founder.as_str()
    }

    /// Pitch summary.
    pub fn summary(&self) -> &str {
        self.summary.as_str()
    }

    /// Normalised video URL, when present.
    pub fn video_url(&self) -> Option<&EmbedUrl> {
        self.video_url.as_ref()
    }

    /// Identifier of the submitting user.
    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    /// Current vote tally.
    pub fn votes(&self) -> u32 {
        self.votes
    }

    /// Users who have voted for this pitch, in voting order.
    pub fn voted_by(&self) -> &[UserId] {
        self.voted_by.as_slice()
    }

    /// Whether the given user has already voted for this pitch.
    pub fn has_vote_from(&self, voter: &UserId) -> bool {
        self.voted_by.contains(voter)
    }

    /// Creation timestamp recorded at insert.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append a voter and bump the tally in one step.
    ///
    /// Callers must hold the store's write lock and must have checked
    /// membership first; this is the only mutation a pitch supports.
    pub(crate) fn record_vote(&mut self, voter: UserId) {
        self.voted_by.push(voter);
        self.votes += 1;
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn draft(video_url: &str) -> NewPitch {
        NewPitch::try_from_parts("X", "Y", "Z", video_url, UserId::random())
            .expect("valid draft")
    }

    #[rstest]
    #[case::title("", "Y", "Z", PitchValidationError::EmptyTitle)]
    #[case::title_padded("   ", "Y", "Z", PitchValidationError::EmptyTitle)]
    #[case::founder("X", "", "Z", PitchValidationError::EmptyFounder)]
    #[case::summary("X", "Y", "  ", PitchValidationError::EmptySummary)]
    fn draft_rejects_blank_required_fields(
        #[case] title: &str,
        #[case] founder: &str,
        #[case] summary: &str,
        #[case] expected: PitchValidationError,
    ) {
        let err = NewPitch::try_from_parts(title, founder, summary, "", UserId::random())
            .expect_err("blank required field must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn draft_normalises_short_youtube_link() {
        let draft = draft("https://youtu.be/abc123");
        assert_eq!(
            draft.video_url().map(AsRef::as_ref),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::unrecognised("https://vimeo.com/12345")]
    fn draft_drops_unrecognised_video_links(#[case] video_url: &str) {
        assert!(draft(video_url).video_url().is_none());
    }

    #[rstest]
    fn new_pitch_starts_with_zero_votes() {
        let pitch = Pitch::from_draft(PitchId::random(), draft(""), Utc::now());
        assert_eq!(pitch.votes(), 0);
        assert!(pitch.voted_by().is_empty());
    }

    #[rstest]
    fn record_vote_keeps_tally_and_voters_in_step() {
        let mut pitch = Pitch::from_draft(PitchId::random(), draft(""), Utc::now());
        let voter = UserId::random();
        pitch.record_vote(voter.clone());
        assert_eq!(pitch.votes(), 1);
        assert_eq!(pitch.voted_by(), &[voter.clone()]);
        assert!(pitch.has_vote_from(&voter));
        assert_eq!(pitch.votes() as usize, pitch.voted_by().len());
    }
}
