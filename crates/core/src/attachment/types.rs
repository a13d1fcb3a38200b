//! Attachment types and data structures.

use chrono::{DateTime, Utc};

/// Content type that can own PDF attachments.
///
/// The set is closed: anything outside it is rejected before storage is
/// consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// Lesson video.
    Video,
    /// Lesson audio.
    Audio,
    /// Speaking exercise.
    Speaking,
    /// Writing exercise.
    Writing,
    /// Reading exercise.
    Reading,
    /// Graded story.
    Story,
    /// Blog post.
    Blog,
    /// ESL-track video.
    EslVideo,
    /// ESL-track audio.
    EslAudio,
}

impl ResourceKind {
    /// Every resource kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Video,
        Self::Audio,
        Self::Speaking,
        Self::Writing,
        Self::Reading,
        Self::Story,
        Self::Blog,
        Self::EslVideo,
        Self::EslAudio,
    ];

    /// Convert to the wire/database tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Speaking => "speaking",
            Self::Writing => "writing",
            Self::Reading => "reading",
            Self::Story => "story",
            Self::Blog => "blog",
            Self::EslVideo => "esl_video",
            Self::EslAudio => "esl_audio",
        }
    }

    /// Parse from the wire/database tag. Matching is exact.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "speaking" => Some(Self::Speaking),
            "writing" => Some(Self::Writing),
            "reading" => Some(Self::Reading),
            "story" => Some(Self::Story),
            "blog" => Some(Self::Blog),
            "esl_video" => Some(Self::EslVideo),
            "esl_audio" => Some(Self::EslAudio),
            _ => None,
        }
    }

    /// Name of the table holding resources of this kind.
    #[must_use]
    pub const fn table_name(&self) -> &'static str {
        match self {
            Self::Video => "videos",
            Self::Audio => "audios",
            Self::Speaking => "speakings",
            Self::Writing => "writings",
            Self::Reading => "readings",
            Self::Story => "stories",
            Self::Blog => "blogs",
            Self::EslVideo => "esl_videos",
            Self::EslAudio => "esl_audios",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a record identifier from a path segment.
///
/// Accepts only ASCII digits that fit a 32-bit signed integer. Signs,
/// whitespace and trailing garbage are rejected.
#[must_use]
pub fn parse_record_id(s: &str) -> Option<i32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A parent resource confirmed to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParentRef {
    /// Resource kind.
    pub kind: ResourceKind,
    /// Primary key in the kind's table.
    pub id: i32,
}

impl ParentRef {
    /// Create a parent reference.
    #[must_use]
    pub const fn new(kind: ResourceKind, id: i32) -> Self {
        Self { kind, id }
    }
}

impl std::fmt::Display for ParentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

/// An attachment descriptor as submitted by a caller, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfCandidate {
    /// Location of the stored PDF.
    pub file_path: Option<String>,
    /// Display name.
    pub file_name: Option<String>,
    /// Byte size, if known.
    pub file_size: Option<i64>,
    /// Upload date as submitted.
    pub upload_date: Option<String>,
}

/// A validated attachment ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttachment {
    /// Location of the stored PDF.
    pub file_path: String,
    /// Display name.
    pub file_name: String,
    /// Byte size, if known.
    pub file_size: Option<i64>,
    /// Upload date.
    pub upload_date: DateTime<Utc>,
}

/// Attachment domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Unique identifier.
    pub id: i32,
    /// Kind of the owning resource.
    pub resource_type: ResourceKind,
    /// Primary key of the owning resource.
    pub resource_id: i32,
    /// Location of the stored PDF.
    pub file_path: String,
    /// Display name.
    pub file_name: String,
    /// Byte size, if known.
    pub file_size: Option<i64>,
    /// Upload date.
    pub upload_date: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Attachment {
    /// The parent this attachment belongs to.
    #[must_use]
    pub const fn parent(&self) -> ParentRef {
        ParentRef::new(self.resource_type, self.resource_id)
    }
}
