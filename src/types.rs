use serde::{Deserialize, Serialize};

/// Server-held writer configuration record, as returned by fetch and update.
///
/// `chapter_versions` is the number of candidate versions the writing
/// pipeline produces per chapter. When no stored record exists the server
/// answers with its environment override, falling back to 3, so a fetch
/// right after a delete still yields a usable value.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WriterConfig {
    /// Candidate versions generated per chapter.
    pub chapter_versions: u32,
}

/// Replacement payload for the writer configuration.
///
/// Structurally identical to [`WriterConfig`] today; kept as its own type
/// because the two sides of the wire contract can evolve independently.
/// The value is sent as-is; range enforcement (the server accepts 1..=10)
/// stays server-side.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WriterConfigUpdate {
    /// Candidate versions to generate per chapter.
    pub chapter_versions: u32,
}

impl WriterConfigUpdate {
    #[must_use]
    pub const fn new(chapter_versions: u32) -> Self {
        Self { chapter_versions }
    }
}
