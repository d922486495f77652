use std::fmt;

use serde::Serialize;

/// Opaque identifier of a presentation, unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PresentationId(String);

impl PresentationId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PresentationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for PresentationId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for PresentationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One conference presentation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub id: PresentationId,
    pub title: String,
    pub speakers: Vec<String>,
    pub year: i32,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub track: Option<String>,
    pub url: Option<String>,
}

impl Presentation {
    pub fn new(
        id: impl Into<PresentationId>,
        title: impl Into<String>,
        speakers: Vec<String>,
        year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            speakers,
            year,
            summary: String::new(),
            track: None,
            url: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_track(mut self, track: impl Into<String>) -> Self {
        self.track = Some(track.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Multi-line text rendering used as the content item of tool results.
impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.title)?;
        write!(f, "\nSpeakers: {}", self.speakers.join(", "))?;
        write!(f, "\nYear: {}", self.year)?;
        if let Some(track) = &self.track {
            write!(f, "\nTrack: {track}")?;
        }
        if let Some(url) = &self.url {
            write!(f, "\nURL: {url}")?;
        }
        if !self.summary.is_empty() {
            write!(f, "\nAbstract: {}", self.summary)?;
        }
        Ok(())
    }
}
