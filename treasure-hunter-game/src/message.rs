//! Outcome messages with highlight markers.
//!
//! A [`Message`] is plain text split into toned segments. The core never
//! decides how a tone looks; renderers map tones to colours, and the
//! `Display` impl drops them entirely.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Plain,
    /// Gold amounts gained or lost.
    Gold,
    /// Hostile flavour text.
    Danger,
    Snow,
    Water,
    Sand,
    Foliage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    segments: Vec<Segment>,
}

impl Message {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().with(text, Tone::Plain)
    }

    /// Builder form of [`Message::push`].
    #[must_use]
    pub fn with(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.push(text, tone);
        self
    }

    /// Append a segment, merging into the previous one when tones match.
    pub fn push(&mut self, text: impl Into<String>, tone: Tone) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.tone == tone => last.text.push_str(&text),
            _ => self.segments.push(Segment { text, tone }),
        }
    }

    pub fn push_plain(&mut self, text: impl Into<String>) {
        self.push(text, Tone::Plain);
    }

    /// Append every segment of `other`.
    pub fn extend(&mut self, other: Self) {
        for segment in other.segments {
            self.push(segment.text, segment.tone);
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Plain-text containment check over the rendered message.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.to_string().contains(needle)
    }

    /// Texts of every segment carrying `tone`.
    pub fn highlighted(&self, tone: Tone) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(move |segment| segment.tone == tone)
            .map(|segment| segment.text.as_str())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}
