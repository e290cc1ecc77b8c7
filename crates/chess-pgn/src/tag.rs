//! PGN tag pairs (`[Name "Value"]`).

use serde::{Deserialize, Serialize};

use crate::PgnError;

/// Tag names accepted by [`TagList::set`].
///
/// Parsing keeps unknown names so that a game can be written back unchanged;
/// only programmatic edits are restricted to this list.
pub const KNOWN_TAGS: &[&str] = &[
    "Event",
    "Site",
    "Date",
    "Round",
    "White",
    "Black",
    "Result",
    "WhiteTitle",
    "BlackTitle",
    "WhiteElo",
    "BlackElo",
    "WhiteUSCF",
    "BlackUSCF",
    "WhiteNA",
    "BlackNA",
    "WhiteType",
    "BlackType",
    "EventDate",
    "EventSponsor",
    "Section",
    "Stage",
    "Board",
    "Opening",
    "Variation",
    "SubVariation",
    "ECO",
    "NIC",
    "Time",
    "UTCTime",
    "UTCDate",
    "TimeControl",
    "SetUp",
    "FEN",
    "Termination",
    "Annotator",
    "Mode",
    "PlyCount",
];

/// Returns true if `name` is one of the [`KNOWN_TAGS`].
pub fn is_known_tag(name: &str) -> bool {
    KNOWN_TAGS.contains(&name)
}

/// A single tag pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    /// Creates a new tag pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parses the inside of a bracket segment, e.g. `Event "Casual game"`.
    ///
    /// The name ends at the first `" "` (space, quote); the closing quote of
    /// the value is stripped.
    pub fn parse(segment: &str) -> Result<Self, PgnError> {
        let malformed = || PgnError::MalformedTag {
            segment: segment.to_string(),
        };

        let (name, value) = segment.split_once(" \"").ok_or_else(malformed)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(malformed());
        }

        let value = value.trim_end();
        let value = value.strip_suffix('"').unwrap_or(value);

        Ok(Tag::new(name, value))
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} \"{}\"]", self.name, self.value)
    }
}

/// Ordered tag pairs with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList {
    tags: Vec<Tag>,
}

impl TagList {
    /// Creates an empty tag list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `header` for `[Name "Value"]` segments.
    ///
    /// Malformed segments are logged and skipped. A repeated name keeps its
    /// first position and takes the last value.
    pub fn parse(header: &str) -> Self {
        let mut list = TagList::new();
        let mut rest = header;

        while let Some(open) = rest.find('[') {
            let after = &rest[open + 1..];
            let (segment, next) = match after.find(']') {
                Some(close) => (&after[..close], &after[close + 1..]),
                None => (after, ""),
            };
            rest = next;

            match Tag::parse(segment) {
                Ok(tag) => list.upsert(tag),
                Err(err) => tracing::warn!("skipping tag: {}", err),
            }
        }

        list
    }

    /// Returns the value of the named tag, or `""` if it is absent.
    pub fn get(&self, name: &str) -> &str {
        self.tags
            .iter()
            .find(|t| t.name == name)
            .map_or("", |t| t.value.as_str())
    }

    /// Sets a tag value, appending the tag if it is not present yet.
    ///
    /// Names outside [`KNOWN_TAGS`] are ignored; returns whether the list changed.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        if !is_known_tag(name) {
            tracing::debug!("ignoring unrecognized tag name {:?}", name);
            return false;
        }
        self.upsert(Tag::new(name, value));
        true
    }

    fn upsert(&mut self, tag: Tag) {
        match self.tags.iter_mut().find(|t| t.name == tag.name) {
            Some(existing) => existing.value = tag.value,
            None => self.tags.push(tag),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Returns the byte length of the tag section at the start of `text`.
///
/// The header is the leading run of blank lines and lines starting with `[`.
/// If movetext follows the last `]` on the same line, the header stops there.
pub fn header_len(text: &str) -> usize {
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            offset += line.len();
            continue;
        }
        if !trimmed.starts_with('[') {
            break;
        }

        if let Some(close) = line.rfind(']') {
            if !line[close + 1..].trim().is_empty() {
                return offset + close + 1;
            }
        }
        offset += line.len();
    }

    offset
}
