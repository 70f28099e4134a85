//! List rendering.
//!
//! Turns the notes returned by the backend into display cards. The list is
//! rebuilt from scratch on every load; cards keep backend order.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::models::{Note, NoteId};

/// Placeholder shown when a load returns no notes
pub const EMPTY_PLACEHOLDER: &str = "No notes found.";

/// Shown in place of a timestamp that is missing or unparseable
pub const INVALID_TIMESTAMP: &str = "Invalid Date";

/// Visual emphasis of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Normal,
    Pinned,
}

/// Action control attached to a card, bound to the card's note id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Edit(NoteId),
    Delete(NoteId),
}

impl CardAction {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Edit(_) => "Edit",
            Self::Delete(_) => "Delete",
        }
    }

    #[must_use]
    pub const fn note_id(&self) -> &NoteId {
        match self {
            Self::Edit(id) | Self::Delete(id) => id,
        }
    }
}

/// One rendered note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Tags prefixed with `#`, joined by single spaces
    pub tags: String,
    pub timestamp: String,
    pub style: CardStyle,
    pub actions: [CardAction; 2],
}

impl NoteCard {
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            tags: render_tags(&note.tags),
            timestamp: format_timestamp(note.updated_at.as_deref()),
            style: if note.pinned {
                CardStyle::Pinned
            } else {
                CardStyle::Normal
            },
            actions: [
                CardAction::Edit(note.id.clone()),
                CardAction::Delete(note.id.clone()),
            ],
        }
    }

    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.style == CardStyle::Pinned
    }
}

impl fmt::Display for NoteCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_pinned() { "*" } else { " " };
        writeln!(f, "{marker} {}", self.title)?;
        for line in self.content.lines() {
            writeln!(f, "  {line}")?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "  {}", self.tags)?;
        }
        writeln!(f, "  {}", self.timestamp)?;
        let controls = self
            .actions
            .iter()
            .map(|action| format!("[{} {}]", action.label(), action.note_id()))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "  {controls}")
    }
}

/// The displayed list, wholesale-replaced on every load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListView {
    /// Nothing loaded yet
    #[default]
    Blank,
    /// A load returned no notes
    Empty,
    Cards(Vec<NoteCard>),
}

impl ListView {
    #[must_use]
    pub fn cards(&self) -> &[NoteCard] {
        match self {
            Self::Cards(cards) => cards,
            Self::Blank | Self::Empty => &[],
        }
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Empty => f.write_str(EMPTY_PLACEHOLDER),
            Self::Cards(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    if index > 0 {
                        f.write_str("\n\n")?;
                    }
                    write!(f, "{card}")?;
                }
                Ok(())
            }
        }
    }
}

/// Render a freshly loaded sequence of notes.
#[must_use]
pub fn render(notes: &[Note]) -> ListView {
    if notes.is_empty() {
        return ListView::Empty;
    }
    ListView::Cards(notes.iter().map(NoteCard::from_note).collect())
}

/// `#tag` for each tag, joined by single spaces.
#[must_use]
pub fn render_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<String>>()
        .join(" ")
}

/// Format a backend timestamp in the local time zone.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    format_timestamp_in(raw, &Local)
}

/// Format a backend timestamp in the given time zone.
///
/// Zone-less date-times are read as wall-clock time in `tz`; bare dates
/// are read as UTC midnight.
pub fn format_timestamp_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    raw.and_then(|value| parse_timestamp(value.trim(), tz))
        .map_or_else(
            || INVALID_TIMESTAMP.to_string(),
            |date_time| date_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        )
}

fn parse_timestamp<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.with_timezone(tz));
    }
    if let Ok(naive) = value.parse::<NaiveDateTime>() {
        return tz.from_local_datetime(&naive).earliest();
    }
    value
        .parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(tz))
}
