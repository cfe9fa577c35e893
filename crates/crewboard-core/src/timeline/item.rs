//! Timeline item and group types shared by both projections.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fill color of a timeline item (Tango palette).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemColor {
    Unavailable,
    Undesired,
    Neutral,
    Unassigned,
}

impl ItemColor {
    pub fn as_hex(&self) -> &'static str {
        match self {
            Self::Unavailable => "#ef2929", // Tango Scarlet Red
            Self::Undesired => "#f57900",   // Tango Orange
            Self::Neutral => "#729fcf",     // Tango Sky Blue
            Self::Unassigned => "#ef292999",
        }
    }
}

/// Fill color of a qualification badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    /// Plain qualification listing on a group or unassigned demand.
    Qualification,
    /// Assigned resource holds the required qualification.
    SkillOk,
    /// Assigned resource lacks the required qualification.
    SkillMismatch,
}

impl BadgeColor {
    pub fn as_hex(&self) -> &'static str {
        match self {
            Self::Qualification => "#d3d7cf",
            Self::SkillOk => "#8ae234",
            Self::SkillMismatch => "#ef2929",
        }
    }
}

/// A labeled badge rendered next to a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub color: BadgeColor,
}

/// Render payload of a timeline item or group: a title plus badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemContent {
    pub title: String,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

impl ItemContent {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            badges: Vec::new(),
        }
    }

    pub fn with_badge(mut self, label: impl Into<String>, color: BadgeColor) -> Self {
        self.badges.push(Badge {
            label: label.into(),
            color,
        });
        self
    }
}

/// Rendering layer of a timeline item.
///
/// Background items mark availability regions beneath the foreground
/// demand ranges; the two layers never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Background,
    Range,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Range => "range",
        }
    }
}

/// One row of a timeline panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineGroup {
    pub id: String,
    pub content: ItemContent,
}

/// A single entry on a timeline panel, spanning `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: String,
    pub group: String,
    pub content: ItemContent,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: ItemColor,
    pub kind: ItemKind,
}
