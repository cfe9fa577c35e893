//! Timeline projection of a schedule.
//!
//! This module provides:
//! - Typed group/item collections for the two timeline panels
//! - Date-based availability classification of assigned demands
//! - The projector that rebuilds both panels from a schedule

mod item;
mod projector;

pub use item::{
    Badge, BadgeColor, ItemColor, ItemContent, ItemKind, TimelineGroup, TimelineItem,
};
pub use projector::{classify_demand, has_skill_mismatch, DemandClass, ScheduleProjection};
