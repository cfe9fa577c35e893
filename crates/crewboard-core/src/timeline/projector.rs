//! Schedule-to-timeline projection.
//!
//! Rebuilds both timeline panels (by resource, by construction site)
//! from scratch for every loaded schedule. Output is deterministic:
//! ids derive from entity array indexes, so projecting the same
//! schedule twice yields identical collections.

use chrono::{Days, Local, NaiveDate, NaiveDateTime, NaiveTime};

use super::item::{BadgeColor, ItemColor, ItemContent, ItemKind, TimelineGroup, TimelineItem};
use crate::schedule::{Demand, Resource, Schedule};

/// Days shown past the window start.
const WINDOW_DAYS: u64 = 7;

/// Date-based availability classification of an assigned demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandClass {
    Unavailable,
    Undesired,
    Neutral,
}

impl DemandClass {
    pub fn color(&self) -> ItemColor {
        match self {
            Self::Unavailable => ItemColor::Unavailable,
            Self::Undesired => ItemColor::Undesired,
            Self::Neutral => ItemColor::Neutral,
        }
    }
}

fn next_midnight(date: NaiveDate) -> Option<NaiveDateTime> {
    date.checked_add_days(Days::new(1))
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Classify a demand against the resource's availability calendars.
///
/// The start date is always checked. The end date is only checked when
/// the demand runs strictly past midnight of the day after its start: a
/// demand ending exactly at 00:00 does not occupy that next day, so an
/// overnight shift ending at midnight never conflicts with the day it
/// merely touches.
pub fn classify_demand(demand: &Demand, resource: &Resource) -> DemandClass {
    let start_date = demand.start.date();
    let end_date = demand.end.date();
    let spills_past_start_day = next_midnight(start_date)
        .map(|midnight| demand.end > midnight)
        .unwrap_or(false);

    if resource.unavailable_dates.contains(&start_date)
        || (spills_past_start_day && resource.unavailable_dates.contains(&end_date))
    {
        DemandClass::Unavailable
    } else if resource.undesired_dates.contains(&start_date)
        || (spills_past_start_day && resource.undesired_dates.contains(&end_date))
    {
        DemandClass::Undesired
    } else {
        DemandClass::Neutral
    }
}

/// Whether the demand's required qualification is missing from the
/// assigned resource's qualification list.
pub fn has_skill_mismatch(demand: &Demand, resource: &Resource) -> bool {
    !resource
        .qualifications
        .iter()
        .any(|q| q == &demand.required_qualifications)
}

/// Both timeline projections of one schedule, plus the display window
/// and the unassigned-demand count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleProjection {
    pub by_resource_groups: Vec<TimelineGroup>,
    pub by_resource_items: Vec<TimelineItem>,
    pub by_site_groups: Vec<TimelineGroup>,
    pub by_site_items: Vec<TimelineItem>,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub unassigned_count: usize,
}

impl ScheduleProjection {
    /// Display window before any schedule is loaded: today plus seven days.
    pub fn initial_window() -> (NaiveDate, NaiveDate) {
        let start = Local::now().date_naive();
        let end = start.checked_add_days(Days::new(WINDOW_DAYS)).unwrap_or(start);
        (start, end)
    }

    /// Build both projections from a schedule.
    ///
    /// Emission order follows the schedule's own entity order: one group
    /// per resource, background items per calendar date, then one site
    /// group per first-seen construction site and one range item per
    /// demand. An unassigned demand appears only in the by-site panel
    /// and in the unassigned counter.
    pub fn project(schedule: &Schedule) -> Self {
        let window_start = schedule
            .demands
            .iter()
            .map(|d| d.start.date())
            .min()
            .unwrap_or_else(|| Local::now().date_naive());
        let window_end = window_start
            .checked_add_days(Days::new(WINDOW_DAYS))
            .unwrap_or(window_start);

        let mut by_resource_groups = Vec::with_capacity(schedule.resources.len());
        let mut by_resource_items = Vec::new();
        let mut by_site_groups = Vec::new();
        let mut by_site_items = Vec::new();
        let mut unassigned_count = 0;

        for (index, resource) in schedule.resources.iter().enumerate() {
            let mut content = ItemContent::titled(&resource.name);
            for qualification in &resource.qualifications {
                content = content.with_badge(qualification, BadgeColor::Qualification);
            }
            by_resource_groups.push(TimelineGroup {
                id: resource.name.clone(),
                content,
            });

            for (date_index, date) in resource.unavailable_dates.iter().enumerate() {
                let Some(end) = next_midnight(*date) else {
                    continue;
                };
                by_resource_items.push(TimelineItem {
                    id: format!("resource-{index}-unavailability-{date_index}"),
                    group: resource.name.clone(),
                    content: ItemContent::titled("Unavailable"),
                    start: date.and_time(NaiveTime::MIN),
                    end,
                    color: ItemColor::Unavailable,
                    kind: ItemKind::Background,
                });
            }
            for (date_index, date) in resource.undesired_dates.iter().enumerate() {
                let Some(end) = next_midnight(*date) else {
                    continue;
                };
                by_resource_items.push(TimelineItem {
                    id: format!("resource-{index}-undesired-{date_index}"),
                    group: resource.name.clone(),
                    content: ItemContent::titled("Undesired"),
                    start: date.and_time(NaiveTime::MIN),
                    end,
                    color: ItemColor::Undesired,
                    kind: ItemKind::Background,
                });
            }
        }

        let mut seen_sites: Vec<&str> = Vec::new();
        for (index, demand) in schedule.demands.iter().enumerate() {
            if !seen_sites.contains(&demand.construction_site.as_str()) {
                seen_sites.push(&demand.construction_site);
                by_site_groups.push(TimelineGroup {
                    id: demand.construction_site.clone(),
                    content: ItemContent::titled(&demand.construction_site),
                });
            }

            match &demand.resource {
                None => {
                    unassigned_count += 1;
                    by_site_items.push(TimelineItem {
                        id: format!("demand-{index}"),
                        group: demand.construction_site.clone(),
                        content: ItemContent::titled("Unassigned").with_badge(
                            &demand.required_qualifications,
                            BadgeColor::Qualification,
                        ),
                        start: demand.start,
                        end: demand.end,
                        color: ItemColor::Unassigned,
                        kind: ItemKind::Range,
                    });
                }
                Some(resource) => {
                    let color = classify_demand(demand, resource).color();
                    let badge_color = if has_skill_mismatch(demand, resource) {
                        BadgeColor::SkillMismatch
                    } else {
                        BadgeColor::SkillOk
                    };
                    by_resource_items.push(TimelineItem {
                        id: format!("demand-{index}"),
                        group: resource.name.clone(),
                        content: ItemContent::titled(&demand.construction_site)
                            .with_badge(&demand.required_qualifications, badge_color),
                        start: demand.start,
                        end: demand.end,
                        color,
                        kind: ItemKind::Range,
                    });
                    by_site_items.push(TimelineItem {
                        id: format!("demand-{index}"),
                        group: demand.construction_site.clone(),
                        content: ItemContent::titled(&resource.name)
                            .with_badge(&demand.required_qualifications, badge_color),
                        start: demand.start,
                        end: demand.end,
                        color,
                        kind: ItemKind::Range,
                    });
                }
            }
        }

        Self {
            by_resource_groups,
            by_resource_items,
            by_site_groups,
            by_site_items,
            window_start,
            window_end,
            unassigned_count,
        }
    }

    /// Summary line for the unassigned-demand counter.
    pub fn unassigned_summary(&self) -> String {
        if self.unassigned_count == 0 {
            "There are no unassigned demands.".to_string()
        } else {
            format!("There are {} unassigned demands.", self.unassigned_count)
        }
    }
}
