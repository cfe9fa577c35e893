//! Plain-text rendering of schedules and score analyses.

use crewboard_core::timeline::{ItemContent, TimelineGroup, TimelineItem};
use crewboard_core::{RankedConstraint, RowIcon, Schedule, ScheduleProjection};
use std::fmt::Write;

/// Render a schedule as both timeline panels plus the header lines.
pub fn schedule_report(schedule: &Schedule) -> String {
    let projection = ScheduleProjection::project(schedule);
    let mut out = String::new();
    let _ = writeln!(out, "{}", schedule.score_label());
    if let Some(status) = schedule.solver_status {
        let _ = writeln!(out, "Solver status: {}", status.as_str());
    }
    let _ = writeln!(
        out,
        "Window: {} .. {}",
        projection.window_start, projection.window_end
    );
    let _ = writeln!(out, "{}", projection.unassigned_summary());
    out.push('\n');
    panel(
        &mut out,
        "By resource",
        &projection.by_resource_groups,
        &projection.by_resource_items,
    );
    out.push('\n');
    panel(
        &mut out,
        "By construction site",
        &projection.by_site_groups,
        &projection.by_site_items,
    );
    out
}

fn panel(out: &mut String, title: &str, groups: &[TimelineGroup], items: &[TimelineItem]) {
    let _ = writeln!(out, "{title}:");
    for group in groups {
        let _ = writeln!(out, "  {}", label(&group.content));
        for item in items.iter().filter(|i| i.group == group.id) {
            let _ = writeln!(
                out,
                "    {} .. {}  {}",
                item.start.format("%Y-%m-%d %H:%M"),
                item.end.format("%Y-%m-%d %H:%M"),
                label(&item.content),
            );
        }
    }
}

fn label(content: &ItemContent) -> String {
    if content.badges.is_empty() {
        content.title.clone()
    } else {
        let badges: Vec<&str> = content.badges.iter().map(|b| b.label.as_str()).collect();
        format!("{} [{}]", content.title, badges.join(", "))
    }
}

/// Render ranked constraints as the analysis table.
pub fn analysis_table(ranked: &[RankedConstraint]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<2} {:<40} {:>6} {:>8} {:>8} {:>8}",
        "", "Constraint", "Type", "Matches", "Weight", "Score"
    );
    for row in ranked {
        let icon = match row.icon() {
            RowIcon::Warning => "!",
            RowIcon::Satisfied => "ok",
            RowIcon::None => "",
        };
        let _ = writeln!(
            out,
            "{:<2} {:<40} {:>6} {:>8} {:>8} {:>8}",
            icon,
            row.name,
            row.tier.as_str(),
            row.match_count,
            row.weight,
            row.implicit_score
        );
    }
    out
}
