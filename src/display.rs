//! What the list and the map show for an activity.

use crate::activity::{Activity, ActivityDetails, ActivityKind, Coordinates};

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// One entry of the activity list.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub details: Vec<DetailRow>,
}

/// Popup marker placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coords: Coordinates,
    pub text: String,
    pub style_tag: String,
}

pub fn kind_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Running => "🏃‍♂️",
        ActivityKind::Cycling => "🚴‍♀️",
    }
}

/// CSS-style class of the popup, e.g. `running-popup`.
pub fn style_tag(kind: ActivityKind) -> String {
    format!("{}-popup", kind)
}

fn row(icon: &'static str, value: String, unit: &'static str) -> DetailRow {
    DetailRow { icon, value, unit }
}

pub fn entry(activity: &Activity) -> ActivityEntry {
    let kind = activity.kind();
    let mut details = vec![
        row(kind_icon(kind), activity.distance().to_string(), "km"),
        row("⏱", activity.duration().to_string(), "min"),
    ];

    match *activity.details() {
        ActivityDetails::Running { cadence, pace } => {
            details.push(row("⚡️", format!("{:.1}", pace), "min/km"));
            details.push(row("🦶🏼", cadence.to_string(), "spm"));
        }
        ActivityDetails::Cycling {
            elevation_gain,
            speed,
        } => {
            details.push(row("⚡️", format!("{:.1}", speed), "km/h"));
            details.push(row("⛰", elevation_gain.to_string(), "m"));
        }
    }

    ActivityEntry {
        id: activity.id().to_string(),
        kind,
        title: activity.description().to_string(),
        details,
    }
}

pub fn marker(activity: &Activity) -> Marker {
    let kind = activity.kind();
    Marker {
        coords: activity.coords(),
        text: format!("{} {}", kind_icon(kind), activity.description()),
        style_tag: style_tag(kind),
    }
}
