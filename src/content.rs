// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! Copy lives in the Fluent resources; this module only carries the data
//! that drives behavior (skill percentages, entry counts, message keys).

/// A skill card: a Fluent key for the label and the gauge target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub label_key: &'static str,
    pub percent: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        label_key: "skill-rust",
        percent: 92,
    },
    Skill {
        label_key: "skill-ui-design",
        percent: 85,
    },
    Skill {
        label_key: "skill-graphics",
        percent: 73,
    },
    Skill {
        label_key: "skill-devops",
        percent: 61,
    },
];

/// One entry of the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title_key: &'static str,
    pub body_key: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2023 —",
        title_key: "timeline-current-title",
        body_key: "timeline-current-body",
    },
    TimelineEntry {
        period: "2020 — 2023",
        title_key: "timeline-studio-title",
        body_key: "timeline-studio-body",
    },
    TimelineEntry {
        period: "2017 — 2020",
        title_key: "timeline-agency-title",
        body_key: "timeline-agency-body",
    },
];

/// A project card with a detail dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title_key: &'static str,
    pub summary_key: &'static str,
    pub detail_key: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title_key: "project-viewer-title",
        summary_key: "project-viewer-summary",
        detail_key: "project-viewer-detail",
    },
    Project {
        title_key: "project-synth-title",
        summary_key: "project-synth-summary",
        detail_key: "project-synth-detail",
    },
    Project {
        title_key: "project-tracker-title",
        summary_key: "project-tracker-summary",
        detail_key: "project-tracker-detail",
    },
];
