// SPDX-License-Identifier: MPL-2.0
//! Page sections and the page layout model.
//!
//! The [`PageMap`] mirrors the vertical layout the view produces, using the
//! same sizing constants, and hands out block rectangles for visibility
//! detection and section tops for smooth scrolling. It is the stand-in for
//! asking a live layout tree where things are, which keeps the interaction
//! machinery testable.

pub mod projects;
pub mod skills;
pub mod timeline;

use crate::content;
use crate::interaction::visibility::Block;
use crate::ui::design_tokens::{sizing, spacing};

/// The sections of the one-page portfolio, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Timeline,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Timeline,
        Section::Projects,
        Section::Contact,
    ];

    /// Fluent key for the navigation link label.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Skills => "nav-skills",
            Section::Timeline => "nav-timeline",
            Section::Projects => "nav-projects",
            Section::Contact => "nav-contact",
        }
    }

    /// Fluent key for the section header.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Section::Home => "section-home-title",
            Section::About => "section-about-title",
            Section::Skills => "section-skills-title",
            Section::Timeline => "section-timeline-title",
            Section::Projects => "section-projects-title",
            Section::Contact => "section-contact-title",
        }
    }
}

/// Identity of a tracked page block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockId {
    /// The about paragraph (fade-in).
    About,
    /// A skill card (gauge trigger).
    Skill(usize),
    /// A timeline entry (one-shot reveal).
    TimelineEntry(usize),
    /// A project card (fade-in).
    Project(usize),
    /// The contact form (fade-in).
    Contact,
}

/// Precomputed vertical layout of the page.
#[derive(Debug, Clone)]
pub struct PageMap {
    section_tops: Vec<(Section, f32)>,
    blocks: Vec<(BlockId, Block)>,
    total_height: f32,
}

impl PageMap {
    /// Builds the layout model for the current content tables.
    #[must_use]
    pub fn build() -> Self {
        Self::with_counts(
            content::SKILLS.len(),
            content::TIMELINE.len(),
            content::PROJECTS.len(),
        )
    }

    /// Layout model for arbitrary item counts (used by tests).
    #[must_use]
    pub fn with_counts(skills: usize, timeline: usize, projects: usize) -> Self {
        let mut section_tops = Vec::new();
        let mut blocks = Vec::new();
        let mut y = 0.0f32;

        // Hero section fills the first screenful.
        section_tops.push((Section::Home, y));
        y += sizing::HERO_HEIGHT + sizing::SECTION_GAP;

        // About: header then one fade-in paragraph block.
        section_tops.push((Section::About, y));
        y += sizing::SECTION_HEADER_HEIGHT;
        blocks.push((
            BlockId::About,
            Block {
                top: y,
                height: sizing::ABOUT_BLOCK_HEIGHT,
            },
        ));
        y += sizing::ABOUT_BLOCK_HEIGHT + sizing::SECTION_GAP;

        // Skills: header then one card per skill.
        section_tops.push((Section::Skills, y));
        y += sizing::SECTION_HEADER_HEIGHT;
        for index in 0..skills {
            blocks.push((
                BlockId::Skill(index),
                Block {
                    top: y,
                    height: sizing::SKILL_CARD_HEIGHT,
                },
            ));
            y += sizing::SKILL_CARD_HEIGHT + spacing::LG;
        }
        y += sizing::SECTION_GAP - spacing::LG;

        // Timeline: header then entries.
        section_tops.push((Section::Timeline, y));
        y += sizing::SECTION_HEADER_HEIGHT;
        for index in 0..timeline {
            blocks.push((
                BlockId::TimelineEntry(index),
                Block {
                    top: y,
                    height: sizing::TIMELINE_ENTRY_HEIGHT,
                },
            ));
            y += sizing::TIMELINE_ENTRY_HEIGHT + spacing::LG;
        }
        y += sizing::SECTION_GAP - spacing::LG;

        // Projects: header then cards.
        section_tops.push((Section::Projects, y));
        y += sizing::SECTION_HEADER_HEIGHT;
        for index in 0..projects {
            blocks.push((
                BlockId::Project(index),
                Block {
                    top: y,
                    height: sizing::PROJECT_CARD_HEIGHT,
                },
            ));
            y += sizing::PROJECT_CARD_HEIGHT + spacing::LG;
        }
        y += sizing::SECTION_GAP - spacing::LG;

        // Contact: header then the form.
        section_tops.push((Section::Contact, y));
        y += sizing::SECTION_HEADER_HEIGHT;
        blocks.push((
            BlockId::Contact,
            Block {
                top: y,
                height: sizing::CONTACT_FORM_HEIGHT,
            },
        ));
        y += sizing::CONTACT_FORM_HEIGHT;

        Self {
            section_tops,
            blocks,
            total_height: y,
        }
    }

    /// Scroll offset that aligns a section's top with the viewport top.
    /// Unknown sections yield `None` and navigation degrades to a no-op.
    #[must_use]
    pub fn section_top(&self, section: Section) -> Option<f32> {
        self.section_tops
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, top)| *top)
    }

    /// All tracked blocks in page order.
    #[must_use]
    pub fn blocks(&self) -> &[(BlockId, Block)] {
        &self.blocks
    }

    #[must_use]
    pub fn block(&self, id: BlockId) -> Option<Block> {
        self.blocks
            .iter()
            .find(|(block_id, _)| *block_id == id)
            .map(|(_, block)| *block)
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.total_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_appear_in_page_order() {
        let map = PageMap::with_counts(4, 3, 3);
        let tops: Vec<f32> = Section::ALL
            .iter()
            .map(|s| map.section_top(*s).expect("section missing"))
            .collect();

        for pair in tops.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(tops[0], 0.0);
    }

    #[test]
    fn every_content_item_has_a_block() {
        let map = PageMap::with_counts(4, 3, 3);
        for index in 0..4 {
            assert!(map.block(BlockId::Skill(index)).is_some());
        }
        for index in 0..3 {
            assert!(map.block(BlockId::TimelineEntry(index)).is_some());
            assert!(map.block(BlockId::Project(index)).is_some());
        }
        assert!(map.block(BlockId::About).is_some());
        assert!(map.block(BlockId::Contact).is_some());
        assert!(map.block(BlockId::Skill(4)).is_none());
    }

    #[test]
    fn blocks_sit_below_their_section_header() {
        let map = PageMap::with_counts(1, 1, 1);
        let skills_top = map.section_top(Section::Skills).unwrap();
        let card = map.block(BlockId::Skill(0)).unwrap();
        assert!(card.top >= skills_top);
    }

    #[test]
    fn empty_content_still_produces_a_consistent_map() {
        let map = PageMap::with_counts(0, 0, 0);
        assert!(map.section_top(Section::Contact).is_some());
        assert!(map.block(BlockId::Skill(0)).is_none());
        assert!(map.total_height() > 0.0);
    }
}
