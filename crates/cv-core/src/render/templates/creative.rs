//! Creative template — sidebar layout with icons and accent fills. Contacts
//! and the compact sections (skills, languages, certifications) move to the
//! sidebar; narrative sections fill the main column. Relative section order
//! within each column still follows `sections_order`.

use crate::models::cv::Cv;
use crate::models::entities::SectionKey;
use crate::models::settings::TemplateId;
use crate::render::contract::{RenderOptions, Template};
use crate::render::format::ordered_sections;
use crate::render::sections::{header_block, section_blocks};
use crate::render::templates::with_icons;
use crate::render::tree::{
    Block, Column, ColumnRole, ContactsBlock, HeaderAlign, RenderTree, ResolvedStyle,
};

const SIDEBAR_SECTIONS: &[SectionKey] = &[
    SectionKey::Skills,
    SectionKey::Languages,
    SectionKey::Certifications,
];

const SIDEBAR_WIDTH: f32 = 0.33;

pub struct CreativeTemplate;

impl Template for CreativeTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Creative
    }

    fn name(&self) -> &'static str {
        "Creative"
    }

    fn render(&self, cv: &Cv, options: &RenderOptions) -> RenderTree {
        let mut header = header_block(cv, options, HeaderAlign::Left);
        let contacts = with_icons(std::mem::take(&mut header.contacts));

        let mut sidebar = Vec::new();
        if !contacts.is_empty() {
            sidebar.push(Block::Contacts(ContactsBlock {
                title: "Contact".to_string(),
                items: contacts,
            }));
        }

        let mut main = vec![Block::Header(header)];
        for key in ordered_sections(&cv.settings) {
            for mut section in section_blocks(cv, key) {
                section.accented = true;
                section.icon = Some(section_icon(key).to_string());
                if SIDEBAR_SECTIONS.contains(&key) {
                    sidebar.push(Block::Section(section));
                } else {
                    main.push(Block::Section(section));
                }
            }
        }

        RenderTree {
            template: self.id(),
            style: ResolvedStyle::from_settings(&cv.settings),
            columns: vec![
                Column {
                    role: ColumnRole::Sidebar,
                    width: SIDEBAR_WIDTH,
                    blocks: sidebar,
                },
                Column {
                    role: ColumnRole::Main,
                    width: 1.0 - SIDEBAR_WIDTH,
                    blocks: main,
                },
            ],
        }
    }
}

fn section_icon(key: SectionKey) -> &'static str {
    match key {
        SectionKey::Experience => "briefcase",
        SectionKey::Education => "graduation-cap",
        SectionKey::Skills => "wrench",
        SectionKey::Languages => "message-circle",
        SectionKey::Projects => "folder",
        SectionKey::Certifications => "badge-check",
        SectionKey::Awards => "trophy",
        SectionKey::Publications => "book-open",
        SectionKey::Volunteer => "heart",
        SectionKey::References => "users",
        SectionKey::CustomSections => "sparkles",
        SectionKey::Unknown => "circle",
    }
}
