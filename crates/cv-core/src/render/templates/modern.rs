//! Modern template — single column, accent-colored section headings,
//! contact icons.

use crate::models::cv::Cv;
use crate::models::settings::TemplateId;
use crate::render::contract::{RenderOptions, Template};
use crate::render::format::ordered_sections;
use crate::render::sections::{header_block, section_blocks};
use crate::render::templates::with_icons;
use crate::render::tree::{
    Block, Column, ColumnRole, HeaderAlign, RenderTree, ResolvedStyle,
};

pub struct ModernTemplate;

impl Template for ModernTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Modern
    }

    fn name(&self) -> &'static str {
        "Modern"
    }

    fn render(&self, cv: &Cv, options: &RenderOptions) -> RenderTree {
        let mut header = header_block(cv, options, HeaderAlign::Left);
        header.contacts = with_icons(header.contacts);

        let mut blocks = vec![Block::Header(header)];
        for key in ordered_sections(&cv.settings) {
            for mut section in section_blocks(cv, key) {
                section.accented = true;
                blocks.push(Block::Section(section));
            }
        }

        RenderTree {
            template: self.id(),
            style: ResolvedStyle::from_settings(&cv.settings),
            columns: vec![Column {
                role: ColumnRole::Full,
                width: 1.0,
                blocks,
            }],
        }
    }
}
