//! Classic template — single column, centered header, no iconography.
//! The conservative, ATS-friendly arrangement.

use crate::models::cv::Cv;
use crate::models::settings::TemplateId;
use crate::render::contract::{RenderOptions, Template};
use crate::render::format::ordered_sections;
use crate::render::sections::{header_block, section_blocks};
use crate::render::tree::{
    Block, Column, ColumnRole, HeaderAlign, RenderTree, ResolvedStyle,
};

pub struct ClassicTemplate;

impl Template for ClassicTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Classic
    }

    fn name(&self) -> &'static str {
        "Classic"
    }

    fn render(&self, cv: &Cv, options: &RenderOptions) -> RenderTree {
        let header = header_block(cv, options, HeaderAlign::Center);

        let mut blocks = vec![Block::Header(header)];
        for key in ordered_sections(&cv.settings) {
            for section in section_blocks(cv, key) {
                // Plain headings: no accent, no icons.
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
