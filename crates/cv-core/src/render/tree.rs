//! RenderTree — the template-agnostic presentation structure handed to the
//! preview UI and the export collaborator.
//!
//! Templates arrange columns and blocks differently, but the information
//! inside the tree is identical for a given CV: the conformance suite
//! compares trees across templates through the query helpers at the bottom.

use serde::{Deserialize, Serialize};

use crate::models::entities::SectionKey;
use crate::models::settings::{AccentColor, CvSettings, FontSize, Spacing, TemplateId, Theme};

/// Style values resolved from `CvSettings`, carried so the export
/// collaborator never reads settings itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub theme: Theme,
    pub accent: AccentColor,
    pub font_size: FontSize,
    pub spacing: Spacing,
}

impl ResolvedStyle {
    pub fn from_settings(settings: &CvSettings) -> Self {
        ResolvedStyle {
            theme: settings.theme,
            accent: settings.accent,
            font_size: settings.font_size,
            spacing: settings.spacing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Single-column layouts use one full-width column.
    Full,
    Main,
    Sidebar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
    Github,
}

/// One contact line. `icon` is a template-chosen hint (icon name), empty for
/// templates without iconography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub value: String,
    pub icon: Option<String>,
}

/// The personal-info block: always present in every rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub name: String,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub contacts: Vec<ContactItem>,
    pub photo_url: Option<String>,
    pub align: HeaderAlign,
}

/// A dated, titled entry — experience, education, projects, and the other
/// narrative sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub heading: String,
    pub subheading: Option<String>,
    /// Produced by the shared date-range formatter only.
    pub date_range: Option<String>,
    pub location: Option<String>,
    pub body: Option<String>,
    pub bullets: Vec<String>,
    pub tags: Vec<String>,
    /// Secondary line (GPA, credential id, field of study).
    pub meta: Option<String>,
    pub link: Option<String>,
}

/// A compact label/detail entry — skills, languages, references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabeledEntry {
    pub label: String,
    pub detail: Option<String>,
    pub meta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SectionEntry {
    Timeline(TimelineEntry),
    Labeled(LabeledEntry),
}

/// A rendered section. Emitted only when its backing collection is
/// non-empty; custom sections produce one block each, all keyed
/// `custom_sections`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBlock {
    pub key: SectionKey,
    pub title: String,
    pub entries: Vec<SectionEntry>,
    /// Template hint: accent-colored heading.
    pub accented: bool,
    /// Template hint: section icon name.
    pub icon: Option<String>,
}

/// Standalone contact list used by sidebar layouts that pull contacts out of
/// the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactsBlock {
    pub title: String,
    pub items: Vec<ContactItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "block")]
pub enum Block {
    Header(HeaderBlock),
    Section(SectionBlock),
    Contacts(ContactsBlock),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub role: ColumnRole,
    /// Fraction of the page width, 0.0–1.0.
    pub width: f32,
    pub blocks: Vec<Block>,
}

/// Root of the rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderTree {
    pub template: TemplateId,
    pub style: ResolvedStyle,
    pub columns: Vec<Column>,
}

impl RenderTree {
    /// Section keys present in the tree, in traversal order (columns, then
    /// blocks). Repeated keys (multiple custom sections) appear once.
    pub fn section_keys(&self) -> Vec<SectionKey> {
        let mut keys = Vec::new();
        for section in self.sections() {
            if !keys.contains(&section.key) {
                keys.push(section.key);
            }
        }
        keys
    }

    /// All section blocks in traversal order.
    pub fn sections(&self) -> impl Iterator<Item = &SectionBlock> {
        self.columns.iter().flat_map(|c| &c.blocks).filter_map(|b| match b {
            Block::Section(s) => Some(s),
            _ => None,
        })
    }

    pub fn find_section(&self, key: SectionKey) -> Option<&SectionBlock> {
        self.sections().find(|s| s.key == key)
    }

    /// The header block. Every conformant template emits exactly one.
    pub fn header(&self) -> Option<&HeaderBlock> {
        self.columns
            .iter()
            .flat_map(|c| &c.blocks)
            .find_map(|b| match b {
                Block::Header(h) => Some(h),
                _ => None,
            })
    }

    /// Every human-visible string in the tree, used by the no-data-loss
    /// conformance checks. Icons and style hints are excluded — they are
    /// presentation, not information.
    pub fn text_content(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut push_opt = |s: &Option<String>, out: &mut Vec<String>| {
            if let Some(v) = s {
                out.push(v.clone());
            }
        };
        for block in self.columns.iter().flat_map(|c| &c.blocks) {
            match block {
                Block::Header(h) => {
                    out.push(h.name.clone());
                    push_opt(&h.headline, &mut out);
                    push_opt(&h.summary, &mut out);
                    for contact in &h.contacts {
                        out.push(contact.value.clone());
                    }
                }
                Block::Contacts(c) => {
                    out.push(c.title.clone());
                    for contact in &c.items {
                        out.push(contact.value.clone());
                    }
                }
                Block::Section(s) => {
                    out.push(s.title.clone());
                    for entry in &s.entries {
                        match entry {
                            SectionEntry::Timeline(t) => {
                                out.push(t.heading.clone());
                                push_opt(&t.subheading, &mut out);
                                push_opt(&t.date_range, &mut out);
                                push_opt(&t.location, &mut out);
                                push_opt(&t.body, &mut out);
                                push_opt(&t.meta, &mut out);
                                push_opt(&t.link, &mut out);
                                out.extend(t.bullets.iter().cloned());
                                out.extend(t.tags.iter().cloned());
                            }
                            SectionEntry::Labeled(l) => {
                                out.push(l.label.clone());
                                push_opt(&l.detail, &mut out);
                                push_opt(&l.meta, &mut out);
                            }
                        }
                    }
                }
            }
        }
        out
    }
}
