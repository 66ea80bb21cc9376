//! Template rendering: the contract, the shared projection and formatting
//! helpers, the render tree, and the concrete templates.

pub mod contract;
pub mod format;
pub mod sections;
pub mod templates;
pub mod tree;

pub use contract::{all_templates, render, template_for, RenderOptions, Template};
pub use tree::{
    Block, Column, ColumnRole, ContactItem, ContactKind, ContactsBlock, HeaderAlign, HeaderBlock,
    LabeledEntry, RenderTree, ResolvedStyle, SectionBlock, SectionEntry, TimelineEntry,
};
