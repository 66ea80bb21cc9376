//! Concrete template implementations. Each satisfies the contract in
//! `render::contract` and differs only in arrangement and decoration.

pub mod classic;
pub mod creative;
pub mod modern;

pub use classic::ClassicTemplate;
pub use creative::CreativeTemplate;
pub use modern::ModernTemplate;

use crate::render::tree::{ContactItem, ContactKind};

/// Icon names for templates with iconography. Names follow the UI kit's
/// icon set; templates without icons leave the field empty.
pub(crate) fn icon_for(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "mail",
        ContactKind::Phone => "phone",
        ContactKind::Location => "map-pin",
        ContactKind::Website => "globe",
        ContactKind::Linkedin => "linkedin",
        ContactKind::Github => "github",
    }
}

pub(crate) fn with_icons(contacts: Vec<ContactItem>) -> Vec<ContactItem> {
    contacts
        .into_iter()
        .map(|mut c| {
            c.icon = Some(icon_for(c.kind).to_string());
            c
        })
        .collect()
}
