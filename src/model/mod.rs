//! Document model.
//!
//! This module contains:
//! - Book metadata and the cover/image asset references it declares
//! - Section representation (one content page each)
//! - Navigation links shared between the navigation map and contents page
//! - The [`Document`] aggregate that owns all of the above

mod asset;
mod document;
mod metadata;
mod nav;
mod section;

pub use asset::AssetRef;
pub use document::{ContentsCallback, Document};
pub use metadata::Metadata;
pub use nav::{NavItemType, NavLink};
pub use section::Section;
