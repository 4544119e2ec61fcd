//! UI module - the view-model behind the scene node tree
//!
//! This module contains all presentation-facing code:
//! - `components/` - The source selector tree component
//! - `icons` - Icon classes and the display-data catalogs

pub mod components;
pub mod icons;

pub use icons::{DisplayCatalog, IconCatalog};
