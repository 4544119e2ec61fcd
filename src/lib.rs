//! Scene Selector
//!
//! The scene node tree of a streaming studio editor: a hierarchy of sources
//! and folders with aggregated folder state, multi-selection, drag-and-drop
//! reordering, and visibility/lock/selective-recording toggles. The editor's
//! stores, command layer and presentation are reached through traits.

pub mod actions;
pub mod commands;
pub mod core;
pub mod logging;
pub mod ui;

mod test_fixtures;

pub use actions::SelectorAction;
pub use commands::{ChannelCommandSink, CommandOutcome, CommandReceipt, CommandSink, EditorCommand};
pub use crate::core::{NodeId, SceneSnapshot, SelectorError, SelectorSettings};
pub use ui::components::{EditorContext, SourceSelector};
