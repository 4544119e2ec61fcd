//! Core scene model and state
//!
//! This module contains:
//! - Scene node, item and source types
//! - The node store contract and an in-memory snapshot
//! - Folder aggregation over nested items
//! - Selection state and grouping rules
//! - The selective-recording cycle
//! - Selector settings and session state

mod aggregate;
mod error;
mod node;
mod recording;
mod selection;
mod state;
mod store;

pub use aggregate::{ItemSet, NodeFlags, NodeIndex};
pub use error::{SelectorError, SelectorResult};
pub use node::{
    NodeId, NodeKind, PropertiesManager, SCENE_SOURCE_TYPE, SceneItem, SceneNode, Source, SourceId,
};
pub use recording::{RecordingMode, cycle_flags};
pub use selection::{
    Selection, SelectionStore, can_group_into_folder, closest_parent, top_level_selected,
};
pub use state::{ScrollBehavior, SelectorSettings, SessionFlags, SessionState};
pub use store::{NodeStore, SceneSnapshot};
