//! SourceSelector component - the scene node tree of the editor
//!
//! Owns only what the tree itself needs to remember:
//! - which folders are expanded
//! - whether the next selection change came from the tree itself
//!
//! Everything else (nodes, selection, session) is read from the editor
//! through an [`EditorContext`] on every call.

mod reorder;
mod selection;
mod studio;
mod toggles;
mod tree;

use serde::{Deserialize, Serialize};

use crate::commands::CommandSink;
use crate::core::{
    NodeId, NodeStore, ScrollBehavior, SelectionStore, SelectorSettings, SessionState, SourceId,
};
use crate::ui::icons::DisplayCatalog;

pub use reorder::{DropInfo, ReorderPlan, determine_placement};
pub use selection::{Modifiers, range_selection};
pub use tree::{NodeView, TreeNode, build_tree};

/// Presentation-layer callbacks the selector triggers
pub trait Shell {
    fn scroll_into_view(&mut self, node_id: &NodeId, behavior: ScrollBehavior);

    /// Open the "add source" showcase
    fn show_source_showcase(&mut self);

    fn show_context_menu(&mut self, options: ContextMenuOptions);
}

/// What the edit menu should offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuOptions {
    pub scene_id: String,
    /// Menu was opened on a node rather than on empty space
    pub show_scene_item_menu: bool,
    pub source_id: Option<SourceId>,
}

/// Collaborators borrowed for the duration of one gesture
pub struct EditorContext<'a> {
    pub scene: &'a dyn NodeStore,
    pub selection: &'a mut dyn SelectionStore,
    pub commands: &'a dyn CommandSink,
    pub catalog: &'a dyn DisplayCatalog,
    pub session: &'a mut dyn SessionState,
    pub shell: &'a mut dyn Shell,
}

/// Ordered set of expanded folder ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedFolders {
    ids: Vec<NodeId>,
}

impl ExpandedFolders {
    pub fn contains(&self, id: &NodeId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Add if absent, remove if present
    pub fn toggle(&mut self, id: &NodeId) {
        if let Some(pos) = self.ids.iter().position(|e| e == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.clone());
        }
    }

    /// Union with `ids`
    pub fn expand(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }
}

/// The scene node tree view-model
pub struct SourceSelector {
    pub(crate) expanded_folders: ExpandedFolders,
    /// Set right before the tree changes the selection itself, so the echo
    /// of that change doesn't auto-expand and scroll
    pub(crate) selection_from_tree: bool,
    pub(crate) settings: SelectorSettings,
}

impl SourceSelector {
    pub fn new(settings: SelectorSettings) -> Self {
        Self {
            expanded_folders: ExpandedFolders::default(),
            selection_from_tree: false,
            settings,
        }
    }

    pub fn expanded_folders(&self) -> &ExpandedFolders {
        &self.expanded_folders
    }

    pub fn settings(&self) -> &SelectorSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: SelectorSettings) {
        self.settings = settings;
    }
}

impl Default for SourceSelector {
    fn default() -> Self {
        Self::new(SelectorSettings::default())
    }
}
