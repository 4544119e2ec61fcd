//! Node views and the render tree
//!
//! Both are rebuilt from the store on every read.

use serde::Serialize;
use std::collections::HashMap;

use crate::core::{
    NodeFlags, NodeId, NodeIndex, NodeStore, PropertiesManager, RecordingMode, SceneNode,
};
use crate::ui::icons::{self, DisplayCatalog};

use super::{EditorContext, SourceSelector};

/// Display state of one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub id: NodeId,
    pub title: String,
    pub icon: String,
    pub is_visible: bool,
    pub is_locked: bool,
    pub is_stream_visible: bool,
    pub is_recording_visible: bool,
    pub is_folder: bool,
    pub parent_id: Option<NodeId>,
}

impl NodeView {
    pub fn recording_mode(&self) -> RecordingMode {
        RecordingMode::from_flags(self.is_stream_visible, self.is_recording_visible)
    }

    pub fn lock_icon(&self) -> &'static str {
        if self.is_locked { icons::LOCKED } else { icons::UNLOCKED }
    }

    pub fn visibility_icon(&self) -> &'static str {
        if self.is_visible { icons::VISIBLE } else { icons::HIDDEN }
    }
}

/// One row of the render tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub view: NodeView,
    /// Items are leaves; folders never are, even when empty
    pub is_leaf: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Ids in depth-first order
    pub fn flatten_ids(nodes: &[TreeNode]) -> Vec<NodeId> {
        let mut ids = Vec::new();
        for node in nodes {
            ids.push(node.view.id.clone());
            ids.extend(Self::flatten_ids(&node.children));
        }
        ids
    }
}

/// Nest views under their parents, keeping input order among siblings
///
/// Views whose parent is not in `views` are not reachable from a root and
/// are left out.
pub fn build_tree(views: Vec<NodeView>) -> Vec<TreeNode> {
    let mut by_parent: HashMap<Option<NodeId>, Vec<NodeView>> = HashMap::new();
    for view in views {
        by_parent.entry(view.parent_id.clone()).or_default().push(view);
    }
    attach_children(None, &mut by_parent)
}

fn attach_children(
    parent: Option<NodeId>,
    by_parent: &mut HashMap<Option<NodeId>, Vec<NodeView>>,
) -> Vec<TreeNode> {
    let Some(views) = by_parent.remove(&parent) else {
        return Vec::new();
    };

    views
        .into_iter()
        .map(|view| {
            let children = if view.is_folder {
                attach_children(Some(view.id.clone()), by_parent)
            } else {
                Vec::new()
            };
            TreeNode {
                is_leaf: !view.is_folder,
                children,
                view,
            }
        })
        .collect()
}

impl SourceSelector {
    /// Views of every node, in store order
    pub fn node_views(&self, scene: &dyn NodeStore, catalog: &dyn DisplayCatalog) -> Vec<NodeView> {
        let index = NodeIndex::from_store(scene);
        scene
            .nodes()
            .iter()
            .filter_map(|node| {
                let flags = match index.items_under(&node.id) {
                    Ok(items) => items.flags(),
                    Err(e) => {
                        log::debug!("Skipping node view: {}", e);
                        return None;
                    }
                };
                Some(self.view_for(node, flags, scene, catalog))
            })
            .collect()
    }

    /// View of a single node
    pub fn node_view(
        &self,
        id: &NodeId,
        scene: &dyn NodeStore,
        catalog: &dyn DisplayCatalog,
    ) -> Option<NodeView> {
        let index = NodeIndex::from_store(scene);
        let node = index.get(id)?;
        let flags = index.items_under(id).ok()?.flags();
        Some(self.view_for(node, flags, scene, catalog))
    }

    fn view_for(
        &self,
        node: &SceneNode,
        flags: NodeFlags,
        scene: &dyn NodeStore,
        catalog: &dyn DisplayCatalog,
    ) -> NodeView {
        NodeView {
            id: node.id.clone(),
            title: node_title(node, scene),
            icon: self.determine_icon(node, scene, catalog),
            is_visible: flags.visible,
            is_locked: flags.locked,
            is_stream_visible: flags.stream_visible,
            is_recording_visible: flags.recording_visible,
            is_folder: node.is_folder(),
            parent_id: node.parent_id.clone(),
        }
    }

    fn determine_icon(
        &self,
        node: &SceneNode,
        scene: &dyn NodeStore,
        catalog: &dyn DisplayCatalog,
    ) -> String {
        let Some(item) = node.as_item() else {
            return icons::folder_icon(self.expanded_folders.contains(&node.id)).to_string();
        };

        let Some(source) = scene.source(&item.source_id) else {
            return icons::GENERIC_SOURCE.to_string();
        };

        let icon = match source.properties_manager {
            PropertiesManager::Streamlabels => icons::STREAMLABELS,
            PropertiesManager::Widget => source
                .widget_type
                .as_deref()
                .and_then(|t| catalog.widget_icon(t))
                .unwrap_or(icons::UNKNOWN_WIDGET),
            PropertiesManager::Default => catalog
                .source_icon(&source.source_type)
                .unwrap_or(icons::GENERIC_SOURCE),
        };
        icon.to_string()
    }

    /// Render-ready tree of the active scene
    pub fn tree(&self, scene: &dyn NodeStore, catalog: &dyn DisplayCatalog) -> Vec<TreeNode> {
        build_tree(self.node_views(scene, catalog))
    }

    pub fn tree_for(&self, cx: &EditorContext<'_>) -> Vec<TreeNode> {
        self.tree(cx.scene, cx.catalog)
    }

    /// Whether the active scene has any folder
    pub fn has_folders(&self, scene: &dyn NodeStore) -> bool {
        scene.nodes().iter().any(SceneNode::is_folder)
    }

    /// Whether to show the "how to expand folders" hint
    pub fn show_folder_help_tip(&self, scene: &dyn NodeStore) -> bool {
        self.settings.show_folder_help_tip && self.has_folders(scene)
    }

    /// Row actions only make sense for nodes with at least one item
    pub fn can_show_actions(&self, id: &NodeId, scene: &dyn NodeStore) -> bool {
        NodeIndex::from_store(scene)
            .items_under(id)
            .map(|items| !items.is_empty())
            .unwrap_or(false)
    }
}

/// Items show their source's name, folders their own
fn node_title(node: &SceneNode, scene: &dyn NodeStore) -> String {
    match node.as_item() {
        Some(item) => scene
            .source(&item.source_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| node.name.clone()),
        None => node.name.clone(),
    }
}
