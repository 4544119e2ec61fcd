//! Selection state
//!
//! The selection is global: other parts of the editor select nodes too, which
//! is why the selector reads it through [`SelectionStore`] instead of owning it.

use serde::{Deserialize, Serialize};

use super::{NodeId, NodeIndex};

/// Selection store contract
pub trait SelectionStore {
    fn selected_ids(&self) -> &[NodeId];

    fn last_selected_id(&self) -> Option<&NodeId>;

    /// Replace the selection
    fn select(&mut self, ids: Vec<NodeId>);

    fn is_selected(&self, id: &NodeId) -> bool {
        self.selected_ids().contains(id)
    }
}

/// Ordered set of selected node ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: Vec<NodeId>,
    last_selected_id: Option<NodeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }
}

impl SelectionStore for Selection {
    fn selected_ids(&self) -> &[NodeId] {
        &self.ids
    }

    fn last_selected_id(&self) -> Option<&NodeId> {
        self.last_selected_id.as_ref()
    }

    fn select(&mut self, ids: Vec<NodeId>) {
        let mut deduped: Vec<NodeId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        self.last_selected_id = deduped.last().cloned();
        self.ids = deduped;
    }
}

/// Selected nodes that have no selected ancestor
pub fn top_level_selected<'a>(index: &NodeIndex<'a>, selected: &[NodeId]) -> Vec<NodeId> {
    selected
        .iter()
        .filter(|id| index.get(id).is_some())
        .filter(|id| {
            !index
                .ancestors(id)
                .iter()
                .any(|ancestor| selected.contains(ancestor))
        })
        .cloned()
        .collect()
}

/// Whether the selection can be wrapped in a new folder
///
/// True when something is selected and every top-level selected node shares
/// the same parent.
pub fn can_group_into_folder(index: &NodeIndex<'_>, selected: &[NodeId]) -> bool {
    let roots = top_level_selected(index, selected);
    let Some(first) = roots.first() else {
        return false;
    };
    let parent = index.get(first).and_then(|n| n.parent_id.as_ref());
    roots
        .iter()
        .all(|id| index.get(id).and_then(|n| n.parent_id.as_ref()) == parent)
}

/// Shared parent of the top-level selected nodes, `None` at the root
pub fn closest_parent(index: &NodeIndex<'_>, selected: &[NodeId]) -> Option<NodeId> {
    if !can_group_into_folder(index, selected) {
        return None;
    }
    let roots = top_level_selected(index, selected);
    roots
        .first()
        .and_then(|id| index.get(id))
        .and_then(|n| n.parent_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SceneItem, SceneNode, SourceId};

    fn leaf(id: &str) -> SceneNode {
        SceneNode::item(
            id,
            id,
            SceneItem {
                source_id: SourceId::new("s"),
                visible: true,
                locked: false,
                stream_visible: true,
                recording_visible: true,
                video: true,
                source_type: "image_source".to_string(),
            },
        )
    }

    fn nodes() -> Vec<SceneNode> {
        vec![
            SceneNode::folder("a", "A"),
            leaf("x").in_folder("a"),
            leaf("y").in_folder("a"),
            leaf("z"),
        ]
    }

    fn ids(raw: &[&str]) -> Vec<NodeId> {
        raw.iter().map(|s| NodeId::from(*s)).collect()
    }

    #[test]
    fn test_select_tracks_last_selected() {
        let mut selection = Selection::new();
        selection.select(ids(&["x", "y"]));
        assert_eq!(selection.last_selected_id(), Some(&NodeId::from("y")));
        assert!(selection.is_selected(&NodeId::from("x")));

        selection.select(Vec::new());
        assert!(selection.is_empty());
        assert!(selection.last_selected_id().is_none());
    }

    #[test]
    fn test_select_dedupes_keeping_first_position() {
        let mut selection = Selection::new();
        selection.select(ids(&["x", "y", "x"]));
        assert_eq!(selection.ids(), ids(&["x", "y"]).as_slice());
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_top_level_selected_drops_children_of_selected_folders() {
        let nodes = nodes();
        let index = NodeIndex::new(&nodes);
        assert_eq!(
            top_level_selected(&index, &ids(&["x", "a", "z"])),
            ids(&["a", "z"])
        );
    }

    #[test]
    fn test_can_group_siblings() {
        let nodes = nodes();
        let index = NodeIndex::new(&nodes);
        assert!(can_group_into_folder(&index, &ids(&["x", "y"])));
        assert_eq!(closest_parent(&index, &ids(&["x", "y"])), Some(NodeId::from("a")));
    }

    #[test]
    fn test_cannot_group_across_parents() {
        let nodes = nodes();
        let index = NodeIndex::new(&nodes);
        assert!(!can_group_into_folder(&index, &ids(&["x", "z"])));
        assert!(closest_parent(&index, &ids(&["x", "z"])).is_none());
        assert!(!can_group_into_folder(&index, &[]));
    }

    #[test]
    fn test_root_group_has_no_parent() {
        let nodes = nodes();
        let index = NodeIndex::new(&nodes);
        assert!(can_group_into_folder(&index, &ids(&["a", "z"])));
        assert!(closest_parent(&index, &ids(&["a", "z"])).is_none());
    }
}
