//! Folder aggregation
//!
//! A folder has no visibility or lock state of its own. Its flags are reduced
//! from every item nested beneath it: visible if *any* item is visible,
//! locked / stream-visible / recording-visible only if *all* items are.
//! An empty folder therefore reports locked, stream-visible and
//! recording-visible, and not visible.

use std::collections::HashMap;

use super::{NodeId, NodeStore, SceneItem, SceneNode, SelectorError, SelectorResult};

/// Parent -> children lookup over one store read
///
/// Built fresh for each read; children keep store order.
pub struct NodeIndex<'a> {
    by_id: HashMap<&'a NodeId, &'a SceneNode>,
    children: HashMap<Option<NodeId>, Vec<&'a SceneNode>>,
    order: &'a [SceneNode],
}

impl<'a> NodeIndex<'a> {
    pub fn new(nodes: &'a [SceneNode]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        let mut children: HashMap<Option<NodeId>, Vec<&'a SceneNode>> = HashMap::new();
        for node in nodes {
            by_id.insert(&node.id, node);
            children.entry(node.parent_id.clone()).or_default().push(node);
        }
        Self {
            by_id,
            children,
            order: nodes,
        }
    }

    pub fn from_store(store: &'a dyn NodeStore) -> Self {
        Self::new(store.nodes())
    }

    pub fn get(&self, id: &NodeId) -> Option<&'a SceneNode> {
        self.by_id.get(id).copied()
    }

    /// Direct children of a folder, or the roots for `None`
    pub fn children_of(&self, parent: Option<&NodeId>) -> &[&'a SceneNode] {
        self.children
            .get(&parent.cloned())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Nodes in store order
    pub fn nodes(&self) -> &'a [SceneNode] {
        self.order
    }

    /// Every item at or below `id`, depth first in child order
    pub fn items_under(&self, id: &NodeId) -> SelectorResult<ItemSet<'a>> {
        let node = self
            .get(id)
            .ok_or_else(|| SelectorError::NodeNotFound(id.clone()))?;
        let mut items = Vec::new();
        self.collect_items(node, &mut items);
        Ok(ItemSet { items })
    }

    fn collect_items(&self, node: &'a SceneNode, out: &mut Vec<&'a SceneNode>) {
        if node.is_item() {
            out.push(node);
            return;
        }
        for child in self.children_of(Some(&node.id)) {
            self.collect_items(child, out);
        }
    }

    /// Ids in rendered row order: depth first from the roots, children in
    /// store order
    ///
    /// Nodes not reachable from a root are left out, as in the render tree.
    pub fn render_order(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.order.len());
        self.collect_ids(None, &mut ids);
        ids
    }

    fn collect_ids(&self, parent: Option<&NodeId>, out: &mut Vec<NodeId>) {
        for child in self.children_of(parent) {
            out.push(child.id.clone());
            if child.is_folder() {
                self.collect_ids(Some(&child.id), out);
            }
        }
    }

    /// Folder ids from the root down to the parent of `id`, excluding `id`
    pub fn ancestors(&self, id: &NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.get(id).and_then(|n| n.parent_id.as_ref());
        while let Some(parent_id) = current {
            path.push(parent_id.clone());
            current = self.get(parent_id).and_then(|n| n.parent_id.as_ref());
        }
        path.reverse();
        path
    }
}

/// The items under one node, in order
#[derive(Debug, Clone)]
pub struct ItemSet<'a> {
    items: Vec<&'a SceneNode>,
}

impl<'a> ItemSet<'a> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn nodes(&self) -> &[&'a SceneNode] {
        &self.items
    }

    pub fn ids(&self) -> Vec<NodeId> {
        self.items.iter().map(|n| n.id.clone()).collect()
    }

    pub fn first(&self) -> Option<(&'a SceneNode, &'a SceneItem)> {
        self.items
            .first()
            .and_then(|n| n.as_item().map(|item| (*n, item)))
    }

    fn scene_items(&self) -> impl Iterator<Item = &'a SceneItem> + '_ {
        self.items.iter().filter_map(|n| n.as_item())
    }

    pub fn is_visible(&self) -> bool {
        self.scene_items().any(|i| i.visible)
    }

    pub fn is_locked(&self) -> bool {
        self.scene_items().all(|i| i.locked)
    }

    pub fn is_stream_visible(&self) -> bool {
        self.scene_items().all(|i| i.stream_visible)
    }

    pub fn is_recording_visible(&self) -> bool {
        self.scene_items().all(|i| i.recording_visible)
    }

    pub fn flags(&self) -> NodeFlags {
        NodeFlags {
            visible: self.is_visible(),
            locked: self.is_locked(),
            stream_visible: self.is_stream_visible(),
            recording_visible: self.is_recording_visible(),
        }
    }
}

/// Aggregated display flags of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeFlags {
    pub visible: bool,
    pub locked: bool,
    pub stream_visible: bool,
    pub recording_visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SceneItem, SourceId};

    fn item(visible: bool, locked: bool) -> SceneItem {
        SceneItem {
            source_id: SourceId::new("s"),
            visible,
            locked,
            stream_visible: true,
            recording_visible: true,
            video: true,
            source_type: "image_source".to_string(),
        }
    }

    /// [Folder A, X (in A), Y (in A), Z]
    fn scenario(x: SceneItem, y: SceneItem) -> Vec<SceneNode> {
        vec![
            SceneNode::folder("a", "A"),
            SceneNode::item("x", "X", x).in_folder("a"),
            SceneNode::item("y", "Y", y).in_folder("a"),
            SceneNode::item("z", "Z", item(true, false)),
        ]
    }

    #[test]
    fn test_items_under_folder_in_child_order() {
        let nodes = scenario(item(true, false), item(false, false));
        let index = NodeIndex::new(&nodes);
        let items = index.items_under(&NodeId::from("a")).unwrap();
        assert_eq!(items.ids(), vec![NodeId::from("x"), NodeId::from("y")]);
    }

    #[test]
    fn test_items_under_item_is_itself() {
        let nodes = scenario(item(true, false), item(false, false));
        let index = NodeIndex::new(&nodes);
        let items = index.items_under(&NodeId::from("z")).unwrap();
        assert_eq!(items.ids(), vec![NodeId::from("z")]);
    }

    #[test]
    fn test_items_under_unknown_node() {
        let nodes = scenario(item(true, false), item(false, false));
        let index = NodeIndex::new(&nodes);
        assert_eq!(
            index.items_under(&NodeId::from("nope")).unwrap_err(),
            SelectorError::NodeNotFound(NodeId::from("nope"))
        );
    }

    #[test]
    fn test_items_under_nested_folders() {
        let nodes = vec![
            SceneNode::folder("outer", "Outer"),
            SceneNode::item("i1", "I1", item(true, false)).in_folder("outer"),
            SceneNode::folder("inner", "Inner").in_folder("outer"),
            SceneNode::item("i2", "I2", item(true, false)).in_folder("inner"),
            SceneNode::item("i3", "I3", item(true, false)).in_folder("outer"),
        ];
        let index = NodeIndex::new(&nodes);
        let items = index.items_under(&NodeId::from("outer")).unwrap();
        assert_eq!(
            items.ids(),
            vec![NodeId::from("i1"), NodeId::from("i2"), NodeId::from("i3")]
        );
    }

    #[test]
    fn test_render_order_nests_children_under_folders() {
        let nodes = vec![
            SceneNode::folder("a", "A"),
            SceneNode::item("z", "Z", item(true, false)),
            SceneNode::item("x", "X", item(true, false)).in_folder("a"),
            SceneNode::item("y", "Y", item(true, false)).in_folder("a"),
            SceneNode::item("orphan", "O", item(true, false)).in_folder("gone"),
        ];
        let index = NodeIndex::new(&nodes);
        assert_eq!(
            index.render_order(),
            vec![
                NodeId::from("a"),
                NodeId::from("x"),
                NodeId::from("y"),
                NodeId::from("z")
            ]
        );
    }

    #[test]
    fn test_folder_visible_if_any_item_visible() {
        let nodes = scenario(item(true, false), item(false, false));
        let index = NodeIndex::new(&nodes);
        assert!(index.items_under(&NodeId::from("a")).unwrap().is_visible());

        let nodes = scenario(item(false, false), item(false, false));
        let index = NodeIndex::new(&nodes);
        assert!(!index.items_under(&NodeId::from("a")).unwrap().is_visible());
    }

    #[test]
    fn test_folder_locked_only_if_all_locked() {
        let nodes = scenario(item(true, true), item(true, false));
        let index = NodeIndex::new(&nodes);
        assert!(!index.items_under(&NodeId::from("a")).unwrap().is_locked());

        let nodes = scenario(item(true, true), item(true, true));
        let index = NodeIndex::new(&nodes);
        assert!(index.items_under(&NodeId::from("a")).unwrap().is_locked());
    }

    #[test]
    fn test_stream_and_recording_reduce_with_all() {
        let mut x = item(true, false);
        x.stream_visible = false;
        let mut y = item(true, false);
        y.recording_visible = false;
        let nodes = scenario(x, y);
        let index = NodeIndex::new(&nodes);
        let flags = index.items_under(&NodeId::from("a")).unwrap().flags();
        assert!(!flags.stream_visible);
        assert!(!flags.recording_visible);
    }

    #[test]
    fn test_empty_folder_vacuous_flags() {
        let nodes = vec![SceneNode::folder("empty", "Empty")];
        let index = NodeIndex::new(&nodes);
        let items = index.items_under(&NodeId::from("empty")).unwrap();
        assert!(items.is_empty());
        assert_eq!(
            items.flags(),
            NodeFlags {
                visible: false,
                locked: true,
                stream_visible: true,
                recording_visible: true,
            }
        );
    }

    #[test]
    fn test_ancestors_excludes_self() {
        let nodes = vec![
            SceneNode::folder("outer", "Outer"),
            SceneNode::folder("inner", "Inner").in_folder("outer"),
            SceneNode::item("leaf", "Leaf", item(true, false)).in_folder("inner"),
        ];
        let index = NodeIndex::new(&nodes);
        assert_eq!(
            index.ancestors(&NodeId::from("leaf")),
            vec![NodeId::from("outer"), NodeId::from("inner")]
        );
        assert!(index.ancestors(&NodeId::from("outer")).is_empty());
    }

    #[test]
    fn test_children_of_roots() {
        let nodes = scenario(item(true, false), item(false, false));
        let index = NodeIndex::new(&nodes);
        let roots: Vec<&str> = index
            .children_of(None)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(roots, vec!["a", "z"]);
    }
}
