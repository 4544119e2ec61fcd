//! Click selection and selection-driven folder expansion

use serde::{Deserialize, Serialize};

use crate::core::{NodeId, NodeIndex, NodeStore, SelectionStore};

use super::{EditorContext, SourceSelector};

/// Keyboard modifiers held during a click
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Add to the selection
    pub ctrl: bool,
    /// Select a contiguous range from the previous anchor
    pub shift: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            shift: false,
        }
    }

    pub fn shift() -> Self {
        Self {
            ctrl: false,
            shift: true,
        }
    }
}

/// Inclusive run of `order` between `anchor` and `target`
///
/// `None` when either id is not in `order`.
pub fn range_selection(
    order: &[NodeId],
    anchor: &NodeId,
    target: &NodeId,
) -> Option<Vec<NodeId>> {
    let i1 = order.iter().position(|id| id == anchor)?;
    let i2 = order.iter().position(|id| id == target)?;
    let (start, end) = if i1 > i2 { (i2, i1) } else { (i1, i2) };
    Some(order[start..=end].to_vec())
}

impl SourceSelector {
    /// Currently selected ids
    pub fn active_item_ids<'s>(&self, selection: &'s dyn SelectionStore) -> &'s [NodeId] {
        selection.selected_ids()
    }

    /// Handle a click on a tree row
    pub fn make_active(
        &mut self,
        node_id: &NodeId,
        modifiers: Modifiers,
        cx: &mut EditorContext<'_>,
    ) {
        let ids =
            self.resolve_selection(node_id, modifiers, cx.scene, cx.selection.selected_ids());
        log::debug!("Selecting {} node(s) from the tree", ids.len());

        self.selection_from_tree = true;
        cx.selection.select(ids);
    }

    /// Selection a click would produce, without applying it
    pub fn resolve_selection(
        &self,
        node_id: &NodeId,
        modifiers: Modifiers,
        scene: &dyn NodeStore,
        previous: &[NodeId],
    ) -> Vec<NodeId> {
        if modifiers.ctrl {
            let mut ids = previous.to_vec();
            if !ids.contains(node_id) {
                ids.push(node_id.clone());
            }
            return ids;
        }

        if modifiers.shift {
            // Same order the rows are listed in
            let order = NodeIndex::from_store(scene).render_order();
            let range = previous
                .last()
                .and_then(|anchor| range_selection(&order, anchor, node_id));
            match range {
                Some(ids) => return ids,
                None => log::debug!("Range anchor not found, selecting {} alone", node_id),
            }
        }

        vec![node_id.clone()]
    }

    /// React to a selection change made outside the tree
    ///
    /// Expands the folders above a single selected node and scrolls it into
    /// view. The echo of the tree's own selection change is skipped once.
    pub fn on_external_selection_change(&mut self, cx: &mut EditorContext<'_>) {
        if self.selection_from_tree {
            self.selection_from_tree = false;
            return;
        }

        if cx.selection.selected_ids().len() != 1 {
            return;
        }

        let Some(node_id) = cx.selection.last_selected_id().cloned() else {
            return;
        };

        let index = NodeIndex::from_store(cx.scene);
        if index.get(&node_id).is_none() {
            log::debug!("Selected node {} is not in the scene", node_id);
            return;
        }

        if !self.settings.auto_expand_on_select {
            return;
        }

        self.expanded_folders.expand(index.ancestors(&node_id));
        cx.shell.scroll_into_view(&node_id, self.settings.scroll_behavior);
    }

    /// Expand or collapse a folder
    pub fn toggle_folder(&mut self, folder_id: &NodeId) {
        self.expanded_folders.toggle(folder_id);
    }
}
