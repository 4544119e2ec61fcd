//! Drag-and-drop reordering
//!
//! A drop on a row is ambiguous: it may mean "into this folder" or "next to
//! this row". The tree widget reports whether the pointer was in the gap
//! between rows and where, and this module turns that into a placement.

use serde::{Deserialize, Serialize};

use crate::commands::{CommandReceipt, EditorCommand, Placement};
use crate::core::{NodeId, NodeIndex, NodeStore, SelectorError, SelectorResult};

use super::{EditorContext, SourceSelector};

/// Drop event as reported by the tree widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropInfo {
    /// Row the drag started on
    pub drag_node: NodeId,
    /// Row the drop landed on
    pub target: NodeId,
    pub target_is_leaf: bool,
    /// Position path of the target row, e.g. `"0-2-1"`
    pub target_pos: String,
    /// Drop slot in the target's sibling list
    pub drop_position: i64,
    /// Pointer was between rows rather than on one
    pub drop_to_gap: bool,
}

/// Resolved reorder request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderPlan {
    pub nodes: Vec<NodeId>,
    pub destination: NodeId,
    pub placement: Placement,
}

/// Placement of a drop relative to its target row
///
/// Dropping onto a folder row (not into a gap) goes inside it. Otherwise the
/// drop slot is compared to the target's own index, the last segment of its
/// position path.
pub fn determine_placement(drop: &DropInfo) -> Placement {
    if !drop.drop_to_gap && !drop.target_is_leaf {
        return Placement::Inside;
    }

    let target_index = drop
        .target_pos
        .rsplit('-')
        .next()
        .and_then(|segment| segment.parse::<i64>().ok());

    match target_index {
        Some(index) if drop.drop_position > index => Placement::After,
        _ => Placement::Before,
    }
}

impl SourceSelector {
    /// Work out what a drop should move and where
    ///
    /// Dragging a selected row moves the whole selection, in scene order.
    /// Dragging an unselected row moves only that row (a folder takes its
    /// contents along).
    pub fn resolve_reorder(
        &self,
        drop: &DropInfo,
        scene: &dyn NodeStore,
        selected: &[NodeId],
    ) -> SelectorResult<ReorderPlan> {
        let index = NodeIndex::from_store(scene);

        let requested: Vec<NodeId> = if selected.contains(&drop.drag_node) {
            selected.to_vec()
        } else {
            vec![drop.drag_node.clone()]
        };

        let nodes: Vec<NodeId> = index
            .nodes()
            .iter()
            .filter(|n| requested.contains(&n.id))
            .map(|n| n.id.clone())
            .collect();
        if nodes.is_empty() {
            return Err(SelectorError::NodeNotFound(drop.drag_node.clone()));
        }

        let destination = index
            .get(&drop.target)
            .ok_or_else(|| SelectorError::NodeNotFound(drop.target.clone()))?;

        Ok(ReorderPlan {
            nodes,
            destination: destination.id.clone(),
            placement: determine_placement(drop),
        })
    }

    /// Handle a drop, submitting one reorder command
    pub fn handle_drop(
        &self,
        drop: &DropInfo,
        cx: &mut EditorContext<'_>,
    ) -> Option<CommandReceipt> {
        let plan = match self.resolve_reorder(drop, cx.scene, cx.selection.selected_ids()) {
            Ok(plan) => plan,
            Err(e) => {
                log::debug!("Ignoring drop: {}", e);
                return None;
            }
        };

        log::info!(
            "Moving {} node(s) {:?} {}",
            plan.nodes.len(),
            plan.placement,
            plan.destination
        );

        Some(cx.commands.submit(EditorCommand::ReorderNodes {
            nodes: plan.nodes,
            destination: plan.destination,
            placement: plan.placement,
        }))
    }
}
