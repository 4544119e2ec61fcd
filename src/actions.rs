//! Tree gestures
//!
//! Every user gesture the tree can produce, so a presentation layer can
//! forward events without knowing which selector method handles them.

use serde::{Deserialize, Serialize};

use crate::commands::CommandReceipt;
use crate::core::NodeId;
use crate::ui::components::{DropInfo, EditorContext, Modifiers, SourceSelector};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SelectorAction {
    Select { node_id: NodeId, modifiers: Modifiers },
    ToggleFolder { node_id: NodeId },
    Drop(DropInfo),
    ToggleVisibility { node_id: NodeId },
    ToggleLock { node_id: NodeId },
    CycleSelectiveRecording { node_id: NodeId },
    ToggleSelectiveRecording,
    AddSource,
    AddFolder,
    RemoveItems,
    /// Double click on a row, or the properties button (`None`)
    ShowProperties { node_id: Option<NodeId> },
    /// Right click on a row, or on empty space (`None`)
    ShowContextMenu { node_id: Option<NodeId> },
    /// The selection was changed somewhere else in the editor
    SelectionChanged,
}

impl SourceSelector {
    /// Route a gesture to its handler
    ///
    /// Returns the receipt when the gesture submitted a command.
    pub fn dispatch(
        &mut self,
        action: SelectorAction,
        cx: &mut EditorContext<'_>,
    ) -> Option<CommandReceipt> {
        match action {
            SelectorAction::Select { node_id, modifiers } => {
                self.make_active(&node_id, modifiers, cx);
                None
            }
            SelectorAction::ToggleFolder { node_id } => {
                self.toggle_folder(&node_id);
                None
            }
            SelectorAction::Drop(drop) => self.handle_drop(&drop, cx),
            SelectorAction::ToggleVisibility { node_id } => self.toggle_visibility(&node_id, cx),
            SelectorAction::ToggleLock { node_id } => self.toggle_lock(&node_id, cx),
            SelectorAction::CycleSelectiveRecording { node_id } => {
                self.cycle_selective_recording(&node_id, cx)
            }
            SelectorAction::ToggleSelectiveRecording => {
                self.toggle_selective_recording(cx);
                None
            }
            SelectorAction::AddSource => {
                self.add_source(cx);
                None
            }
            SelectorAction::AddFolder => self.add_folder(cx),
            SelectorAction::RemoveItems => self.remove_items(cx),
            SelectorAction::ShowProperties { node_id } => {
                self.source_properties(node_id.as_ref(), cx)
            }
            SelectorAction::ShowContextMenu { node_id } => {
                self.show_context_menu(node_id.as_ref(), cx);
                None
            }
            SelectorAction::SelectionChanged => {
                self.on_external_selection_change(cx);
                None
            }
        }
    }
}
