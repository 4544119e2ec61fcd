//! Editor commands
//!
//! Everything the selector wants changed in the scene goes out as an
//! [`EditorCommand`] through a [`CommandSink`]. The command layer owns
//! execution, undo and failure handling.

mod sink;

use serde::{Deserialize, Serialize};

use crate::core::{NodeId, SourceId};

pub use sink::{ChannelCommandSink, CommandOutcome, CommandReceipt, CommandSink, PendingCommand};

/// Where moved nodes land relative to the destination node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Before,
    After,
    Inside,
}

/// Mutation requests understood by the command layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Hide or show every listed item
    HideItems { items: Vec<NodeId>, hidden: bool },

    SetLocked { items: Vec<NodeId>, locked: bool },

    /// Set both selective-recording channels on every listed item
    SetSelectiveVisibility {
        items: Vec<NodeId>,
        stream_visible: bool,
        recording_visible: bool,
    },

    ReorderNodes {
        nodes: Vec<NodeId>,
        destination: NodeId,
        placement: Placement,
    },

    /// Create a folder, grouping `items` under it when non-empty
    CreateFolder {
        scene_id: String,
        folder_id: NodeId,
        items: Vec<NodeId>,
        parent_id: Option<NodeId>,
    },

    RemoveNodes { nodes: Vec<NodeId> },

    ShowSourceProperties { source_id: SourceId },

    ShowAdvancedAudioSettings { source_id: SourceId },

    /// Switch the editor to the scene an item references
    MakeSceneActive { scene_id: SourceId },
}

impl EditorCommand {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::HideItems { .. } => "HideItems",
            EditorCommand::SetLocked { .. } => "SetLocked",
            EditorCommand::SetSelectiveVisibility { .. } => "SetSelectiveVisibility",
            EditorCommand::ReorderNodes { .. } => "ReorderNodes",
            EditorCommand::CreateFolder { .. } => "CreateFolder",
            EditorCommand::RemoveNodes { .. } => "RemoveNodes",
            EditorCommand::ShowSourceProperties { .. } => "ShowSourceProperties",
            EditorCommand::ShowAdvancedAudioSettings { .. } => "ShowAdvancedAudioSettings",
            EditorCommand::MakeSceneActive { .. } => "MakeSceneActive",
        }
    }
}
