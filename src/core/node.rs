//! Scene node types
//!
//! Nodes are stored flat. A folder does not own its children; a child names
//! its folder through `parent_id`, and the hierarchy is rebuilt by lookup
//! whenever it is needed.

use serde::{Deserialize, Serialize};

/// Stable identifier of a scene node (item or folder)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// Create a fresh id for a folder that does not exist yet
    pub fn new_folder() -> Self {
        NodeId(format!("folder:{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

/// Identifier of the source an item renders
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(pub String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        SourceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        SourceId(id.to_string())
    }
}

/// Source type tag of items that reference another scene
pub const SCENE_SOURCE_TYPE: &str = "scene";

/// Per-item state read from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    pub source_id: SourceId,
    pub visible: bool,
    pub locked: bool,
    pub stream_visible: bool,
    pub recording_visible: bool,
    /// Whether the source produces video (audio-only sources don't)
    pub video: bool,
    pub source_type: String,
}

impl SceneItem {
    pub fn is_scene(&self) -> bool {
        self.source_type == SCENE_SOURCE_TYPE
    }
}

/// Item or folder payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node_type", rename_all = "snake_case")]
pub enum NodeKind {
    Item(SceneItem),
    Folder,
}

/// A single entry of the scene hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: NodeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl SceneNode {
    pub fn item(id: impl Into<String>, name: impl Into<String>, item: SceneItem) -> Self {
        Self {
            id: NodeId::new(id),
            name: name.into(),
            parent_id: None,
            kind: NodeKind::Item(item),
        }
    }

    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(id),
            name: name.into(),
            parent_id: None,
            kind: NodeKind::Folder,
        }
    }

    /// Builder-style parent assignment
    pub fn in_folder(mut self, parent: impl Into<String>) -> Self {
        self.parent_id = Some(NodeId::new(parent));
        self
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder)
    }

    pub fn is_item(&self) -> bool {
        matches!(self.kind, NodeKind::Item(_))
    }

    pub fn as_item(&self) -> Option<&SceneItem> {
        match &self.kind {
            NodeKind::Item(item) => Some(item),
            NodeKind::Folder => None,
        }
    }
}

/// How a source's settings are managed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertiesManager {
    #[default]
    Default,
    Streamlabels,
    Widget,
}

/// The source an item references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    pub source_type: String,
    #[serde(default)]
    pub properties_manager: PropertiesManager,
    /// Set for widget sources, keys the widget icon catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_type: Option<String>,
    #[serde(default)]
    pub has_props: bool,
}
