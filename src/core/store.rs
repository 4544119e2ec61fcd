//! Read-only access to the scene data store
//!
//! The store is the single source of truth. Nothing here caches derived
//! state; callers re-read on every event.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use super::{NodeId, SceneNode, SelectorError, SelectorResult, Source, SourceId};

/// Node store contract consumed by the selector
pub trait NodeStore {
    /// Id of the scene being edited, if any
    fn active_scene_id(&self) -> Option<&str>;

    /// All nodes of the active scene, in store order
    fn nodes(&self) -> &[SceneNode];

    fn node(&self, id: &NodeId) -> Option<&SceneNode> {
        self.nodes().iter().find(|n| &n.id == id)
    }

    fn source(&self, id: &SourceId) -> Option<&Source>;
}

/// In-memory store snapshot, loadable from JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    #[serde(default)]
    pub scene_id: Option<String>,
    #[serde(default)]
    pub nodes: Vec<SceneNode>,
    #[serde(default)]
    pub sources: HashMap<SourceId, Source>,
}

impl SceneSnapshot {
    pub fn new(scene_id: impl Into<String>) -> Self {
        Self {
            scene_id: Some(scene_id.into()),
            nodes: Vec::new(),
            sources: HashMap::new(),
        }
    }

    pub fn with_node(mut self, node: SceneNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.sources.insert(source.id.clone(), source);
        self
    }

    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| &n.id == id)
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scene snapshot: {}", e))?;

        let snapshot: SceneSnapshot = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse scene snapshot: {}", e))?;

        log::debug!(
            "Loaded scene snapshot from {:?} ({} nodes, {} sources)",
            path,
            snapshot.nodes.len(),
            snapshot.sources.len()
        );
        Ok(snapshot)
    }

    /// Check the invariants the selector relies on but does not defend
    ///
    /// - node ids are unique
    /// - a `parent_id` names an existing folder
    /// - no node is its own ancestor
    /// - every item's source exists
    pub fn validate(&self) -> SelectorResult<()> {
        let mut by_id: HashMap<&NodeId, &SceneNode> = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if by_id.insert(&node.id, node).is_some() {
                return Err(SelectorError::MalformedScene(format!(
                    "duplicate node id {}",
                    node.id
                )));
            }
        }

        for node in &self.nodes {
            if let Some(parent_id) = &node.parent_id {
                match by_id.get(parent_id) {
                    Some(parent) if parent.is_folder() => {}
                    Some(_) => {
                        return Err(SelectorError::MalformedScene(format!(
                            "parent {} of {} is not a folder",
                            parent_id, node.id
                        )));
                    }
                    None => {
                        return Err(SelectorError::MalformedScene(format!(
                            "parent {} of {} does not exist",
                            parent_id, node.id
                        )));
                    }
                }
            }

            if let Some(item) = node.as_item()
                && !self.sources.contains_key(&item.source_id)
            {
                return Err(SelectorError::SourceNotFound(item.source_id.clone()));
            }
        }

        // Walk each parent chain until it reaches a root or repeats
        for node in &self.nodes {
            let mut seen: HashSet<&NodeId> = HashSet::new();
            let mut current = node;
            seen.insert(&current.id);
            while let Some(parent_id) = &current.parent_id {
                if !seen.insert(parent_id) {
                    return Err(SelectorError::MalformedScene(format!(
                        "node {} is its own ancestor",
                        parent_id
                    )));
                }
                current = by_id[parent_id];
            }
        }

        Ok(())
    }
}

impl NodeStore for SceneSnapshot {
    fn active_scene_id(&self) -> Option<&str> {
        self.scene_id.as_deref()
    }

    fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    fn source(&self, id: &SourceId) -> Option<&Source> {
        self.sources.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PropertiesManager, SceneItem};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source(id: &str) -> Source {
        Source {
            id: SourceId::new(id),
            name: id.to_uppercase(),
            source_type: "image_source".to_string(),
            properties_manager: PropertiesManager::Default,
            widget_type: None,
            has_props: true,
        }
    }

    fn item(source: &str) -> SceneItem {
        SceneItem {
            source_id: SourceId::new(source),
            visible: true,
            locked: false,
            stream_visible: true,
            recording_visible: true,
            video: true,
            source_type: "image_source".to_string(),
        }
    }

    fn well_formed() -> SceneSnapshot {
        SceneSnapshot::new("scene")
            .with_source(source("s1"))
            .with_node(SceneNode::folder("a", "A"))
            .with_node(SceneNode::item("x", "X", item("s1")).in_folder("a"))
            .with_node(SceneNode::item("z", "Z", item("s1")))
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(well_formed().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let snapshot = well_formed().with_node(SceneNode::folder("a", "Again"));
        assert!(matches!(snapshot.validate(), Err(SelectorError::MalformedScene(_))));
    }

    #[test]
    fn test_validate_rejects_missing_parent() {
        let snapshot = well_formed().with_node(SceneNode::folder("b", "B").in_folder("nope"));
        assert!(matches!(snapshot.validate(), Err(SelectorError::MalformedScene(_))));
    }

    #[test]
    fn test_validate_rejects_item_parent() {
        let snapshot = well_formed().with_node(SceneNode::folder("b", "B").in_folder("z"));
        assert!(matches!(snapshot.validate(), Err(SelectorError::MalformedScene(_))));
    }

    #[test]
    fn test_validate_rejects_cycle() {
        let snapshot = SceneSnapshot::new("scene")
            .with_node(SceneNode::folder("a", "A").in_folder("b"))
            .with_node(SceneNode::folder("b", "B").in_folder("a"));
        assert!(matches!(snapshot.validate(), Err(SelectorError::MalformedScene(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_source() {
        let snapshot = well_formed().with_node(SceneNode::item("y", "Y", item("missing")));
        assert_eq!(
            snapshot.validate(),
            Err(SelectorError::SourceNotFound(SourceId::from("missing")))
        );
    }

    #[test]
    fn test_node_lookup() {
        let snapshot = well_formed();
        assert_eq!(snapshot.node(&NodeId::from("x")).unwrap().name, "X");
        assert!(snapshot.node(&NodeId::from("missing")).is_none());
        assert_eq!(snapshot.active_scene_id(), Some("scene"));
    }

    #[test]
    fn test_load_from_file() {
        let json = serde_json::to_string(&well_formed()).unwrap();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = SceneSnapshot::load(file.path()).unwrap();
        assert_eq!(loaded.nodes.len(), 3);
        assert!(loaded.source(&SourceId::from("s1")).is_some());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let err = SceneSnapshot::load(file.path()).unwrap_err();
        assert!(err.contains("Failed to parse"));
    }
}
