//! Test fixtures for selector tests
//!
//! Provides an in-memory editor (scene, selection, session, command log,
//! shell log) that hands out an [`EditorContext`] over itself.

#![cfg(test)]

use std::cell::RefCell;

use crate::commands::{CommandOutcome, CommandReceipt, CommandSink, EditorCommand};
use crate::core::{
    NodeId, PropertiesManager, SceneItem, SceneNode, SceneSnapshot, ScrollBehavior, Selection,
    SelectionStore, SessionFlags, Source, SourceId,
};
use crate::ui::IconCatalog;
use crate::ui::components::{ContextMenuOptions, EditorContext, Shell};

/// Command sink that records and accepts everything
#[derive(Default)]
pub struct RecordingSink {
    pub submitted: RefCell<Vec<EditorCommand>>,
}

impl CommandSink for RecordingSink {
    fn submit(&self, command: EditorCommand) -> CommandReceipt {
        self.submitted.borrow_mut().push(command);
        CommandReceipt::ready(CommandOutcome::Accepted)
    }
}

/// Shell that records every callback
#[derive(Debug, Default)]
pub struct RecordingShell {
    pub scrolled: Vec<(NodeId, ScrollBehavior)>,
    pub showcase_opened: usize,
    pub menus: Vec<ContextMenuOptions>,
}

impl Shell for RecordingShell {
    fn scroll_into_view(&mut self, node_id: &NodeId, behavior: ScrollBehavior) {
        self.scrolled.push((node_id.clone(), behavior));
    }

    fn show_source_showcase(&mut self) {
        self.showcase_opened += 1;
    }

    fn show_context_menu(&mut self, options: ContextMenuOptions) {
        self.menus.push(options);
    }
}

/// Everything an [`EditorContext`] borrows
pub struct TestEditor {
    pub scene: SceneSnapshot,
    pub selection: Selection,
    pub commands: RecordingSink,
    pub catalog: IconCatalog,
    pub session: SessionFlags,
    pub shell: RecordingShell,
}

impl TestEditor {
    pub fn new(scene: SceneSnapshot) -> Self {
        Self {
            scene,
            selection: Selection::new(),
            commands: RecordingSink::default(),
            catalog: IconCatalog::builtin(),
            session: SessionFlags::default(),
            shell: RecordingShell::default(),
        }
    }

    /// `[Folder A, Item X (in A), Item Y (in A), Item Z]`
    pub fn scenario() -> Self {
        Self::new(scenario_scene())
    }

    pub fn cx(&mut self) -> EditorContext<'_> {
        EditorContext {
            scene: &self.scene,
            selection: &mut self.selection,
            commands: &self.commands,
            catalog: &self.catalog,
            session: &mut self.session,
            shell: &mut self.shell,
        }
    }

    pub fn submitted(&self) -> Vec<EditorCommand> {
        self.commands.submitted.borrow().clone()
    }

    pub fn select(&mut self, raw: &[&str]) {
        self.selection.select(ids(raw));
    }

    pub fn item_mut(&mut self, id: &str) -> &mut SceneItem {
        match self.scene.node_mut(&NodeId::from(id)).map(|n| &mut n.kind) {
            Some(crate::core::NodeKind::Item(item)) => item,
            _ => panic!("{} is not an item", id),
        }
    }
}

pub fn ids(raw: &[&str]) -> Vec<NodeId> {
    raw.iter().map(|s| NodeId::from(*s)).collect()
}

pub fn id(raw: &str) -> NodeId {
    NodeId::from(raw)
}

/// A visible, unlocked video item shown on both channels
pub fn item(source: &str) -> SceneItem {
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

pub fn source(id: &str, name: &str, source_type: &str) -> Source {
    Source {
        id: SourceId::new(id),
        name: name.to_string(),
        source_type: source_type.to_string(),
        properties_manager: PropertiesManager::Default,
        widget_type: None,
        has_props: true,
    }
}

pub fn scenario_scene() -> SceneSnapshot {
    SceneSnapshot::new("scene-1")
        .with_source(source("src-x", "Webcam", "dshow_input"))
        .with_source(source("src-y", "Overlay", "image_source"))
        .with_source(source("src-z", "Desktop", "monitor_capture"))
        .with_node(SceneNode::folder("a", "Folder A"))
        .with_node(SceneNode::item("x", "x", item("src-x")).in_folder("a"))
        .with_node(SceneNode::item("y", "y", item("src-y")).in_folder("a"))
        .with_node(SceneNode::item("z", "z", item("src-z")))
}
