//! Studio controls: add, group, remove, properties and the context menu

use crate::commands::{CommandReceipt, EditorCommand};
use crate::core::{
    NodeId, NodeIndex, SelectorError, SelectorResult, can_group_into_folder, closest_parent,
};

use super::toggles::submit_or_log;
use super::{ContextMenuOptions, EditorContext, SourceSelector};

impl SourceSelector {
    /// Open the source showcase for the active scene
    pub fn add_source(&self, cx: &mut EditorContext<'_>) {
        if cx.scene.active_scene_id().is_some() {
            cx.shell.show_source_showcase();
        }
    }

    /// Create a folder, wrapping the selection when it can be grouped
    pub fn add_folder(&self, cx: &mut EditorContext<'_>) -> Option<CommandReceipt> {
        let command = self.folder_command(cx);
        submit_or_log(command, cx)
    }

    fn folder_command(&self, cx: &EditorContext<'_>) -> SelectorResult<EditorCommand> {
        let scene_id = cx
            .scene
            .active_scene_id()
            .ok_or(SelectorError::NoActiveScene)?;
        let index = NodeIndex::from_store(cx.scene);
        let selected = cx.selection.selected_ids();

        let (items, parent_id) = if can_group_into_folder(&index, selected) {
            (selected.to_vec(), closest_parent(&index, selected))
        } else {
            (Vec::new(), None)
        };

        Ok(EditorCommand::CreateFolder {
            scene_id: scene_id.to_string(),
            folder_id: NodeId::new_folder(),
            items,
            parent_id,
        })
    }

    /// Remove the selected nodes
    pub fn remove_items(&self, cx: &mut EditorContext<'_>) -> Option<CommandReceipt> {
        let nodes = cx.selection.selected_ids().to_vec();
        if nodes.is_empty() {
            return None;
        }
        log::info!("Removing {} node(s)", nodes.len());
        Some(cx.commands.submit(EditorCommand::RemoveNodes { nodes }))
    }

    /// Open whatever settings fit the node
    ///
    /// A folder stands for its first item. Scene references switch scenes,
    /// audio-only sources open the advanced audio settings.
    pub fn source_properties(
        &self,
        node_id: Option<&NodeId>,
        cx: &mut EditorContext<'_>,
    ) -> Option<CommandReceipt> {
        let command = self.properties_command(node_id, cx);
        submit_or_log(command, cx)
    }

    fn properties_command(
        &self,
        node_id: Option<&NodeId>,
        cx: &EditorContext<'_>,
    ) -> SelectorResult<EditorCommand> {
        let index = NodeIndex::from_store(cx.scene);
        let node = node_id
            .and_then(|id| index.get(id))
            .or_else(|| {
                cx.selection
                    .selected_ids()
                    .first()
                    .and_then(|id| index.get(id))
            })
            .ok_or_else(|| match node_id {
                Some(id) => SelectorError::NodeNotFound(id.clone()),
                None => SelectorError::Blocked("nothing selected"),
            })?;

        let items = index.items_under(&node.id)?;
        let (_, item) = items
            .first()
            .ok_or(SelectorError::Blocked("folder has no items"))?;

        let command = if item.is_scene() {
            EditorCommand::MakeSceneActive {
                scene_id: item.source_id.clone(),
            }
        } else if !item.video {
            EditorCommand::ShowAdvancedAudioSettings {
                source_id: item.source_id.clone(),
            }
        } else {
            EditorCommand::ShowSourceProperties {
                source_id: item.source_id.clone(),
            }
        };
        Ok(command)
    }

    /// Whether the properties button is enabled
    pub fn can_show_properties(&self, cx: &EditorContext<'_>) -> bool {
        if cx.selection.selected_ids().is_empty() {
            return false;
        }
        cx.selection
            .last_selected_id()
            .and_then(|id| cx.scene.node(id))
            .and_then(|node| node.as_item())
            .and_then(|item| cx.scene.source(&item.source_id))
            .map(|source| source.has_props)
            .unwrap_or(false)
    }

    /// Open the edit menu on a node, or on empty space for `None`
    ///
    /// Right-clicking an unselected node selects it first.
    pub fn show_context_menu(&self, node_id: Option<&NodeId>, cx: &mut EditorContext<'_>) {
        let Some(scene_id) = cx.scene.active_scene_id().map(str::to_string) else {
            log::debug!("No active scene, not opening the edit menu");
            return;
        };

        let index = NodeIndex::from_store(cx.scene);
        let node = node_id.and_then(|id| index.get(id));

        let options = match node {
            Some(node) => {
                let source_id = match node.as_item() {
                    Some(item) => Some(item.source_id.clone()),
                    None => index
                        .items_under(&node.id)
                        .ok()
                        .and_then(|items| items.first().map(|(_, item)| item.source_id.clone())),
                };

                if !cx.selection.is_selected(&node.id) {
                    cx.selection.select(vec![node.id.clone()]);
                }

                ContextMenuOptions {
                    scene_id,
                    show_scene_item_menu: true,
                    source_id,
                }
            }
            None => ContextMenuOptions {
                scene_id,
                show_scene_item_menu: false,
                source_id: None,
            },
        };

        cx.shell.show_context_menu(options);
    }
}
