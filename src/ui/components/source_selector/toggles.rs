//! Row toggles: visibility, lock and selective recording
//!
//! Each toggle reads the aggregated state of the node, flips it and submits
//! one command covering every item under the node.

use crate::commands::{CommandReceipt, EditorCommand};
use crate::core::{NodeId, NodeIndex, RecordingMode, SelectorError, SelectorResult, SessionState};

use super::{EditorContext, SourceSelector};

impl SourceSelector {
    pub fn toggle_visibility(
        &self,
        node_id: &NodeId,
        cx: &mut EditorContext<'_>,
    ) -> Option<CommandReceipt> {
        let command = self.visibility_command(node_id, cx);
        submit_or_log(command, cx)
    }

    fn visibility_command(
        &self,
        node_id: &NodeId,
        cx: &EditorContext<'_>,
    ) -> SelectorResult<EditorCommand> {
        let index = NodeIndex::from_store(cx.scene);
        let items = index.items_under(node_id)?;
        // Hide when anything is showing
        Ok(EditorCommand::HideItems {
            hidden: items.is_visible(),
            items: items.ids(),
        })
    }

    pub fn toggle_lock(
        &self,
        node_id: &NodeId,
        cx: &mut EditorContext<'_>,
    ) -> Option<CommandReceipt> {
        let command = self.lock_command(node_id, cx);
        submit_or_log(command, cx)
    }

    fn lock_command(
        &self,
        node_id: &NodeId,
        cx: &EditorContext<'_>,
    ) -> SelectorResult<EditorCommand> {
        let index = NodeIndex::from_store(cx.scene);
        let items = index.items_under(node_id)?;
        Ok(EditorCommand::SetLocked {
            locked: !items.is_locked(),
            items: items.ids(),
        })
    }

    /// Advance the node's selective-recording mode
    ///
    /// Locked nodes don't change.
    pub fn cycle_selective_recording(
        &self,
        node_id: &NodeId,
        cx: &mut EditorContext<'_>,
    ) -> Option<CommandReceipt> {
        let command = self.cycle_command(node_id, cx);
        submit_or_log(command, cx)
    }

    fn cycle_command(
        &self,
        node_id: &NodeId,
        cx: &EditorContext<'_>,
    ) -> SelectorResult<EditorCommand> {
        let index = NodeIndex::from_store(cx.scene);
        let items = index.items_under(node_id)?;
        if items.is_locked() {
            return Err(SelectorError::Blocked("node is locked"));
        }

        let current =
            RecordingMode::from_flags(items.is_stream_visible(), items.is_recording_visible());
        let (stream_visible, recording_visible) = current.next().flags();
        log::debug!(
            "Selective recording for {}: {:?} -> {:?}",
            node_id,
            current,
            current.next()
        );

        Ok(EditorCommand::SetSelectiveVisibility {
            items: items.ids(),
            stream_visible,
            recording_visible,
        })
    }

    pub fn selective_recording_enabled(&self, session: &dyn SessionState) -> bool {
        session.selective_recording()
    }

    pub fn selective_recording_locked(&self, session: &dyn SessionState) -> bool {
        session.selective_recording_locked()
    }

    /// Flip the global selective-recording switch
    ///
    /// Returns whether the switch changed; it can't while a stream, a
    /// recording or the replay buffer is running.
    pub fn toggle_selective_recording(&self, cx: &mut EditorContext<'_>) -> bool {
        if cx.session.selective_recording_locked() {
            log::debug!("Selective recording is locked while the session is live");
            return false;
        }
        let enabled = !cx.session.selective_recording();
        cx.session.set_selective_recording(enabled);
        log::info!(
            "Selective recording {}",
            if enabled { "enabled" } else { "disabled" }
        );
        true
    }
}

pub(super) fn submit_or_log(
    command: SelectorResult<EditorCommand>,
    cx: &EditorContext<'_>,
) -> Option<CommandReceipt> {
    match command {
        Ok(command) => Some(cx.commands.submit(command)),
        Err(e) => {
            log::debug!("Not submitting: {}", e);
            None
        }
    }
}
