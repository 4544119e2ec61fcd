//! Command submission
//!
//! Submission never blocks. The command is queued immediately and the caller
//! gets a [`CommandReceipt`] it may await for the outcome or simply drop.

use chrono::{DateTime, Utc};
use futures::FutureExt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::{mpsc, oneshot};

use super::EditorCommand;

/// Command layer contract
pub trait CommandSink {
    fn submit(&self, command: EditorCommand) -> CommandReceipt;
}

/// What the command layer did with a submitted command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Accepted,
    Rejected(String),
    /// The command layer went away without answering
    Dropped,
}

enum ReceiptState {
    Waiting(oneshot::Receiver<Result<(), String>>),
    Ready(Option<CommandOutcome>),
}

/// Future resolving to the [`CommandOutcome`] of one submission
pub struct CommandReceipt {
    state: ReceiptState,
}

impl CommandReceipt {
    pub fn waiting(rx: oneshot::Receiver<Result<(), String>>) -> Self {
        Self {
            state: ReceiptState::Waiting(rx),
        }
    }

    /// A receipt that is already resolved
    pub fn ready(outcome: CommandOutcome) -> Self {
        Self {
            state: ReceiptState::Ready(Some(outcome)),
        }
    }

    /// Non-blocking check, `None` while the command layer hasn't answered
    pub fn try_outcome(&mut self) -> Option<CommandOutcome> {
        if let ReceiptState::Waiting(rx) = &mut self.state {
            let outcome = match rx.try_recv() {
                Ok(reply) => outcome_from_reply(reply),
                Err(oneshot::error::TryRecvError::Empty) => return None,
                Err(oneshot::error::TryRecvError::Closed) => CommandOutcome::Dropped,
            };
            self.state = ReceiptState::Ready(Some(outcome));
        }
        match &self.state {
            ReceiptState::Ready(outcome) => outcome.clone(),
            ReceiptState::Waiting(_) => None,
        }
    }
}

fn outcome_from_reply(reply: Result<(), String>) -> CommandOutcome {
    match reply {
        Ok(()) => CommandOutcome::Accepted,
        Err(reason) => CommandOutcome::Rejected(reason),
    }
}

impl Future for CommandReceipt {
    type Output = CommandOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.state {
            ReceiptState::Waiting(rx) => rx.poll_unpin(cx).map(|reply| match reply {
                Ok(reply) => outcome_from_reply(reply),
                Err(_) => CommandOutcome::Dropped,
            }),
            ReceiptState::Ready(outcome) => {
                Poll::Ready(outcome.take().unwrap_or(CommandOutcome::Dropped))
            }
        }
    }
}

/// A queued command waiting for the command layer
#[derive(Debug)]
pub struct PendingCommand {
    pub command: EditorCommand,
    pub submitted_at: DateTime<Utc>,
    reply: oneshot::Sender<Result<(), String>>,
}

impl PendingCommand {
    pub fn accept(self) {
        let _ = self.reply.send(Ok(()));
    }

    pub fn reject(self, reason: impl Into<String>) {
        let _ = self.reply.send(Err(reason.into()));
    }
}

/// Command sink backed by an unbounded channel
///
/// The receiving half belongs to whatever executes commands.
#[derive(Clone)]
pub struct ChannelCommandSink {
    tx: mpsc::UnboundedSender<PendingCommand>,
}

impl ChannelCommandSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PendingCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl CommandSink for ChannelCommandSink {
    fn submit(&self, command: EditorCommand) -> CommandReceipt {
        let (reply, rx) = oneshot::channel();
        let name = command.name();
        let pending = PendingCommand {
            command,
            submitted_at: Utc::now(),
            reply,
        };

        match self.tx.send(pending) {
            Ok(()) => {
                log::debug!("Submitted {}", name);
                CommandReceipt::waiting(rx)
            }
            Err(_) => {
                log::warn!("Command layer is gone, dropping {}", name);
                CommandReceipt::ready(CommandOutcome::Dropped)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeId;

    fn remove(id: &str) -> EditorCommand {
        EditorCommand::RemoveNodes {
            nodes: vec![NodeId::from(id)],
        }
    }

    #[tokio::test]
    async fn test_accepted_command_resolves_receipt() {
        let (sink, mut rx) = ChannelCommandSink::new();
        let receipt = sink.submit(remove("x"));

        let pending = rx.recv().await.unwrap();
        assert_eq!(pending.command, remove("x"));
        pending.accept();

        assert_eq!(receipt.await, CommandOutcome::Accepted);
    }

    #[tokio::test]
    async fn test_rejected_command_carries_reason() {
        let (sink, mut rx) = ChannelCommandSink::new();
        let receipt = sink.submit(remove("x"));

        rx.recv().await.unwrap().reject("node is gone");

        assert_eq!(
            receipt.await,
            CommandOutcome::Rejected("node is gone".to_string())
        );
    }

    #[tokio::test]
    async fn test_unanswered_command_is_dropped() {
        let (sink, mut rx) = ChannelCommandSink::new();
        let receipt = sink.submit(remove("x"));

        drop(rx.recv().await.unwrap());

        assert_eq!(receipt.await, CommandOutcome::Dropped);
    }

    #[test]
    fn test_submit_without_receiver() {
        let (sink, rx) = ChannelCommandSink::new();
        drop(rx);

        let mut receipt = sink.submit(remove("x"));
        assert_eq!(receipt.try_outcome(), Some(CommandOutcome::Dropped));
    }

    #[test]
    fn test_try_outcome_before_and_after_reply() {
        let (sink, mut rx) = ChannelCommandSink::new();
        let mut receipt = sink.submit(remove("x"));
        assert_eq!(receipt.try_outcome(), None);

        rx.try_recv().unwrap().accept();
        assert_eq!(receipt.try_outcome(), Some(CommandOutcome::Accepted));
    }

    #[test]
    fn test_dropped_receipt_still_queues_command() {
        let (sink, mut rx) = ChannelCommandSink::new();
        let _ = sink.submit(remove("x"));
        let _ = sink.submit(remove("y"));

        assert_eq!(rx.try_recv().unwrap().command, remove("x"));
        assert_eq!(rx.try_recv().unwrap().command, remove("y"));
    }

    #[test]
    fn test_submitted_at_is_recent() {
        let (sink, mut rx) = ChannelCommandSink::new();
        let before = Utc::now();
        let _ = sink.submit(remove("x"));
        let pending = rx.try_recv().unwrap();
        assert!(pending.submitted_at >= before);
    }
}
