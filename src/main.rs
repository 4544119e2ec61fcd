//! Scene Selector - command line front end
//!
//! Loads a scene snapshot and prints its node tree. With `--actions`, replays
//! a list of tree gestures against the snapshot and prints every command the
//! selector submits.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use scene_selector::commands::{ChannelCommandSink, CommandReceipt, PendingCommand};
use scene_selector::core::{NodeId, ScrollBehavior, Selection, SessionFlags};
use scene_selector::logging;
use scene_selector::ui::IconCatalog;
use scene_selector::ui::components::{ContextMenuOptions, Shell, TreeNode};
use scene_selector::{
    EditorContext, SceneSnapshot, SelectorAction, SelectorSettings, SourceSelector,
};

#[derive(Parser)]
#[command(name = "scene-selector")]
#[command(about = "Inspect a scene's node tree and replay selector gestures")]
struct Cli {
    /// Scene snapshot (JSON)
    snapshot: PathBuf,

    /// Print the tree as JSON
    #[arg(long)]
    json: bool,

    /// Expand a folder before printing (repeatable)
    #[arg(long, value_name = "ID")]
    expand: Vec<String>,

    /// JSON array of gestures to replay before printing
    #[arg(long, value_name = "FILE")]
    actions: Option<PathBuf>,
}

/// Shell that only logs what a real presentation layer would do
struct LogShell;

impl Shell for LogShell {
    fn scroll_into_view(&mut self, node_id: &NodeId, behavior: ScrollBehavior) {
        log::info!("Scroll {} into view ({:?})", node_id, behavior);
    }

    fn show_source_showcase(&mut self) {
        log::info!("Open source showcase");
    }

    fn show_context_menu(&mut self, options: ContextMenuOptions) {
        log::info!("Open edit menu: {:?}", options);
    }
}

fn load_actions(path: &Path) -> Result<Vec<SelectorAction>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read actions: {}", e))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse actions: {}", e))
}

fn print_text(nodes: &[TreeNode], depth: usize) {
    for node in nodes {
        let view = &node.view;
        println!(
            "{}{} [{}] {} {} {:?}",
            "  ".repeat(depth),
            view.title,
            view.icon,
            view.visibility_icon(),
            view.lock_icon(),
            view.recording_mode(),
        );
        print_text(&node.children, depth + 1);
    }
}

/// Accept every queued command, printing it as one JSON line
async fn drain_commands(mut rx: tokio::sync::mpsc::UnboundedReceiver<PendingCommand>) {
    while let Some(pending) = rx.recv().await {
        match serde_json::to_string(&pending.command) {
            Ok(json) => println!("{} {}", pending.submitted_at.to_rfc3339(), json),
            Err(e) => log::warn!("Could not serialize {}: {}", pending.command.name(), e),
        }
        pending.accept();
    }
}

async fn replay(
    selector: &mut SourceSelector,
    scene: &SceneSnapshot,
    actions: Vec<SelectorAction>,
) -> Selection {
    let (sink, rx) = ChannelCommandSink::new();
    let executor = tokio::spawn(drain_commands(rx));

    let catalog = IconCatalog::builtin();
    let mut selection = Selection::new();
    let mut session = SessionFlags::default();
    let mut shell = LogShell;
    let mut receipts: Vec<CommandReceipt> = Vec::new();

    {
        let mut cx = EditorContext {
            scene,
            selection: &mut selection,
            commands: &sink,
            catalog: &catalog,
            session: &mut session,
            shell: &mut shell,
        };
        for action in actions {
            log::debug!("Replaying {:?}", action);
            // The editor reports every selection change back to the tree
            let selects = matches!(action, SelectorAction::Select { .. });
            receipts.extend(selector.dispatch(action, &mut cx));
            if selects {
                selector.on_external_selection_change(&mut cx);
            }
        }
    }

    for receipt in receipts {
        let outcome = receipt.await;
        log::debug!("Command outcome: {:?}", outcome);
    }

    drop(sink);
    if let Err(e) = executor.await {
        log::warn!("Command executor stopped: {}", e);
    }
    selection
}

async fn run(cli: Cli) -> Result<(), String> {
    let scene = SceneSnapshot::load(&cli.snapshot)?;
    scene.validate().map_err(|e| format!("Invalid snapshot: {}", e))?;

    let mut selector = SourceSelector::new(SelectorSettings::load());
    for id in &cli.expand {
        selector.toggle_folder(&NodeId::new(id.as_str()));
    }

    if let Some(path) = &cli.actions {
        let actions = load_actions(path)?;
        log::info!("Replaying {} gesture(s)", actions.len());
        let selection = replay(&mut selector, &scene, actions).await;
        log::info!("Final selection: {:?}", selection.ids());
    }

    let tree = selector.tree(&scene, &IconCatalog::builtin());
    if cli.json {
        let json = serde_json::to_string_pretty(&tree)
            .map_err(|e| format!("Failed to serialize tree: {}", e))?;
        println!("{}", json);
    } else {
        print_text(&tree, 0);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
