//! Reusable UI components

mod source_selector;

pub use source_selector::{
    ContextMenuOptions, DropInfo, EditorContext, ExpandedFolders, Modifiers, NodeView,
    ReorderPlan, Shell, SourceSelector, TreeNode, build_tree, determine_placement,
    range_selection,
};
