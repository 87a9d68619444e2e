//! Tree flattening for file-tree and nested-accordion components.
//!
//! Combines a static node hierarchy with an expansion set to produce the rows
//! a renderer draws, top to bottom.

use crate::model::NodeId;
use crate::state::expansion::ExpansionState;

/// A node in a static hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Node id, unique within the tree.
    pub id: NodeId,
    /// Display label.
    pub label: String,
    /// Children in display order. Empty for leaves.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Leaf node.
    pub fn leaf(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Branch node with children.
    pub fn branch(id: NodeId, label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            id,
            label: label.into(),
            children,
        }
    }

    /// Whether this node can be expanded.
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// Ids of every branch in the subtree, depth first.
    pub fn branch_ids(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        collect_branches(self, &mut out);
        out
    }
}

fn collect_branches(node: &TreeNode, out: &mut Vec<NodeId>) {
    if node.is_branch() {
        out.push(node.id.clone());
        for child in &node.children {
            collect_branches(child, out);
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRow<'a> {
    /// The node.
    pub node: &'a TreeNode,
    /// Nesting depth, 0 for roots.
    pub depth: usize,
    /// Whether the node is expanded. Always `false` for leaves.
    pub expanded: bool,
}

/// Visible rows for `roots` under `expansion`.
///
/// Children of a collapsed branch are hidden even if they are themselves in
/// the expansion set.
pub fn visible_rows<'a>(roots: &'a [TreeNode], expansion: &ExpansionState) -> Vec<TreeRow<'a>> {
    let mut rows = Vec::new();
    for root in roots {
        push_rows(root, 0, expansion, &mut rows);
    }
    rows
}

fn push_rows<'a>(
    node: &'a TreeNode,
    depth: usize,
    expansion: &ExpansionState,
    rows: &mut Vec<TreeRow<'a>>,
) {
    let expanded = node.is_branch() && expansion.is_expanded(&node.id);
    rows.push(TreeRow {
        node,
        depth,
        expanded,
    });
    if expanded {
        for child in &node.children {
            push_rows(child, depth + 1, expansion, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::expansion::ExpansionMode;

    fn id(s: &str) -> NodeId {
        NodeId::new(s).expect("valid node id")
    }

    fn project() -> Vec<TreeNode> {
        vec![
            TreeNode::branch(
                id("src"),
                "src",
                vec![
                    TreeNode::leaf(id("src/main.rs"), "main.rs"),
                    TreeNode::branch(
                        id("src/view"),
                        "view",
                        vec![TreeNode::leaf(id("src/view/mod.rs"), "mod.rs")],
                    ),
                ],
            ),
            TreeNode::branch(
                id("public"),
                "public",
                vec![TreeNode::leaf(id("public/index.html"), "index.html")],
            ),
            TreeNode::leaf(id("README.md"), "README.md"),
        ]
    }

    fn labels(rows: &[TreeRow<'_>]) -> Vec<String> {
        rows.iter()
            .map(|r| format!("{}{}", "  ".repeat(r.depth), r.node.label))
            .collect()
    }

    #[test]
    fn collapsed_tree_shows_only_roots() {
        let tree = project();
        let expansion = ExpansionState::new(ExpansionMode::Inclusive);
        assert_eq!(
            labels(&visible_rows(&tree, &expansion)),
            vec!["src", "public", "README.md"]
        );
    }

    #[test]
    fn expanded_branch_shows_children_indented() {
        let tree = project();
        let mut expansion = ExpansionState::new(ExpansionMode::Inclusive);
        expansion.toggle(&id("src"));

        assert_eq!(
            labels(&visible_rows(&tree, &expansion)),
            vec!["src", "  main.rs", "  view", "public", "README.md"]
        );
    }

    #[test]
    fn nested_expansion_hidden_under_collapsed_parent() {
        let tree = project();
        let mut expansion = ExpansionState::new(ExpansionMode::Inclusive);
        expansion.toggle(&id("src/view"));

        let rows = visible_rows(&tree, &expansion);
        assert_eq!(rows.len(), 3, "src is collapsed so src/view stays hidden");
    }

    #[test]
    fn leaves_never_report_expanded() {
        let tree = project();
        let mut expansion = ExpansionState::new(ExpansionMode::Inclusive);
        expansion.toggle(&id("README.md"));

        let rows = visible_rows(&tree, &expansion);
        let readme = rows
            .iter()
            .find(|r| r.node.label == "README.md")
            .expect("readme row");
        assert!(!readme.expanded);
    }

    #[test]
    fn branch_ids_lists_all_branches_depth_first() {
        let tree = project();
        let ids: Vec<String> = tree[0].branch_ids().iter().map(|n| n.to_string()).collect();
        assert_eq!(ids, vec!["src", "src/view"]);
    }
}
