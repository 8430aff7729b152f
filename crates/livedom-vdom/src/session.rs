//! Render session
//!
//! Owns the last committed snapshot for one mount point. Each commit diffs
//! against it and, on success, retains the new snapshot as the next baseline.

use crate::{CommitStats, HostTree, Node, ReconcileConfig, Reconciler, VdomResult};

/// Snapshot baseline for one live mount root
#[derive(Debug)]
pub struct Session<H: HostTree> {
    root: H::Handle,
    previous: Option<Node>,
    config: ReconcileConfig,
    commits: u64,
}

impl<H: HostTree> Session<H> {
    /// Session over an empty mount root
    pub fn new(root: H::Handle) -> Self {
        Self::with_config(root, ReconcileConfig::default())
    }

    pub fn with_config(root: H::Handle, config: ReconcileConfig) -> Self {
        Self {
            root,
            previous: None,
            config,
            commits: 0,
        }
    }

    /// Patch the live tree to `next`. `None` tears the mounted tree down.
    ///
    /// On error the baseline is kept, so a malformed snapshot can simply be
    /// dropped by the caller.
    pub fn commit(&mut self, host: &mut H, next: Option<Node>) -> VdomResult<CommitStats> {
        let mut reconciler = Reconciler::new(host, &self.config);
        reconciler.patch(self.root, next.as_ref(), self.previous.as_ref())?;
        let stats = reconciler.stats();

        self.previous = next;
        self.commits += 1;
        tracing::debug!(
            "commit #{}: {} created, {} removed, {} replaced, {} updated, {} property writes",
            self.commits,
            stats.created,
            stats.removed,
            stats.replaced,
            stats.updated,
            stats.property_writes
        );
        Ok(stats)
    }

    /// Last committed snapshot
    pub fn previous(&self) -> Option<&Node> {
        self.previous.as_ref()
    }

    pub fn root(&self) -> H::Handle {
        self.root
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Number of successful commits
    pub fn commits(&self) -> u64 {
        self.commits
    }
}

#[cfg(test)]
mod tests {
    use livedom_tree::{DomTree, HtmlSerializer};

    use super::*;

    #[test]
    fn test_commit_retains_baseline() {
        let mut tree = DomTree::new();
        let mut session: Session<DomTree> = Session::new(tree.root());
        let first = Node::element("p").child(Node::text("one"));

        let stats = session.commit(&mut tree, Some(first.clone())).unwrap();

        assert_eq!(stats.created, 1);
        assert_eq!(session.previous(), Some(&first));
        assert_eq!(session.commits(), 1);
    }

    #[test]
    fn test_teardown_and_remount() {
        let mut tree = DomTree::new();
        let mut session: Session<DomTree> = Session::new(tree.root());
        session.commit(&mut tree, Some(Node::element("main"))).unwrap();

        let stats = session.commit(&mut tree, None).unwrap();
        assert_eq!(stats.removed, 1);
        assert_eq!(tree.child_count(tree.root()), 0);
        assert_eq!(session.previous(), None);

        session.commit(&mut tree, Some(Node::element("aside"))).unwrap();
        assert_eq!(HtmlSerializer::new().serialize_inner(&tree, tree.root()), "<aside></aside>");
    }

    #[test]
    fn test_teardown_without_baseline_is_noop() {
        let mut tree = DomTree::new();
        let mut session: Session<DomTree> = Session::new(tree.root());
        let stats = session.commit(&mut tree, None).unwrap();

        assert_eq!(stats, CommitStats::default());
        assert_eq!(tree.stats().structural(), 0);
    }

    #[test]
    fn test_failed_commit_keeps_baseline() {
        let mut tree = DomTree::new();
        let mut session: Session<DomTree> = Session::new(tree.root());
        let good = Node::element("div");
        session.commit(&mut tree, Some(good.clone())).unwrap();

        let bad = Node::element("div").child(Node::element(""));
        assert!(session.commit(&mut tree, Some(bad)).is_err());
        assert_eq!(session.previous(), Some(&good));
        assert_eq!(session.commits(), 1);
    }
}
