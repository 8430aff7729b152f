//! Tree Reconciler
//!
//! Walks `next` and `previous` side by side and patches the live tree:
//! - no previous node: materialize and append
//! - no next node: remove the live child
//! - changed identity: materialize and replace
//! - otherwise: update props in place and recurse into children by index
//!
//! Removing a child shifts every later live child one slot to the left while
//! the snapshot child lists keep their indices. Each call reports `-1` for a
//! removal it performed, and only the loop over the immediate parent's
//! children accumulates that shift. The loop walks live siblings with a
//! cursor instead of indexing, so a child list is patched in linear time.

use crate::{HostTree, Node, ReconcileConfig, VdomResult};

/// What one pass did to the live tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitStats {
    /// Subtrees materialized and appended
    pub created: u64,
    /// Live children removed
    pub removed: u64,
    /// Live children replaced by a fresh subtree
    pub replaced: u64,
    /// Elements patched in place
    pub updated: u64,
    /// Attribute/flag writes, materialization included
    pub property_writes: u64,
}

impl CommitStats {
    /// No structural edit happened
    pub fn is_structurally_unchanged(&self) -> bool {
        self.created == 0 && self.removed == 0 && self.replaced == 0
    }
}

/// Shallow identity test: differing kinds, differing text, differing tags,
/// or a truthy force-update marker on `next`. Props and children are not
/// compared.
pub fn changed(next: &Node, prev: &Node) -> bool {
    changed_with(&ReconcileConfig::DEFAULT, next, prev)
}

fn changed_with(config: &ReconcileConfig, next: &Node, prev: &Node) -> bool {
    match (next, prev) {
        (Node::Text(a), Node::Text(b)) => a != b,
        (Node::Element(a), Node::Element(b)) => a.tag != b.tag || config.forces_update(a),
        _ => true,
    }
}

/// One reconciliation pass over a host tree
pub struct Reconciler<'a, H: HostTree> {
    pub(crate) host: &'a mut H,
    pub(crate) config: &'a ReconcileConfig,
    pub(crate) stats: CommitStats,
}

impl<'a, H: HostTree> Reconciler<'a, H> {
    pub fn new(host: &'a mut H, config: &'a ReconcileConfig) -> Self {
        Self {
            host,
            config,
            stats: CommitStats::default(),
        }
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> CommitStats {
        self.stats
    }

    pub fn changed(&self, next: &Node, prev: &Node) -> bool {
        changed_with(self.config, next, prev)
    }

    /// Entry point: make the children of `parent` mirror `next`, given that
    /// they currently mirror `prev`.
    ///
    /// Both snapshots are validated before the first host mutation.
    pub fn patch(&mut self, parent: H::Handle, next: Option<&Node>, prev: Option<&Node>) -> VdomResult<()> {
        if let Some(node) = next {
            node.validate()?;
        }
        if let Some(node) = prev {
            node.validate()?;
        }
        let child = self.host.child_at(parent, 0);
        self.reconcile(parent, next, prev, child)?;
        Ok(())
    }

    /// Reconcile one position. Returns `-1` if the live child was removed
    /// without replacement, `0` otherwise.
    pub fn reconcile(
        &mut self,
        parent: H::Handle,
        next: Option<&Node>,
        prev: Option<&Node>,
        child: Option<H::Handle>,
    ) -> VdomResult<isize> {
        let Some(prev) = prev else {
            if let Some(next) = next {
                tracing::trace!("no previous node, creating {}", describe(next));
                let handle = self.materialize(next)?;
                self.host.append_child(parent, handle)?;
                self.stats.created += 1;
            }
            return Ok(0);
        };

        let child = child.ok_or(crate::VdomError::LiveTreeOutOfSync)?;

        let Some(next) = next else {
            tracing::trace!("no next node, removing {:?}", child);
            self.host.remove_child(parent, child)?;
            self.stats.removed += 1;
            return Ok(-1);
        };

        if self.changed(next, prev) {
            tracing::trace!("node changed: {} -> {}", describe(prev), describe(next));
            let handle = self.materialize(next)?;
            self.host.replace_child(parent, handle, child)?;
            self.stats.replaced += 1;
            return Ok(0);
        }

        // Equal text leaves land here and need nothing
        let (Node::Element(next), Node::Element(prev)) = (next, prev) else {
            return Ok(0);
        };

        self.update_properties(child, &next.props, &prev.props)?;
        self.stats.updated += 1;

        // `live` walks the sibling list and always sits at live index
        // `i + shift`. Its successor is read before the recursive call, since
        // a removal or replacement unlinks it.
        let len = next.children.len().max(prev.children.len());
        let mut shift: isize = 0;
        let mut live = self.host.child_at(child, 0);
        for i in 0..len {
            let following = live.and_then(|handle| self.host.next_sibling(handle));
            shift += self.reconcile(child, next.children.get(i), prev.children.get(i), live)?;
            live = following;
        }
        if shift != 0 {
            tracing::trace!("<{}> lost {} children", next.tag, -shift);
        }
        Ok(0)
    }
}

fn describe(node: &Node) -> String {
    match node {
        Node::Text(text) => format!("text {:?}", text),
        Node::Element(element) => format!("<{}>", element.tag),
    }
}
