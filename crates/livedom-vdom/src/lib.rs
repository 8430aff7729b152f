//! livedom vdom - Snapshot reconciliation
//!
//! Diffs two immutable snapshots (`previous`, `next`) and patches a live
//! host tree so it mirrors `next`. Children are matched by position only.
//!
//! Layers, leaf first:
//! - `node`: snapshot model and property classification
//! - `props`: property reconciler
//! - `materialize`: fresh subtree construction
//! - `reconcile`: recursive create/remove/replace/update
//! - `session`: retains the last committed snapshot between calls

mod config;
mod error;
mod host;
mod json;
mod materialize;
mod node;
mod props;
mod reconcile;
mod session;

pub use config::ReconcileConfig;
pub use error::{VdomError, VdomResult};
pub use host::HostTree;
pub use node::{
    Element, Node, PropClass, PropValue, Props, classify, is_boolean_valued, is_custom_property,
    is_element, is_text,
};
pub use reconcile::{CommitStats, Reconciler, changed};
pub use session::Session;
