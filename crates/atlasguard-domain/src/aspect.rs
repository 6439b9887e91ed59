//! The guard-rail visitor.
//!
//! One [`GuardRailAspect`] is created per traversal. The traversal driver calls
//! [`GuardRailAspect::visit`] once for every node; clusters are counted in visit order and
//! each one is run through the checks.

use crate::checks::{self, ClusterVisit};
use crate::model::{ConstructNode, NodeKind};
use crate::policy::GuardRailConfig;
use crate::sink::DiagnosticSink;
use tracing::debug;

/// State accumulated over a single traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalState {
    /// Atlas clusters visited so far. Only ever incremented.
    pub match_count: u32,
}

pub struct GuardRailAspect<'a> {
    config: &'a GuardRailConfig,
    state: TraversalState,
}

impl<'a> GuardRailAspect<'a> {
    pub fn new(config: &'a GuardRailConfig) -> Self {
        Self {
            config,
            state: TraversalState::default(),
        }
    }

    pub fn visit(&mut self, node: &ConstructNode, sink: &mut dyn DiagnosticSink) {
        let NodeKind::AtlasCluster(props) = &node.kind else {
            return;
        };

        self.state.match_count += 1;
        debug!(
            path = %node.path,
            ordinal = self.state.match_count,
            "checking atlas cluster"
        );

        let cluster = ClusterVisit {
            path: &node.path,
            props,
            ordinal: self.state.match_count,
        };
        checks::run_all(&cluster, self.config, sink);
    }

    pub fn match_count(&self) -> u32 {
        self.state.match_count
    }

    pub fn state(&self) -> TraversalState {
        self.state
    }
}
