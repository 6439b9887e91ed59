//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - the cluster counter across arbitrary visit sequences
//! - which clusters the count limit flags
//! - rules that must stay silent for a given configuration

use crate::aspect::GuardRailAspect;
use crate::checks::sizes::instance_sizes;
use crate::engine::evaluate;
use crate::model::{ClusterProps, ConstructNode, NodeKind};
use crate::policy::FailOn;
use crate::test_support::{
    cluster_node, config, guard_rails, node, region, replication_spec, resource, tree,
};
use atlasguard_types::{Finding, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_size() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("M10".to_string()),
        Just("M20".to_string()),
        Just("M30".to_string()),
        prop::string::string_regex("M[0-9]{1,3}").unwrap(),
        prop::string::string_regex("R[0-9]{2,3}").unwrap(),
    ]
}

fn arb_backup_flag() -> impl Strategy<Value = Option<bool>> {
    prop_oneof![Just(None), Just(Some(true)), Just(Some(false))]
}

fn arb_cluster_props() -> impl Strategy<Value = ClusterProps> {
    let arb_region = (
        prop::option::of(arb_size()),
        prop::option::of(arb_size()),
        prop::option::of(arb_size()),
    )
        .prop_map(|(e, r, a)| region(e.as_deref(), r.as_deref(), a.as_deref()));
    let arb_specs = prop::option::of(prop::collection::vec(
        prop::collection::vec(arb_region, 0..3).prop_map(replication_spec),
        0..3,
    ));

    (arb_backup_flag(), arb_specs).prop_map(|(backup_enabled, replication_specs)| ClusterProps {
        name: None,
        backup_enabled,
        replication_specs,
    })
}

/// A flat sequence of nodes, mixing clusters with other constructs.
fn arb_nodes() -> impl Strategy<Value = Vec<ConstructNode>> {
    prop::collection::vec(
        prop_oneof![
            arb_cluster_props().prop_map(|props| ("cluster", Some(props))),
            Just(("construct", None::<ClusterProps>)),
            Just(("resource", None::<ClusterProps>)),
        ],
        0..24,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (kind, props))| {
                let path = format!("Stage/Node{i}");
                match (kind, props) {
                    ("cluster", Some(props)) => cluster_node(&path, props),
                    ("resource", _) => resource(&path, "AWS::S3::Bucket"),
                    _ => node(&path),
                }
            })
            .collect()
    })
}

fn count_clusters(nodes: &[ConstructNode]) -> u32 {
    nodes.iter().filter(|n| n.is_atlas_cluster()).count() as u32
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn match_count_equals_clusters_visited(nodes in arb_nodes(), max in 0u32..8) {
        let cfg = guard_rails(max, &["M10"], true);
        let mut aspect = GuardRailAspect::new(&cfg);
        let mut out: Vec<Finding> = Vec::new();

        for n in &nodes {
            aspect.visit(n, &mut out);
        }

        prop_assert_eq!(aspect.match_count(), count_clusters(&nodes));
    }

    #[test]
    fn match_count_is_independent_of_visit_order(nodes in arb_nodes()) {
        let cfg = guard_rails(3, &[], false);
        let mut forward = GuardRailAspect::new(&cfg);
        let mut backward = GuardRailAspect::new(&cfg);
        let mut out: Vec<Finding> = Vec::new();

        for n in &nodes {
            forward.visit(n, &mut out);
        }
        for n in nodes.iter().rev() {
            backward.visit(n, &mut out);
        }

        prop_assert_eq!(forward.match_count(), backward.match_count());
    }

    #[test]
    fn count_limit_flags_exactly_the_clusters_after_k(nodes in arb_nodes(), k in 0u32..6) {
        let cfg = guard_rails(k, &[], false);
        let mut aspect = GuardRailAspect::new(&cfg);

        let mut flagged = Vec::new();
        for n in &nodes {
            let mut out: Vec<Finding> = Vec::new();
            aspect.visit(n, &mut out);
            if n.is_atlas_cluster() {
                flagged.push(out.iter().any(|f| f.code == ids::CODE_CLUSTER_LIMIT_EXCEEDED));
            } else {
                prop_assert!(out.is_empty());
            }
        }

        for (i, was_flagged) in flagged.iter().enumerate() {
            prop_assert_eq!(*was_flagged, (i as u32) >= k);
        }
    }

    #[test]
    fn empty_approved_list_never_flags_sizes(props in arb_cluster_props()) {
        let cfg = guard_rails(100, &[], false);
        let mut aspect = GuardRailAspect::new(&cfg);
        let mut out: Vec<Finding> = Vec::new();

        aspect.visit(&cluster_node("c", props), &mut out);

        prop_assert!(out.is_empty());
    }

    #[test]
    fn backup_requirement_off_never_warns(nodes in arb_nodes()) {
        let cfg = guard_rails(u32::MAX, &[], false);
        let report = evaluate(&tree(nodes), &config(cfg, FailOn::Error));
        prop_assert!(report.findings.iter().all(|f| f.code != ids::CODE_BACKUP_DISABLED));
    }

    #[test]
    fn at_most_one_size_finding_per_cluster(props in arb_cluster_props()) {
        let cfg = guard_rails(100, &["M10", "M20", "M30"], false);
        let mut aspect = GuardRailAspect::new(&cfg);
        let mut out: Vec<Finding> = Vec::new();

        let sizes: Vec<String> = instance_sizes(props.replication_specs.as_deref())
            .into_iter()
            .map(str::to_string)
            .collect();
        aspect.visit(&cluster_node("c", props), &mut out);

        let any_unapproved = sizes.iter().any(|s| !cfg.is_approved(s));
        prop_assert_eq!(out.len(), usize::from(any_unapproved));
    }

    #[test]
    fn non_cluster_nodes_never_emit(nodes in arb_nodes()) {
        let cfg = guard_rails(0, &["M10"], true);
        let mut aspect = GuardRailAspect::new(&cfg);

        for n in nodes.iter().filter(|n| !matches!(n.kind, NodeKind::AtlasCluster(_))) {
            let mut out: Vec<Finding> = Vec::new();
            aspect.visit(n, &mut out);
            prop_assert!(out.is_empty());
        }
        prop_assert_eq!(aspect.match_count(), 0);
    }
}
