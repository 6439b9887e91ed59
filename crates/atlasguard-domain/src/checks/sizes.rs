//! Instance size extraction from nested replication specs.

use crate::model::{RegionConfig, ReplicationSpec};

/// Every instance size declared under the given replication specs, in declaration order.
///
/// Duplicates are kept. A missing spec list, region list, sub-specification or size simply
/// contributes nothing, and so does an empty size.
pub fn instance_sizes(replication_specs: Option<&[ReplicationSpec]>) -> Vec<&str> {
    replication_specs
        .unwrap_or_default()
        .iter()
        .flat_map(|spec| spec.advanced_region_configs.as_deref().unwrap_or_default())
        .flat_map(region_sizes)
        .collect()
}

/// Sizes of one region config: electable, then read-only, then analytics.
pub fn region_sizes(region: &RegionConfig) -> impl Iterator<Item = &str> {
    region
        .specs()
        .into_iter()
        .flatten()
        .filter_map(|specs| specs.instance_size.as_deref())
        .filter(|size| !size.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{region, replication_spec};

    #[test]
    fn absent_specs_yield_nothing() {
        assert!(instance_sizes(None).is_empty());
        assert!(instance_sizes(Some(&[])).is_empty());
    }

    #[test]
    fn absent_region_configs_yield_nothing() {
        let specs = vec![ReplicationSpec {
            advanced_region_configs: None,
        }];
        assert!(instance_sizes(Some(&specs)).is_empty());
    }

    #[test]
    fn absent_sub_specs_and_sizes_are_skipped() {
        let mut partial = region(Some("M10"), None, None);
        partial.read_only_specs = Some(Default::default());
        let specs = vec![replication_spec(vec![partial, region(None, None, None)])];
        assert_eq!(instance_sizes(Some(&specs)), vec!["M10"]);
    }

    #[test]
    fn empty_sizes_are_skipped() {
        let specs = vec![replication_spec(vec![
            region(Some(""), Some("M20"), None),
            region(Some("M10"), None, Some("")),
        ])];
        assert_eq!(instance_sizes(Some(&specs)), vec!["M20", "M10"]);
    }

    #[test]
    fn collects_across_specs_regions_and_roles_keeping_duplicates() {
        let specs = vec![
            replication_spec(vec![
                region(Some("M10"), Some("M30"), None),
                region(Some("M30"), None, Some("M20")),
            ]),
            replication_spec(vec![region(None, None, Some("M40"))]),
        ];
        assert_eq!(
            instance_sizes(Some(&specs)),
            vec!["M10", "M30", "M30", "M20", "M40"]
        );
    }
}
