use atlasguard_domain::model::NodeKind;
use atlasguard_tree::{TreeError, load_tree};
use camino::Utf8PathBuf;
use tempfile::TempDir;

const SYNTHESIZED: &str = r#"{
  "version": "tree-0.1",
  "tree": {
    "id": "App",
    "path": "",
    "children": {
      "MongoDbAtlasStage": {
        "id": "MongoDbAtlasStage",
        "path": "MongoDbAtlasStage",
        "children": {
          "MongoDbAtlasStack": {
            "id": "MongoDbAtlasStack",
            "path": "MongoDbAtlasStage/MongoDbAtlasStack",
            "children": {
              "AtlasDeployment": {
                "id": "AtlasDeployment",
                "path": "MongoDbAtlasStage/MongoDbAtlasStack/AtlasDeployment",
                "children": {
                  "project-AtlasDeployment": {
                    "id": "project-AtlasDeployment",
                    "path": "MongoDbAtlasStage/MongoDbAtlasStack/AtlasDeployment/project-AtlasDeployment",
                    "attributes": {
                      "aws:cdk:cloudformation:type": "MongoDB::Atlas::Project",
                      "aws:cdk:cloudformation:props": { "name": "aws-cdk-atlas-project" }
                    }
                  },
                  "cluster-AtlasDeployment": {
                    "id": "cluster-AtlasDeployment",
                    "path": "MongoDbAtlasStage/MongoDbAtlasStack/AtlasDeployment/cluster-AtlasDeployment",
                    "attributes": {
                      "aws:cdk:cloudformation:type": "MongoDB::Atlas::Cluster",
                      "aws:cdk:cloudformation:props": {
                        "name": "aws-cdk-atlas-cluster",
                        "backupEnabled": true,
                        "clusterType": "REPLICASET",
                        "replicationSpecs": [
                          {
                            "numShards": 1,
                            "advancedRegionConfigs": [
                              {
                                "providerName": "AWS",
                                "regionName": "US_EAST_1",
                                "electableSpecs": { "instanceSize": "M10", "nodeCount": 3 }
                              }
                            ]
                          }
                        ]
                      }
                    }
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}"#;

fn write_tree(content: &str) -> (TempDir, Utf8PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 path");
    let path = root.join("tree.json");
    std::fs::write(&path, content).expect("write tree.json");
    (temp, path)
}

#[test]
fn loads_a_synthesized_tree() {
    let (_temp, path) = write_tree(SYNTHESIZED);
    let tree = load_tree(&path).expect("load tree");

    let deployment = &tree.root.children[0].children[0].children[0];
    assert_eq!(
        deployment.path.as_str(),
        "MongoDbAtlasStage/MongoDbAtlasStack/AtlasDeployment"
    );

    let kinds: Vec<_> = deployment.children.iter().map(|c| &c.kind).collect();
    assert!(matches!(kinds[0], NodeKind::Resource { .. }));
    let NodeKind::AtlasCluster(props) = kinds[1] else {
        panic!("expected the second child to be the cluster");
    };
    assert_eq!(props.name.as_deref(), Some("aws-cdk-atlas-cluster"));
    assert_eq!(props.backup_enabled, Some(true));

    let region = &props.replication_specs.as_ref().unwrap()[0]
        .advanced_region_configs
        .as_ref()
        .unwrap()[0];
    assert_eq!(
        region.electable_specs.as_ref().unwrap().instance_size.as_deref(),
        Some("M10")
    );
}

#[test]
fn parameter_references_load_as_json_text() {
    let (_temp, path) = write_tree(
        r#"{ "tree": { "id": "App", "path": "", "children": { "Cluster": {
            "id": "cluster-AtlasDeployment",
            "path": "MongoDbAtlasStage/MongoDbAtlasStack/AtlasDeployment/cluster-AtlasDeployment",
            "attributes": {
              "aws:cdk:cloudformation:type": "MongoDB::Atlas::Cluster",
              "aws:cdk:cloudformation:props": {
                "name": { "Ref": "AtlasClusterName" },
                "backupEnabled": true,
                "replicationSpecs": [ { "advancedRegionConfigs": [ {
                  "regionName": { "Ref": "AtlasClusterRegion" },
                  "electableSpecs": { "instanceSize": { "Ref": "AtlasClusterInstanceSize" } }
                } ] } ]
              }
            }
        } } } }"#,
    );

    let tree = load_tree(&path).expect("references are not malformed");
    let NodeKind::AtlasCluster(props) = &tree.root.children[0].kind else {
        panic!("expected an Atlas cluster");
    };
    assert_eq!(props.name.as_deref(), Some(r#"{"Ref":"AtlasClusterName"}"#));
    let region = &props.replication_specs.as_ref().unwrap()[0]
        .advanced_region_configs
        .as_ref()
        .unwrap()[0];
    assert_eq!(
        region.electable_specs.as_ref().unwrap().instance_size.as_deref(),
        Some(r#"{"Ref":"AtlasClusterInstanceSize"}"#)
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 path");
    let missing = root.join("nope.json");

    let err = load_tree(&missing).unwrap_err();
    match err {
        TreeError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn error_messages_name_the_failing_node() {
    let (_temp, path) = write_tree(
        r#"{ "tree": { "id": "App", "path": "", "children": { "C": {
            "id": "C", "path": "Stage/C",
            "attributes": {
              "aws:cdk:cloudformation:type": "MongoDB::Atlas::Cluster",
              "aws:cdk:cloudformation:props": { "replicationSpecs": [ { "advancedRegionConfigs": 7 } ] }
            }
        } } } }"#,
    );

    let err = load_tree(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed properties for Atlas cluster 'Stage/C'"
    );
}
