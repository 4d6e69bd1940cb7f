use crate::genome::{Genome, NetworkConfig, NodeId};

#[test]
fn test_genome_json_roundtrip() {
    let mut genome = Genome::new();
    genome.add_node(NodeId(0));
    genome.add_node(NodeId(5));
    genome.add_connection(NodeId(-1), NodeId(5), 0.75, true);
    genome.add_connection(NodeId(5), NodeId(0), -1.25, false);

    let text = genome.to_json().unwrap();
    let restored = Genome::from_json(&text).unwrap();
    assert_eq!(genome, restored);
}

#[test]
fn test_config_json_roundtrip() {
    let config = NetworkConfig::new(vec![NodeId(-1), NodeId(-2)], vec![NodeId(0)]);
    let text = serde_json::to_string(&config).unwrap();
    let restored: NetworkConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(config, restored);
}

#[test]
fn test_from_json_rejects_malformed_text() {
    assert!(Genome::from_json("{这不是合法的json").is_err());
}
