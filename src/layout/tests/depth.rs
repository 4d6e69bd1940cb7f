use super::{build_config, build_genome};
use crate::genome::NodeId;
use crate::layout::{assign_layers, partition_network};

#[test]
fn test_direct_edge_to_output_is_depth_one() {
    let genome = build_genome(&[0, 1], &[(-1, 1, 1.0, true), (1, 0, 1.0, true)]);
    let config = build_config(&[-1], &[0]);
    let parts = partition_network(&genome, &config, true).unwrap();

    let layers = assign_layers(&genome, &parts, true);
    assert_eq!(layers.depth_of(NodeId(1)), Some(1));
    assert_eq!(layers.max_layers, 1);
}

#[test]
fn test_no_outgoing_edge_is_depth_zero() {
    let genome = build_genome(&[0, 1], &[(-1, 1, 1.0, true)]);
    let config = build_config(&[-1], &[0]);
    let parts = partition_network(&genome, &config, true).unwrap();

    let layers = assign_layers(&genome, &parts, true);
    assert_eq!(layers.depth_of(NodeId(1)), Some(0));
    assert_eq!(layers.max_layers, 0);
}

#[test]
fn test_chain_depth_accumulates() {
    // -1 -> 1 -> 2 -> 0：离输出越远层深越大
    let genome = build_genome(
        &[0, 1, 2],
        &[(-1, 1, 1.0, true), (1, 2, 1.0, true), (2, 0, 1.0, true)],
    );
    let config = build_config(&[-1], &[0]);
    let parts = partition_network(&genome, &config, true).unwrap();

    let layers = assign_layers(&genome, &parts, true);
    assert_eq!(layers.depth_of(NodeId(1)), Some(2));
    assert_eq!(layers.depth_of(NodeId(2)), Some(1));
    assert_eq!(layers.max_layers, 2);
}

#[test]
fn test_depth_takes_max_over_branches() {
    // 节点1既直连输出（候选1）又经节点2中转（候选2），取最大值
    let genome = build_genome(
        &[0, 1, 2],
        &[(1, 0, 1.0, true), (1, 2, 1.0, true), (2, 0, 1.0, true)],
    );
    let config = build_config(&[-1], &[0]);
    let parts = partition_network(&genome, &config, true).unwrap();

    let layers = assign_layers(&genome, &parts, true);
    assert_eq!(layers.depth_of(NodeId(1)), Some(2));
}

#[test]
fn test_pure_cycle_terminates_with_finite_depths() {
    // 1 -> 2 -> 1：没有通向输出的路径，但遍历必须在有限步内结束
    let genome = build_genome(&[0, 1, 2], &[(1, 2, 1.0, true), (2, 1, 1.0, true)]);
    let config = build_config(&[-1], &[0]);
    let parts = partition_network(&genome, &config, true).unwrap();

    let layers = assign_layers(&genome, &parts, true);
    // 环的回边不贡献层深，各自只看对方被截断后的0层
    assert_eq!(layers.depth_of(NodeId(1)), Some(1));
    assert_eq!(layers.depth_of(NodeId(2)), Some(1));
}

#[test]
fn test_cycle_with_output_branch() {
    // 1 <-> 2 互为环，2另有一条直连输出的边
    let genome = build_genome(
        &[0, 1, 2],
        &[(1, 2, 1.0, true), (2, 1, 1.0, true), (2, 0, 1.0, true)],
    );
    let config = build_config(&[-1], &[0]);
    let parts = partition_network(&genome, &config, true).unwrap();

    let layers = assign_layers(&genome, &parts, true);
    // 2自身：回边1被截断贡献1，直连输出贡献1；1经2到输出共2层
    assert_eq!(layers.depth_of(NodeId(2)), Some(1));
    assert_eq!(layers.depth_of(NodeId(1)), Some(2));
    assert_eq!(layers.max_layers, 2);
}

#[test]
fn test_self_loop_terminates() {
    let genome = build_genome(&[0, 1], &[(1, 1, 1.0, true), (1, 0, 1.0, true)]);
    let config = build_config(&[-1], &[0]);
    let parts = partition_network(&genome, &config, true).unwrap();

    let layers = assign_layers(&genome, &parts, true);
    assert_eq!(layers.depth_of(NodeId(1)), Some(1));
}

#[test]
fn test_disabled_edge_excluded_when_hidden() {
    let genome = build_genome(&[0, 1], &[(1, 0, 1.0, false)]);
    let config = build_config(&[-1], &[0]);
    let parts = partition_network(&genome, &config, true).unwrap();

    // show_disabled为假：禁用边不计入，层深为0
    let layers = assign_layers(&genome, &parts, false);
    assert_eq!(layers.depth_of(NodeId(1)), Some(0));

    // show_disabled为真：禁用边同样计入层深
    let layers = assign_layers(&genome, &parts, true);
    assert_eq!(layers.depth_of(NodeId(1)), Some(1));
}

#[test]
fn test_shared_suffix_reuses_memoized_depth() {
    // 1和2都经3到输出，3的层深只应计算一次且两处一致
    let genome = build_genome(
        &[0, 1, 2, 3],
        &[
            (1, 3, 1.0, true),
            (2, 3, 1.0, true),
            (3, 0, 1.0, true),
        ],
    );
    let config = build_config(&[-1], &[0]);
    let parts = partition_network(&genome, &config, true).unwrap();

    let layers = assign_layers(&genome, &parts, true);
    assert_eq!(layers.depth_of(NodeId(1)), Some(2));
    assert_eq!(layers.depth_of(NodeId(2)), Some(2));
    assert_eq!(layers.depth_of(NodeId(3)), Some(1));
}

#[test]
fn test_no_hidden_nodes_max_layers_zero() {
    let genome = build_genome(&[0], &[(-1, 0, 1.0, true)]);
    let config = build_config(&[-1], &[0]);
    let parts = partition_network(&genome, &config, true).unwrap();

    let layers = assign_layers(&genome, &parts, true);
    assert_eq!(layers.max_layers, 0);
    assert_eq!(layers.depth_of(NodeId(0)), None);
}
