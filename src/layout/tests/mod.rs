mod depth;

use crate::genome::{Genome, NetworkConfig, NodeId};

/// 构造测试用基因组：节点键列表 + (源, 目标, 权重, 启用)连接列表
pub(crate) fn build_genome(nodes: &[i64], conns: &[(i64, i64, f32, bool)]) -> Genome {
    let mut genome = Genome::new();
    for &k in nodes {
        genome.add_node(NodeId(k));
    }
    for &(s, t, w, e) in conns {
        genome.add_connection(NodeId(s), NodeId(t), w, e);
    }
    genome
}

/// 构造测试用配置
pub(crate) fn build_config(inputs: &[i64], outputs: &[i64]) -> NetworkConfig {
    NetworkConfig::new(
        inputs.iter().copied().map(NodeId).collect(),
        outputs.iter().copied().map(NodeId).collect(),
    )
}
