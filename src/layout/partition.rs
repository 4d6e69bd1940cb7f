use std::collections::BTreeSet;
use std::fmt;

use crate::errors::RenderError;
use crate::genome::{Genome, NetworkConfig, NodeId};

/// 节点分区：每个节点恰好属于其中之一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Input,
    Output,
    Hidden,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Input => "Input",
            Self::Output => "Output",
            Self::Hidden => "Hidden",
        };
        write!(f, "{name}")
    }
}

/// 分区结果：三个互斥的有序节点列表
///
/// 输入/输出沿用配置列表的顺序，隐藏节点按键升序。
/// 列表内的次序决定纵向位置，两次相同输入的调用间必须保持稳定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitions {
    pub inputs: Vec<NodeId>,
    pub outputs: Vec<NodeId>,
    pub hidden: Vec<NodeId>,
}

/// 按外部配置把基因组划分为输入/输出/隐藏三个分区
///
/// 节点全集 = 基因组节点 ∪ 配置的输入键 ∪ 配置的输出键；
/// 隐藏节点 = 基因组中既不属于输入列表、也不属于输出列表的节点。
///
/// 校验集中在此完成，且先于任何绘制：
/// 1. 同一键同时出现在输入与输出列表，归属不明确，报错；
/// 2. 连接的两个端点都必须落在节点全集内；
/// 3. `show_disabled`为假时，剔除没有任何启用出边的输入节点。
///    剔除必须发生在坐标推导之前，因为它改变分区内的间距；
///    剔除后输入或输出分区为空则报错。
pub fn partition_network(
    genome: &Genome,
    config: &NetworkConfig,
    show_disabled: bool,
) -> Result<Partitions, RenderError> {
    let input_set: BTreeSet<NodeId> = config.input_keys.iter().copied().collect();
    let output_set: BTreeSet<NodeId> = config.output_keys.iter().copied().collect();

    if let Some(&key) = input_set.intersection(&output_set).next() {
        return Err(RenderError::UnknownNodeReference { key });
    }

    for conn in genome.connections() {
        for key in [conn.source, conn.target] {
            if !genome.contains_node(key)
                && !input_set.contains(&key)
                && !output_set.contains(&key)
            {
                return Err(RenderError::UnknownNodeReference { key });
            }
        }
    }

    let hidden: Vec<NodeId> = genome
        .nodes()
        .filter(|k| !input_set.contains(k) && !output_set.contains(k))
        .collect();

    let mut inputs = config.input_keys.clone();
    if !show_disabled {
        // 只保留仍有启用出边的输入节点
        let live_sources: BTreeSet<NodeId> = genome
            .connections()
            .iter()
            .filter(|c| c.enabled)
            .map(|c| c.source)
            .collect();
        inputs.retain(|k| live_sources.contains(k));
    }

    if inputs.is_empty() {
        return Err(RenderError::EmptyPartition {
            partition: Partition::Input,
        });
    }
    if config.output_keys.is_empty() {
        return Err(RenderError::EmptyPartition {
            partition: Partition::Output,
        });
    }

    Ok(Partitions {
        inputs,
        outputs: config.output_keys.clone(),
        hidden,
    })
}
