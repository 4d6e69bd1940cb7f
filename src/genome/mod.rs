/*
 * @Author       : 老董
 * @Date         : 2026-05-12
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-02
 * @Description  : NEAT基因组（genome）的数据模型：节点、连接与外部配置。
 *                 本模块只负责承载数据，不涉及布局与绘制；
 *                 基因组在一次渲染调用期间是只读的。
 */

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// 节点标识
///
/// 沿用NEAT的习惯：输入节点常用负数键，输出与隐藏节点用非负数键。
/// 键本身是不透明的，渲染只依赖其可排序、可展示。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 连接基因：带权重与启用标志的有向边
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionGene {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f32,
    pub enabled: bool,
}

/// 基因组：节点集 + 连接集
///
/// 节点集用`BTreeSet`保存，迭代顺序即键的升序。隐藏节点的纵向排列
/// 依赖这一确定性顺序：输入相同的两次渲染必须得到相同布局。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    nodes: BTreeSet<NodeId>,
    connections: Vec<ConnectionGene>,
}

impl Genome {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个节点基因
    pub fn add_node(&mut self, key: NodeId) -> &mut Self {
        self.nodes.insert(key);
        self
    }

    /// 登记一条连接基因
    ///
    /// 同一有向对(source, target)重复登记时，后登记的覆盖先登记的。
    pub fn add_connection(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: f32,
        enabled: bool,
    ) -> &mut Self {
        if let Some(existing) = self
            .connections
            .iter_mut()
            .find(|c| c.source == source && c.target == target)
        {
            existing.weight = weight;
            existing.enabled = enabled;
        } else {
            self.connections.push(ConnectionGene {
                source,
                target,
                weight,
                enabled,
            });
        }
        self
    }

    /// 按键升序迭代全部节点键
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn contains_node(&self, key: NodeId) -> bool {
        self.nodes.contains(&key)
    }

    pub fn connections(&self) -> &[ConnectionGene] {
        &self.connections
    }

    /// 从JSON文本反序列化基因组
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// 把基因组序列化为JSON文本
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// 外部配置：输入键与输出键的有序列表
///
/// 两个列表的顺序具有语义：它决定同分区内节点的纵向排列。
/// 输入引脚不要求在基因组中有对应的节点基因（NEAT的惯例）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_keys: Vec<NodeId>,
    pub output_keys: Vec<NodeId>,
}

impl NetworkConfig {
    pub fn new(input_keys: Vec<NodeId>, output_keys: Vec<NodeId>) -> Self {
        Self {
            input_keys,
            output_keys,
        }
    }
}
