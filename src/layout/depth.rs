use std::collections::{BTreeSet, HashMap, HashSet};

use crate::genome::{Genome, NodeId};

use super::Partitions;

/// 单次层深探测的结果
///
/// `CycleBroken`表示当前递归路径上再次遇到了同一节点。按设计约定，
/// 这样的分支不贡献任何层深（环不增加深度），以此保证带环的
/// 循环连接（NEAT允许）也能在有限步内完成遍历。
enum DepthProbe {
    Depth(u32),
    CycleBroken,
}

/// 隐藏节点的层深指派结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerAssignment {
    depths: HashMap<NodeId, u32>,
    /// 全部隐藏节点的最大层深（没有隐藏节点时为0）
    pub max_layers: u32,
}

impl LayerAssignment {
    /// 查询隐藏节点的层深；非隐藏节点返回`None`
    pub fn depth_of(&self, key: NodeId) -> Option<u32> {
        self.depths.get(&key).copied()
    }
}

/// 为每个隐藏节点计算到输出的依赖距离，并求全局最大层深
///
/// 距离定义：沿计入的连接（启用的，或`show_disabled`为真时全部）
/// 从该节点出发：目标是输出则候选为1，否则候选为1+目标的层深，
/// 取全部候选的最大值；没有计入的出边则层深为0。
pub fn assign_layers(
    genome: &Genome,
    partitions: &Partitions,
    show_disabled: bool,
) -> LayerAssignment {
    let outputs: BTreeSet<NodeId> = partitions.outputs.iter().copied().collect();
    let mut walker = DepthWalker {
        genome,
        outputs: &outputs,
        show_disabled,
        memo: HashMap::new(),
    };

    let mut depths = HashMap::with_capacity(partitions.hidden.len());
    let mut max_layers = 0;
    for &key in &partitions.hidden {
        let mut path = HashSet::new();
        let depth = match walker.probe(key, &mut path) {
            (DepthProbe::Depth(d), _) => d,
            // 空递归路径下首个节点不可能已在路径上
            (DepthProbe::CycleBroken, _) => 0,
        };
        depths.insert(key, depth);
        max_layers = max_layers.max(depth);
    }

    LayerAssignment { depths, max_layers }
}

struct DepthWalker<'a> {
    genome: &'a Genome,
    outputs: &'a BTreeSet<NodeId>,
    show_disabled: bool,
    /// 只缓存未受环影响的结果：被环截断过的值依赖当时的递归路径，不可复用
    memo: HashMap<NodeId, u32>,
}

impl DepthWalker<'_> {
    /// 探测`key`的层深，并返回该结果是否未受环影响（即可缓存）
    fn probe(&mut self, key: NodeId, path: &mut HashSet<NodeId>) -> (DepthProbe, bool) {
        if let Some(&d) = self.memo.get(&key) {
            return (DepthProbe::Depth(d), true);
        }
        if path.contains(&key) {
            return (DepthProbe::CycleBroken, false);
        }
        path.insert(key);

        let mut best = 0;
        let mut clean = true;
        for conn in self.genome.connections() {
            if conn.source != key || !(conn.enabled || self.show_disabled) {
                continue;
            }
            let candidate = if self.outputs.contains(&conn.target) {
                1
            } else {
                match self.probe(conn.target, path) {
                    (DepthProbe::Depth(d), sub_clean) => {
                        clean &= sub_clean;
                        d + 1
                    }
                    (DepthProbe::CycleBroken, _) => {
                        clean = false;
                        continue;
                    }
                }
            };
            best = best.max(candidate);
        }

        path.remove(&key);
        if clean {
            self.memo.insert(key, best);
        }
        (DepthProbe::Depth(best), clean)
    }
}
