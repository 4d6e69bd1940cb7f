use std::collections::HashMap;

use crate::genome::NodeId;

use super::{LayerAssignment, Partitions};

/// 各节点的像素坐标与统一的节点半径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMap {
    positions: HashMap<NodeId, (i32, i32)>,
    pub radius: i32,
}

impl LayoutMap {
    /// 查询节点坐标；未参与布局的节点返回`None`
    pub fn position(&self, key: NodeId) -> Option<(i32, i32)> {
        self.positions.get(&key).copied()
    }
}

/// 由分区与层深推导每个节点的像素坐标
///
/// 全部使用整数除法。大小为0的分区整体跳过（不布局、也不除零）。
/// 输入贴左缘、输出贴右缘；隐藏节点按层深从右向左排列，
/// 层深为0（没有通向输出的路径）的落在最右一列，x再钳制回画布内。
pub fn resolve_positions(
    partitions: &Partitions,
    layers: &LayerAssignment,
    size: (u32, u32),
) -> LayoutMap {
    let (width, height) = size;
    let n = partitions.inputs.len() as u32;
    let m = partitions.outputs.len() as u32;
    let h_count = partitions.hidden.len() as u32;

    let radius = node_radius(size, n, m);
    let mut positions =
        HashMap::with_capacity((n + m + h_count) as usize);

    if n > 0 {
        let offset = height / n;
        for (i, &key) in partitions.inputs.iter().enumerate() {
            let y = i as u32 * offset + offset / 2;
            positions.insert(key, (radius, y as i32));
        }
    }

    if m > 0 {
        let offset = height / m;
        for (i, &key) in partitions.outputs.iter().enumerate() {
            let y = i as u32 * offset + offset / 2;
            positions.insert(key, (width as i32 - radius, y as i32));
        }
    }

    if h_count > 0 {
        let offset_y = height / h_count;
        let offset_x = width / (layers.max_layers + 1);
        for (i, &key) in partitions.hidden.iter().enumerate() {
            let depth = layers.depth_of(key).unwrap_or(0);
            let x = ((layers.max_layers + 1 - depth) * offset_x).min(width.saturating_sub(1));
            let y = i as u32 * offset_y + offset_y / 2;
            positions.insert(key, (x as i32, y as i32));
        }
    }

    LayoutMap { positions, radius }
}

/// 节点半径：与画布尺寸成正比、与输入/输出数量成反比，最小1像素
fn node_radius((width, height): (u32, u32), n: u32, m: u32) -> i32 {
    let r = (width / 30)
        .min(height / 30)
        .min(width / (5 * n.max(1)))
        .min(height / (5 * m.max(1)));
    r.max(1) as i32
}
