/*
 * @Author       : 老董
 * @Date         : 2026-05-14
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-06
 * @Description  : 自动分层布局：节点分区、隐藏节点层深指派与像素坐标解析。
 *                 布局是确定性的：输入相同则坐标逐像素相同。
 */

mod depth;
mod partition;
mod position;

pub use depth::{LayerAssignment, assign_layers};
pub use partition::{Partition, Partitions, partition_network};
pub use position::{LayoutMap, resolve_positions};

#[cfg(test)]
mod tests;
