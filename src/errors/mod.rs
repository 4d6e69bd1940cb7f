//! 渲染错误类型定义

use std::path::PathBuf;

use thiserror::Error;

use crate::genome::NodeId;
use crate::layout::Partition;

/// 渲染校验错误
///
/// 所有校验错误都在任何绘制发生前被检出，
/// 保证不会向调用者交付画了一半的画布。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// 过滤后输入或输出分区为空
    #[error("{partition}分区过滤后为空，无法布局（请检查配置的节点列表与show_disabled设置）")]
    EmptyPartition { partition: Partition },

    /// 连接或配置引用了节点全集中不存在（或归属不明确）的节点
    #[error("引用了未知或归属不明确的节点: {key}")]
    UnknownNodeReference { key: NodeId },

    /// 提供的名称列表长度与配置的节点列表长度不一致
    #[error("{partition}分区的名称数量不匹配: 期望 {expected} 个，实际 {got} 个")]
    NodeNameMismatch {
        partition: Partition,
        expected: usize,
        got: usize,
    },

    /// 字体数据无法解析
    #[error("字体数据无法解析: {0}")]
    InvalidFont(String),
}

/// 画布持久化错误
///
/// 持久化失败发生在画布完整生成之后，不会使画布失效，
/// 因而不走`RenderError`，而是随渲染结果一并返回给调用方。
#[derive(Debug, Error)]
#[error("保存画布到 {path:?} 失败: {source}")]
pub struct PersistenceError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}
