//! # NEAT Viz
//!
//! `neat_viz`项目旨在用纯rust把[NEAT](https://ieeexplore.ieee.org/document/6790655)这类
//! 网络突变（类似遗传算法）算法产出的基因组（genome）拓扑渲染为2D光栅图像：
//! 节点划分为输入/输出/隐藏三个分区，隐藏节点按"到输出的依赖距离"自动分层，
//! 连接颜色由权重与启用状态决定。渲染是一个纯函数式的管线，
//! 一次调用产出一张画布，调用之间不保留任何状态。
//!

pub mod errors;
pub mod genome;
pub mod layout;
pub mod render;
