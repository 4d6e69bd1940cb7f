/*
 * @Author       : 老董
 * @Date         : 2026-05-20
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-06
 * @Description  : 渲染管线：校验 -> 分区 -> 层深 -> 坐标 -> 画边 -> 画节点
 *                 -> 画标签 -> 可选保存。画布是内存中的RGBA图像；
 *                 持久化失败不吞掉、也不使画布失效，随结果一并返回。
 */

mod color;
mod label;

pub use color::{EdgeColorScheme, SignTrichotomy, WeightBlend};
pub use label::{DEFAULT_LABEL_PX, LabelFont};

use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_antialiased_line_segment_mut, draw_filled_circle_mut, draw_text_mut,
};
use imageproc::pixelops::interpolate;
use serde::{Deserialize, Serialize};

use crate::errors::{PersistenceError, RenderError};
use crate::genome::{Genome, NetworkConfig};
use crate::layout::{
    LayoutMap, Partition, Partitions, assign_layers, partition_network, resolve_positions,
};

#[cfg(test)]
mod tests;

/// 节点圆的填充色
const NODE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// 输入/输出节点的名称标签，按配置列表的顺序一一对应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeNames {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

/// 一次渲染调用的全部选项
///
/// 每次调用构造一份、用完即弃；默认值每次新建，不跨调用共享或修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// 画布尺寸（宽, 高），单位像素，须均大于0
    pub size: (u32, u32),
    /// 可选的名称标签
    pub node_names: Option<NodeNames>,
    /// 是否把禁用的连接计入布局与绘制
    pub show_disabled: bool,
    /// 权重混色配置
    pub palette: WeightBlend,
    /// 可选的保存路径，图像格式由扩展名推断
    pub save_path: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: (1280, 720),
            node_names: None,
            show_disabled: true,
            palette: WeightBlend::default(),
            save_path: None,
        }
    }
}

impl RenderOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..Self::default()
        }
    }
}

/// 渲染结果
///
/// 画布总是完整返回。持久化失败作为`save_error`单独承载，
/// 不影响画布本身的有效性。
#[derive(Debug)]
pub struct RenderOutput {
    /// 渲染完成的RGBA画布
    pub canvas: RgbaImage,
    /// 成功落盘的路径（请求了保存且成功时为Some）
    pub saved_path: Option<PathBuf>,
    /// 持久化失败的错误（请求了保存且失败时为Some）
    pub save_error: Option<PersistenceError>,
}

/// 把基因组的网络拓扑渲染为一张RGBA光栅图
///
/// 配色使用`options.palette`；名称标签在同时提供了名称与字体时绘制。
pub fn render_network(
    genome: &Genome,
    config: &NetworkConfig,
    options: &RenderOptions,
    font: Option<&LabelFont>,
) -> Result<RenderOutput, RenderError> {
    let palette = options.palette;
    render_network_with(genome, config, options, &palette, font)
}

/// 同[`render_network`]，但允许注入自定义的连接配色策略
pub fn render_network_with(
    genome: &Genome,
    config: &NetworkConfig,
    options: &RenderOptions,
    scheme: &dyn EdgeColorScheme,
    font: Option<&LabelFont>,
) -> Result<RenderOutput, RenderError> {
    validate_names(config, options.node_names.as_ref())?;

    let partitions = partition_network(genome, config, options.show_disabled)?;
    let layers = assign_layers(genome, &partitions, options.show_disabled);
    let layout = resolve_positions(&partitions, &layers, options.size);

    let (width, height) = options.size;
    let mut canvas = RgbaImage::new(width, height);

    // 先画边、再画节点，节点圆覆盖在线之上
    draw_edges(&mut canvas, genome, &layout, scheme, options.show_disabled);
    draw_nodes(&mut canvas, &partitions, &layout)?;
    if let (Some(names), Some(font)) = (options.node_names.as_ref(), font) {
        draw_input_labels(&mut canvas, config, &layout, names, font);
    }

    let (saved_path, save_error) = match &options.save_path {
        Some(path) => match canvas.save(path) {
            Ok(()) => (Some(path.clone()), None),
            Err(source) => (
                None,
                Some(PersistenceError {
                    path: path.clone(),
                    source,
                }),
            ),
        },
        None => (None, None),
    };

    Ok(RenderOutput {
        canvas,
        saved_path,
        save_error,
    })
}

/// 名称列表必须与配置列表等长；在任何绘制发生前校验
fn validate_names(config: &NetworkConfig, names: Option<&NodeNames>) -> Result<(), RenderError> {
    let Some(names) = names else {
        return Ok(());
    };
    if names.inputs.len() != config.input_keys.len() {
        return Err(RenderError::NodeNameMismatch {
            partition: Partition::Input,
            expected: config.input_keys.len(),
            got: names.inputs.len(),
        });
    }
    if names.outputs.len() != config.output_keys.len() {
        return Err(RenderError::NodeNameMismatch {
            partition: Partition::Output,
            expected: config.output_keys.len(),
            got: names.outputs.len(),
        });
    }
    Ok(())
}

/// 每条计入的连接画一条抗锯齿直线
fn draw_edges(
    canvas: &mut RgbaImage,
    genome: &Genome,
    layout: &LayoutMap,
    scheme: &dyn EdgeColorScheme,
    show_disabled: bool,
) {
    for conn in genome.connections() {
        if !(conn.enabled || show_disabled) {
            continue;
        }
        // 端点未参与布局（如被剔除的输入作为目标）时，该连接不绘制
        let Some(start) = layout.position(conn.source) else {
            continue;
        };
        let Some(end) = layout.position(conn.target) else {
            continue;
        };
        let [r, g, b] = scheme.edge_color(conn.weight, conn.enabled);
        draw_antialiased_line_segment_mut(canvas, start, end, Rgba([r, g, b, 255]), interpolate);
    }
}

/// 每个参与布局的节点画一个实心圆
fn draw_nodes(
    canvas: &mut RgbaImage,
    partitions: &Partitions,
    layout: &LayoutMap,
) -> Result<(), RenderError> {
    for &key in partitions
        .inputs
        .iter()
        .chain(partitions.outputs.iter())
        .chain(partitions.hidden.iter())
    {
        let center = layout
            .position(key)
            .ok_or(RenderError::UnknownNodeReference { key })?;
        draw_filled_circle_mut(canvas, center, layout.radius, NODE_COLOR);
    }
    Ok(())
}

/// 在输入节点上方写名称：文字底边抬离圆心1.2倍半径，不与圆重叠
fn draw_input_labels(
    canvas: &mut RgbaImage,
    config: &NetworkConfig,
    layout: &LayoutMap,
    names: &NodeNames,
    font: &LabelFont,
) {
    for (&key, name) in config.input_keys.iter().zip(names.inputs.iter()) {
        // 被剔除的输入没有坐标，对应名称一并跳过
        let Some((_, cy)) = layout.position(key) else {
            continue;
        };
        let top = cy as f32 - 1.2 * layout.radius as f32 - font.px();
        draw_text_mut(
            canvas,
            NODE_COLOR,
            0,
            top.max(0.0) as i32,
            font.scale(),
            font.font(),
            name,
        );
    }
}
