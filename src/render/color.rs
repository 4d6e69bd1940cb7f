use serde::{Deserialize, Serialize};

/// 连接配色策略
///
/// 布局与绘制不关心颜色如何得出；更换配色方案只需换一个策略实现，
/// 不触碰任何布局代码。
pub trait EdgeColorScheme {
    /// 给出一条计入连接的RGB颜色
    fn edge_color(&self, weight: f32, enabled: bool) -> [u8; 3];
}

/// 权重线性混色
///
/// 禁用的连接一律使用固定的中性灰；启用的连接把权重规格化到[0,1]后，
/// 在正/负两端颜色之间逐通道线性插值。`saturation`是饱和常数：
/// 权重达到该值即完全取正端颜色，0或负权重完全取负端颜色。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightBlend {
    pub positive: [u8; 3],
    pub negative: [u8; 3],
    pub disabled: [u8; 3],
    pub saturation: f32,
}

impl Default for WeightBlend {
    fn default() -> Self {
        Self {
            positive: [255, 25, 25],
            negative: [25, 255, 25],
            disabled: [128, 128, 128],
            saturation: 4.0,
        }
    }
}

impl WeightBlend {
    /// 只替换正/负两端颜色，其余沿用默认值
    pub fn with_colors(positive: [u8; 3], negative: [u8; 3]) -> Self {
        Self {
            positive,
            negative,
            ..Self::default()
        }
    }

    /// 权重规格化后的插值系数，始终落在[0,1]
    pub fn blend_factor(&self, weight: f32) -> f32 {
        (weight / self.saturation).clamp(0.0, 1.0)
    }
}

impl EdgeColorScheme for WeightBlend {
    fn edge_color(&self, weight: f32, enabled: bool) -> [u8; 3] {
        if !enabled {
            return self.disabled;
        }
        let t = self.blend_factor(weight);
        let mut rgb = [0u8; 3];
        for c in 0..3 {
            let v = f32::from(self.positive[c]) * t + f32::from(self.negative[c]) * (1.0 - t);
            rgb[c] = v.round() as u8;
        }
        rgb
    }
}

/// 正/负/灰三分的离散配色
///
/// 不做权重插值：非负权重取正端颜色，负权重取负端颜色，禁用为灰。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignTrichotomy {
    pub positive: [u8; 3],
    pub negative: [u8; 3],
    pub disabled: [u8; 3],
}

impl Default for SignTrichotomy {
    fn default() -> Self {
        Self {
            positive: [255, 25, 25],
            negative: [25, 255, 25],
            disabled: [128, 128, 128],
        }
    }
}

impl EdgeColorScheme for SignTrichotomy {
    fn edge_color(&self, weight: f32, enabled: bool) -> [u8; 3] {
        if !enabled {
            return self.disabled;
        }
        if weight >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }
}
