use ab_glyph::{FontArc, PxScale};

use crate::errors::RenderError;

/// 标签默认字号（像素）
pub const DEFAULT_LABEL_PX: f32 = 10.0;

/// 标签字体：ab_glyph字体 + 像素字号
///
/// 字体文件由调用方提供，库本身不内嵌字体；
/// 不提供字体时名称标签整体跳过，管线其余部分不受影响。
#[derive(Debug, Clone)]
pub struct LabelFont {
    font: FontArc,
    scale: PxScale,
}

impl LabelFont {
    /// 从字体文件字节（ttf/otf）构造，使用默认字号
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, RenderError> {
        Self::from_bytes_with_px(data, DEFAULT_LABEL_PX)
    }

    /// 从字体文件字节构造并指定字号
    pub fn from_bytes_with_px(data: Vec<u8>, px: f32) -> Result<Self, RenderError> {
        let font = FontArc::try_from_vec(data)
            .map_err(|e| RenderError::InvalidFont(e.to_string()))?;
        Ok(Self {
            font,
            scale: PxScale::from(px),
        })
    }

    pub(crate) fn font(&self) -> &FontArc {
        &self.font
    }

    pub(crate) fn scale(&self) -> PxScale {
        self.scale
    }

    /// 字号（像素），用于标签的纵向锚定
    pub(crate) fn px(&self) -> f32 {
        self.scale.y
    }
}
