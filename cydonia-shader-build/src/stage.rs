//! Shader stage 的分类规则
//!
//! stage 完全由文件扩展名决定，与文件内容无关。

/// Shader 的执行阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    /// 根据文件扩展名解析 shader stage
    ///
    /// # Returns
    /// 扩展名不被识别时返回 None
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "vert" => Some(Self::Vertex),
            "frag" => Some(Self::Fragment),
            "comp" => Some(Self::Compute),
            _ => None,
        }
    }

    /// 按照约定，该 stage 的源码所在的子目录名
    pub fn src_subdir(self) -> &'static str {
        match self {
            Self::Vertex => "Vertex",
            Self::Fragment => "Fragment",
            Self::Compute => "Compute",
        }
    }

    /// 输出文件名的后缀，如 `basic.vert` -> `basic_VERT.spv`
    pub fn output_suffix(self) -> &'static str {
        match self {
            Self::Vertex => "_VERT",
            Self::Fragment => "_FRAG",
            Self::Compute => "_COMP",
        }
    }
}
