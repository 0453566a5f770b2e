//! 编译任务的构造
//!
//! 遍历到的每个可识别文件对应一个 [`ShaderCompileTask`]，
//! 记录编译器的输入路径、输出路径和 shader stage。

use std::path::PathBuf;

use crate::config::ShaderBuildConfig;
use crate::stage::ShaderStage;

/// 一个具体的编译任务
///
/// 注意：输入路径是按照 `<src_dir>/<stage 子目录>/<文件名>` 的约定重建的，
/// 而不是遍历时实际发现的路径。shader 文件若没有放在与扩展名匹配的
/// 约定子目录下，重建出的路径将指向不存在的文件。这是对原有行为的
/// 有意保留，见 DESIGN.md。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderCompileTask {
    /// 编译器的输入路径（重建的约定路径）
    pub shader_path: PathBuf,
    /// 编译产物的输出路径
    pub output_path: PathBuf,
    pub stage: ShaderStage,
}

impl ShaderCompileTask {
    /// 从目录项创建编译任务
    ///
    /// # Returns
    /// 如果文件扩展名不被识别，返回 None
    pub fn new(entry: &walkdir::DirEntry, config: &ShaderBuildConfig) -> Option<Self> {
        let file_name = entry.file_name().to_str()?;
        Self::from_file_name(file_name, config)
    }

    /// 仅根据文件名（不含目录）构造任务，路径布局完全由配置决定
    pub fn from_file_name(file_name: &str, config: &ShaderBuildConfig) -> Option<Self> {
        let path = std::path::Path::new(file_name);
        let stage = ShaderStage::from_extension(path.extension()?.to_str()?)?;
        let shader_name = path.file_stem()?.to_str()?;

        let shader_path = config.src_dir.join(stage.src_subdir()).join(file_name);
        let output_path = config
            .output_dir
            .join(format!("{}{}.spv", shader_name, stage.output_suffix()));

        Some(Self {
            shader_path,
            output_path,
            stage,
        })
    }
}
