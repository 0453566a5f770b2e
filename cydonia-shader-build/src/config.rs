//! 编译配置
//!
//! 原本硬编码的 `GLSL` / `SPIR-V` 目录名和 glslc 命令改为显式的配置项，
//! 默认值与原有约定保持一致。可通过 TOML 配置文件覆盖。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Shader 编译的全部配置项
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShaderBuildConfig {
    /// GLSL 源码根目录
    pub src_dir: PathBuf,

    /// SPIR-V 输出目录（扁平结构，不保留子目录层级）
    pub output_dir: PathBuf,

    /// 外部编译器命令，需要在 PATH 中可解析
    pub compiler: String,

    /// 是否并行编译。各文件之间相互独立，默认保持串行
    pub parallel: bool,
}

impl Default for ShaderBuildConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("GLSL"),
            output_dir: PathBuf::from("SPIR-V"),
            compiler: "glslc".to_string(),
            parallel: false,
        }
    }
}

impl ShaderBuildConfig {
    /// 从 TOML 文件加载配置，缺失的字段使用默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).with_context(|| format!("读取配置文件失败: {:?}", path.as_ref()))?;

        let config: Self =
            toml::from_str(&content).with_context(|| format!("解析 TOML 配置失败: {:?}", path.as_ref()))?;

        Ok(config)
    }
}
