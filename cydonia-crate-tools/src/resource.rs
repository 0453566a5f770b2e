use std::path::{Path, PathBuf};

/// 统一资源路径管理
///
/// 路径基于工作区根目录（通过 `CARGO_MANIFEST_DIR` 推导）。
/// 避免使用硬编码相对路径，确保在不同构建环境下路径一致。
///
/// shader 源码和产物的目录布局由 `ShaderBuildConfig` 决定，此处只提供
/// 工作区根目录的定位。
pub struct CydoniaPath {}

impl CydoniaPath {
    /// 获取工作区根目录
    pub fn workspace_path() -> PathBuf {
        // 从当前包的位置推导 workspace 目录
        Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap().to_path_buf()
    }
}
