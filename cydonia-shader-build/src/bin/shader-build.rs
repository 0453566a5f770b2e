//! Shader 编译入口
//!
//! 无命令行参数。工作区根目录下存在 `shader-build.toml` 时读取其中的配置，
//! 否则使用默认的 `GLSL/` -> `SPIR-V/` 布局。

use cydonia_crate_tools::init_log::init_log;
use cydonia_crate_tools::resource::CydoniaPath;
use cydonia_shader_build::config::ShaderBuildConfig;
use cydonia_shader_build::driver;

fn main() -> anyhow::Result<()> {
    init_log();

    let config_path = CydoniaPath::workspace_path().join("shader-build.toml");
    let config = if config_path.exists() {
        ShaderBuildConfig::from_file(&config_path)?
    } else {
        ShaderBuildConfig::default()
    };

    log::info!("Shader src path: {:?}", config.src_dir);
    log::info!("Shader output path: {:?}", config.output_dir);

    let summary = driver::run(&config)?;
    log::info!(
        "Shader compilation completed: {} total, {} succeeded, {} failed.",
        summary.total,
        summary.succeeded,
        summary.failed
    );

    if !summary.all_succeeded() {
        std::process::exit(1);
    }
    Ok(())
}
