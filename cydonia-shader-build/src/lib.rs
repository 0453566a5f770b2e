//! Shader 编译工具
//!
//! 将 `GLSL/` 目录下的所有 shader 文件编译为 SPIR-V 文件，输出到 `SPIR-V/` 目录。
//!
//! 文件按扩展名分类到对应的 shader stage（`.vert` / `.frag` / `.comp`），
//! 其他扩展名的文件会被忽略。每个识别到的文件最多产生一次 glslc 调用。

pub mod compiler;
pub mod config;
pub mod driver;
pub mod stage;
pub mod task;
