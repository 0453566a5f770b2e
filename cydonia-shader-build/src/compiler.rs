//! GLSL 着色器编译器
//!
//! 使用 glslc (来自 Vulkan SDK) 将 GLSL 着色器编译为 SPIR-V。
//! 每次编译同步等待外部进程结束，并把退出状态和 stderr 作为结构化结果返回。

use std::process::Output;

use crate::task::ShaderCompileTask;

/// 单个文件的编译结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    Success,
    /// 编译器正常启动但报告了错误
    CompilerError { exit_code: Option<i32>, stderr: String },
    /// 编译器进程无法启动，如 glslc 不在 PATH 中
    SpawnFailed { error: String },
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// GLSL 编译器
///
/// 调用约定为 `<compiler> <input> -o <output>`
#[derive(Debug)]
pub struct GlslCompiler {
    command: String,
}

impl GlslCompiler {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }

    /// 编译单个 shader 文件，阻塞直到外部进程结束
    pub fn compile(&self, task: &ShaderCompileTask) -> CompileOutcome {
        let output = std::process::Command::new(&self.command)
            .arg(&task.shader_path)
            .arg("-o")
            .arg(&task.output_path)
            .output();

        match output {
            Ok(output) => self.process_cmd_output(task, output),
            Err(e) => {
                log::error!("Failed to execute {}: {}", self.command, e);
                CompileOutcome::SpawnFailed { error: e.to_string() }
            }
        }
    }

    /// 根据 cmd 执行的结果，处理输出信息
    fn process_cmd_output(&self, task: &ShaderCompileTask, output: Output) -> CompileOutcome {
        if !output.stdout.is_empty() {
            log::info!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        }
        if !output.stderr.is_empty() {
            log::error!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        }

        if output.status.success() {
            CompileOutcome::Success
        } else {
            log::error!("Shader compile failed: {:?}", task.shader_path);
            CompileOutcome::CompilerError {
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShaderBuildConfig;
    use crate::task::ShaderCompileTask;

    #[test]
    fn test_missing_compiler_is_spawn_failure() {
        let task = ShaderCompileTask::from_file_name("basic.vert", &ShaderBuildConfig::default()).unwrap();
        let compiler = GlslCompiler::new("cydonia-no-such-compiler");

        let outcome = compiler.compile(&task);
        assert!(matches!(outcome, CompileOutcome::SpawnFailed { .. }));
        assert!(!outcome.is_success());
    }
}
