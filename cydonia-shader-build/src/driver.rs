//! 遍历与调度
//!
//! 单次线性流程：遍历源码目录 -> 按扩展名分类 -> 逐个调用编译器。
//! 文件之间没有依赖，失败的编译不会中断整体流程。

use anyhow::Context;
use rayon::prelude::*;

use crate::compiler::{CompileOutcome, GlslCompiler};
use crate::config::ShaderBuildConfig;
use crate::task::ShaderCompileTask;

/// 一次完整编译的统计结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BuildSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// 收集源码目录下所有可识别的编译任务
///
/// 遍历顺序由文件系统决定，不做任何保证；不可读的目录项会被跳过。
/// 源码目录不存在时返回空列表。
pub fn collect_tasks(config: &ShaderBuildConfig) -> Vec<ShaderCompileTask> {
    walkdir::WalkDir::new(&config.src_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| ShaderCompileTask::new(&entry, config))
        .collect()
}

/// 编译源码目录下的所有 shader 文件
///
/// 默认逐个串行编译；`config.parallel` 开启后使用 rayon 并行。
pub fn run(config: &ShaderBuildConfig) -> anyhow::Result<BuildSummary> {
    let tasks = collect_tasks(config);

    if !tasks.is_empty() {
        std::fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("创建输出目录失败: {:?}", config.output_dir))?;
    }

    let compiler = GlslCompiler::new(&config.compiler);
    let compile_one = |task: &ShaderCompileTask| {
        log::info!("Compiling shader: {:?}", task.shader_path);
        compiler.compile(task)
    };

    let outcomes: Vec<CompileOutcome> = if config.parallel {
        tasks.par_iter().map(compile_one).collect()
    } else {
        tasks.iter().map(compile_one).collect()
    };

    let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
    Ok(BuildSummary {
        total: tasks.len(),
        succeeded,
        failed: tasks.len() - succeeded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use std::path::PathBuf;

    /// 在临时目录下构造约定布局的源码树
    fn write_sources(root: &std::path::Path, files: &[(&str, &str)]) {
        for (subdir, name) in files {
            let dir = root.join(subdir);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(name), "#version 450\nvoid main() {}\n").unwrap();
        }
    }

    fn test_config(root: &std::path::Path) -> ShaderBuildConfig {
        ShaderBuildConfig {
            src_dir: root.join("GLSL"),
            output_dir: root.join("SPIR-V"),
            compiler: "cydonia-no-such-compiler".to_string(),
            parallel: false,
        }
    }

    #[test]
    fn test_collects_one_task_per_recognized_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        write_sources(
            &config.src_dir,
            &[
                ("Vertex", "basic.vert"),
                ("Fragment", "tonemap.frag"),
                ("Compute", "blur.comp"),
                ("Vertex", "notes.txt"),
            ],
        );

        let tasks = collect_tasks(&config);
        assert_eq!(tasks.len(), 3);

        // 集合相等，与遍历顺序无关
        let outputs: HashSet<PathBuf> = tasks.iter().map(|t| t.output_path.clone()).collect();
        let expected: HashSet<PathBuf> = ["basic_VERT.spv", "tonemap_FRAG.spv", "blur_COMP.spv"]
            .iter()
            .map(|name| config.output_dir.join(name))
            .collect();
        assert_eq!(outputs, expected);
    }

    #[test]
    fn test_nested_files_are_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        write_sources(&config.src_dir, &[("Vertex/nested/deeper", "sky.vert")]);

        let tasks = collect_tasks(&config);
        assert_eq!(tasks.len(), 1);
        // 输入路径按约定重建，而非实际发现的位置
        assert_eq!(tasks[0].shader_path, config.src_dir.join("Vertex").join("sky.vert"));
    }

    #[test]
    fn test_empty_tree_runs_normally() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::create_dir_all(&config.src_dir).unwrap();

        let summary = run(&config).unwrap();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.failed, 0);
        assert!(summary.all_succeeded());
        // 没有任务时不创建输出目录
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn test_missing_src_dir_yields_no_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        assert!(collect_tasks(&config).is_empty());
        assert!(run(&config).unwrap().all_succeeded());
    }

    #[test]
    fn test_failed_compiles_are_counted_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        write_sources(
            &config.src_dir,
            &[("Vertex", "basic.vert"), ("Fragment", "tonemap.frag")],
        );

        // 编译器不存在，每个任务都失败，但 run 本身正常返回
        let summary = run(&config).unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.failed, 2);
    }

    #[test]
    fn test_parallel_run_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        write_sources(
            &config.src_dir,
            &[
                ("Vertex", "basic.vert"),
                ("Fragment", "tonemap.frag"),
                ("Compute", "blur.comp"),
            ],
        );

        let sequential = run(&config).unwrap();

        config.parallel = true;
        let parallel = run(&config).unwrap();

        // 并行只是调度方式不同，统计结果与串行一致
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.total, 3);
        assert_eq!(parallel.failed, 3);
    }
}
