use std::io::Write;

/// 初始化全局日志，带颜色的等级标签和时间戳
///
/// 默认等级为 Info，可通过 `RUST_LOG` 覆盖。
pub fn init_log() {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            let level_color = match record.level() {
                log::Level::Error => anstyle::AnsiColor::Red,
                log::Level::Warn => anstyle::AnsiColor::Yellow,
                log::Level::Info => anstyle::AnsiColor::Green,
                log::Level::Debug | log::Level::Trace => anstyle::AnsiColor::Cyan,
            };
            let level_style = buf
                .default_level_style(record.level())
                .fg_color(Some(anstyle::Color::Ansi(level_color)));
            let dim_style = anstyle::Style::new().fg_color(Some(anstyle::Color::Rgb(anstyle::RgbColor(128, 128, 128))));

            let time = chrono::Local::now().format("%H:%M:%S%.3f");
            let target = record.target();

            writeln!(
                buf,
                "{level_style}[{time}] {:5}{level_style:#} {dim_style}{target}{dim_style:#} {}",
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info);

    // 环境变量优先于默认等级
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}
