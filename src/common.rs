use log::LevelFilter;
use std::io::Write;

/// Initializes the logger with the running executable's name as the trace-level crate filter.
pub fn init_logger_exe() {
    let name = std::env::current_exe()
        .ok()
        .and_then(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    init_logger(name);
}

pub fn init_logger(name: impl Into<String>) {
    logger_builder(name).parse_default_env().init();
}

/// Default filters and line format. Directives parsed afterwards (`RUST_LOG`) take precedence.
fn logger_builder(name: impl Into<String>) -> env_logger::Builder {
    let crate_name = name.into().replace('-', "_");

    let mut builder = env_logger::Builder::new();
    builder
        .filter(Some(&crate_name), LevelFilter::Trace)
        .filter(Some("bone_age"), LevelFilter::Debug)
        .filter(Some("boneage"), LevelFilter::Info)
        .format(move |f, rec| {
            let now = humantime::format_rfc3339_millis(std::time::SystemTime::now());
            let module = rec.module_path().unwrap_or("<unknown>");
            let line = rec.line().unwrap_or(u32::MIN);
            let level = rec.level();

            writeln!(
                f,
                "[{} {} {} {}:{}] {}",
                level,
                crate_name,
                now,
                module,
                line,
                rec.args()
            )
        });
    builder
}
