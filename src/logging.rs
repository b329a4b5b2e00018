//! 日志初始化
//!
//! TUI 占用终端，所以日志只写文件；打不开文件时不记日志。

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// 安装全局 subscriber，默认级别 info，可用 RUST_LOG 覆盖
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = open_log_file(log_file_candidates()).map(|(path, file)| {
        (
            path,
            fmt::layer().with_ansi(false).with_writer(Mutex::new(file)),
        )
    });

    match file_layer {
        Some((path, layer)) => {
            tracing_subscriber::registry().with(filter).with(layer).init();
            tracing::info!(path = %path.display(), "folio log opened");
        }
        None => tracing_subscriber::registry().with(filter).init(),
    }
}

/// 依次尝试候选路径，返回第一个能以追加方式打开的日志文件
fn open_log_file(candidates: impl IntoIterator<Item = PathBuf>) -> Option<(PathBuf, File)> {
    candidates.into_iter().find_map(|path| {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).ok()?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
        Some((path, file))
    })
}

/// ~/.local/share/folio/folio.log，其次 ./.folio/folio.log
fn log_file_candidates() -> Vec<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("folio"))
        .into_iter()
        .chain([PathBuf::from(".folio")])
        .map(|dir| dir.join("folio.log"))
        .collect()
}
