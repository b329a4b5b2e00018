//! folio: 终端里的个人作品集页面
//!
//! 核心是 [`typewriter`]，一个由可注入时钟驱动的打字机效果状态机；
//! 其余模块负责资料加载、主题和 TUI 渲染。

pub mod logging;
pub mod models;
pub mod storage;
pub mod theme;
pub mod typewriter;
pub mod ui;
