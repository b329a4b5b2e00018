//! 终端版个人主页
//!
//! - state.rs: App，持有资料、打字机动画、主题和滚动位置
//! - actions.rs / input.rs: 按键 -> Action（滚动、跳转分区、菜单、切换主题）
//! - logic.rs: 执行 Action，修改 App
//! - view/: 把 App 画成导航栏、整页内容和菜单

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use input::handle_key_event;
pub use state::App;
pub use view::render;
