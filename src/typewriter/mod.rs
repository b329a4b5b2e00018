//! 打字机效果
//!
//! - engine.rs: 纯状态机，不依赖时间
//! - clock.rs: 可注入的时钟
//! - cursor.rs: 独立的光标闪烁
//! - schedule.rs: 单计时器驱动、取消

pub mod clock;
pub mod cursor;
pub mod engine;
pub mod schedule;

pub use clock::{Clock, SystemClock};
pub use engine::{Phase, Typewriter, TypewriterConfig, TypewriterError};
pub use schedule::Animation;
