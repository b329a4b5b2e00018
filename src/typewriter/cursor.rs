//! 光标闪烁
//!
//! 与打字状态完全独立的周期开关：亮 500ms，灭 500ms。

use std::time::Duration;

pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct CursorBlink {
    interval: Duration,
    visible: bool,
    next_toggle: Duration,
}

impl CursorBlink {
    pub fn new(interval: Duration, now: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            visible: true,
            next_toggle: now + interval,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn next_toggle(&self) -> Duration {
        self.next_toggle
    }

    /// 推进到 `now`，返回可见性是否变化
    pub fn poll(&mut self, now: Duration) -> bool {
        if now < self.next_toggle {
            return false;
        }

        let behind = (now - self.next_toggle).as_nanos();
        let toggles = behind / self.interval.as_nanos() + 1;
        self.next_toggle += Duration::from_nanos((self.interval.as_nanos() * toggles) as u64);

        if toggles % 2 == 1 {
            self.visible = !self.visible;
            true
        } else {
            false
        }
    }
}
