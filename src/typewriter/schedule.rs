//! 动画调度
//!
//! [`Animation`] 把引擎、光标和时钟绑在一起。任意时刻最多只有一个打字计时器，
//! 每一步执行完后才安排下一步，`dispose` 之后不会再有任何状态变化。

use std::time::Duration;

use tracing::{debug, warn};

use super::clock::Clock;
use super::cursor::{BLINK_INTERVAL, CursorBlink};
use super::engine::Typewriter;

/// 一次 poll 最多补跑的步数，超过后直接对齐到当前时间
const MAX_CATCH_UP_STEPS: usize = 1024;

type Listener = Box<dyn FnMut(&str)>;

pub struct Animation<C: Clock> {
    clock: C,
    typewriter: Typewriter,
    cursor: CursorBlink,
    deadline: Option<Duration>, // None 表示已销毁
    listener: Option<Listener>,
}

impl<C: Clock> Animation<C> {
    pub fn new(typewriter: Typewriter, clock: C) -> Self {
        let now = clock.now();
        let deadline = now + typewriter.next_delay();
        Self {
            clock,
            cursor: CursorBlink::new(BLINK_INTERVAL, now),
            typewriter,
            deadline: Some(deadline),
            listener: None,
        }
    }

    /// 注册变化回调，每次显示内容变化后调用
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn display(&self) -> &str {
        self.typewriter.display()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor.visible()
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// 执行所有已到期的步骤，返回是否需要重绘
    pub fn poll(&mut self) -> bool {
        let Some(mut deadline) = self.deadline else {
            return false;
        };
        let now = self.clock.now();
        let mut changed = false;

        let mut steps = 0;
        while deadline <= now {
            if steps == MAX_CATCH_UP_STEPS {
                warn!(behind = ?(now - deadline), "typewriter fell behind, resyncing");
                deadline = now + self.typewriter.next_delay();
                break;
            }
            if self.typewriter.step() {
                changed = true;
                if let Some(listener) = self.listener.as_mut() {
                    listener(self.typewriter.display());
                }
            }
            deadline += self.typewriter.next_delay();
            steps += 1;
        }
        self.deadline = Some(deadline);

        changed |= self.cursor.poll(now);
        changed
    }

    /// 距离下一个计时器（打字或光标）到期还有多久；已销毁时返回 None
    pub fn time_until_next(&self) -> Option<Duration> {
        let deadline = self.deadline?;
        let next = deadline.min(self.cursor.next_toggle());
        Some(next.saturating_sub(self.clock.now()))
    }

    /// 取消挂起的计时器并丢弃回调
    pub fn dispose(&mut self) {
        if self.deadline.take().is_some() {
            debug!("typewriter animation disposed");
        }
        self.listener = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::typewriter::clock::ManualClock;
    use crate::typewriter::engine::TypewriterConfig;

    fn animation(
        phrases: &[&str],
        hold: u64,
        speed: u64,
    ) -> (Rc<ManualClock>, Animation<Rc<ManualClock>>) {
        let clock = Rc::new(ManualClock::new());
        let tw = Typewriter::new(
            phrases.iter().copied(),
            TypewriterConfig::from_millis(hold, speed, 2),
        )
        .unwrap();
        (clock.clone(), Animation::new(tw, clock))
    }

    #[test]
    fn test_trace_against_fake_clock() {
        let (clock, mut anim) = animation(&["A", "BC"], 500, 100);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        anim.on_change(move |s| sink.borrow_mut().push(s.to_string()));

        // 每 10ms 推进一次，共 2 秒
        for _ in 0..200 {
            clock.advance_ms(10);
            anim.poll();
        }

        // t=100 "A", t=600 "", t=700 "B", t=800 "BC", t=1300 "B",
        // t=1350 "", t=1450 "A", t=1950 ""
        assert_eq!(*seen.borrow(), ["A", "", "B", "BC", "B", "", "A", ""]);
    }

    #[test]
    fn test_hold_keeps_display_stable() {
        let (clock, mut anim) = animation(&["hi"], 500, 100);
        clock.advance_ms(200);
        anim.poll();
        assert_eq!(anim.display(), "hi");

        clock.advance_ms(499);
        anim.poll();
        assert_eq!(anim.display(), "hi");

        clock.advance_ms(1);
        anim.poll();
        assert_eq!(anim.display(), "h");
    }

    #[test]
    fn test_coarse_polling_catches_up() {
        let (clock, mut anim) = animation(&["abc"], 1000, 100);
        clock.advance_ms(350);
        assert!(anim.poll());
        assert_eq!(anim.display(), "abc");
    }

    #[test]
    fn test_dispose_stops_mutation_and_callbacks() {
        let (clock, mut anim) = animation(&["hello"], 500, 100);
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        anim.on_change(move |_| *counter.borrow_mut() += 1);

        clock.advance_ms(250);
        anim.poll();
        assert_eq!(anim.display(), "he");
        assert_eq!(*calls.borrow(), 2);

        anim.dispose();
        assert!(!anim.is_active());
        let cursor = anim.cursor_visible();

        clock.advance_ms(10_000);
        assert!(!anim.poll());
        assert_eq!(anim.display(), "he");
        assert_eq!(anim.cursor_visible(), cursor);
        assert_eq!(*calls.borrow(), 2);
        assert_eq!(anim.time_until_next(), None);
    }

    #[test]
    fn test_time_until_next_picks_earliest_timer() {
        let (clock, anim) = animation(&["abc"], 1000, 100);
        assert_eq!(anim.time_until_next(), Some(Duration::from_millis(100)));

        clock.advance_ms(40);
        assert_eq!(anim.time_until_next(), Some(Duration::from_millis(60)));
    }

    #[test]
    fn test_cursor_blinks_while_holding() {
        let (clock, mut anim) = animation(&[""], 5000, 100);
        assert!(anim.cursor_visible());

        clock.advance_ms(500);
        assert!(anim.poll());
        assert!(!anim.cursor_visible());
        assert_eq!(anim.display(), "");

        clock.advance_ms(500);
        anim.poll();
        assert!(anim.cursor_visible());
    }

    #[test]
    fn test_resyncs_after_huge_gap() {
        let (clock, mut anim) = animation(&["ab"], 10, 2);
        clock.advance_ms(1_000_000);
        anim.poll();
        let wait = anim.time_until_next().unwrap();
        assert!(wait <= Duration::from_millis(500));
    }
}
