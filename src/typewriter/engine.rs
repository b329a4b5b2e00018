//! 打字机状态机
//!
//! Typing -> Holding -> Deleting -> Typing (下一条短语) -> ...
//!
//! 引擎本身不关心时间，只负责“执行一步”并告诉调用方下一步需要等待多久。
//! 真正的计时由 [`super::schedule::Animation`] 负责。

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, trace};

/// 默认的停顿时长（整句打完后到开始删除之间）
pub const DEFAULT_HOLD_DELAY: Duration = Duration::from_millis(1500);
/// 默认的打字间隔
pub const DEFAULT_TYPE_SPEED: Duration = Duration::from_millis(100);
/// 默认删除速度为打字速度的两倍
pub const DEFAULT_DELETE_RATIO: u32 = 2;

/// 配置错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    #[error("phrase list must not be empty")]
    EmptyPhrases,
    #[error("hold delay must be greater than zero")]
    ZeroHoldDelay,
    #[error("type speed must be greater than zero")]
    ZeroTypeSpeed,
    #[error("delete ratio must be at least 1")]
    ZeroDeleteRatio,
    #[error("deleting ({delete:?} per char) must be faster than typing ({typing:?} per char)")]
    DeleteNotFaster { delete: Duration, typing: Duration },
}

/// 时间参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub hold_delay: Duration,
    pub type_speed: Duration,
    pub delete_ratio: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            hold_delay: DEFAULT_HOLD_DELAY,
            type_speed: DEFAULT_TYPE_SPEED,
            delete_ratio: DEFAULT_DELETE_RATIO,
        }
    }
}

impl TypewriterConfig {
    pub fn from_millis(hold_delay_ms: u64, type_speed_ms: u64, delete_ratio: u32) -> Self {
        Self {
            hold_delay: Duration::from_millis(hold_delay_ms),
            type_speed: Duration::from_millis(type_speed_ms),
            delete_ratio,
        }
    }

    /// 删除一个字符的间隔，最少 1ms
    pub fn delete_speed(&self) -> Duration {
        (self.type_speed / self.delete_ratio.max(1)).max(Duration::from_millis(1))
    }

    pub fn validate(&self) -> Result<(), TypewriterError> {
        if self.hold_delay.is_zero() {
            return Err(TypewriterError::ZeroHoldDelay);
        }
        if self.type_speed.is_zero() {
            return Err(TypewriterError::ZeroTypeSpeed);
        }
        if self.delete_ratio == 0 {
            return Err(TypewriterError::ZeroDeleteRatio);
        }
        // ratio 为 1 或打字间隔太短被 1ms 下限抬回去时，删除不会更快
        let delete = self.delete_speed();
        if delete >= self.type_speed {
            return Err(TypewriterError::DeleteNotFaster {
                delete,
                typing: self.type_speed,
            });
        }
        Ok(())
    }
}

/// 当前阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// 打字机引擎
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    index: usize,
    display: String, // 始终是 phrases[index] 的前缀
    phase: Phase,
}

impl Typewriter {
    /// 创建引擎；空短语列表或零时长会被拒绝
    pub fn new<I, S>(phrases: I, config: TypewriterConfig) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypewriterError::EmptyPhrases);
        }
        config.validate()?;

        let mut typewriter = Self {
            phrases,
            config,
            index: 0,
            display: String::new(),
            phase: Phase::Typing,
        };
        // 第一条短语可能为空串
        typewriter.settle();
        Ok(typewriter)
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    /// 距离下一步需要等待的时长
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.config.type_speed,
            Phase::Holding => self.config.hold_delay,
            Phase::Deleting => self.config.delete_speed(),
        }
    }

    /// 执行一步，返回显示内容是否变化
    pub fn step(&mut self) -> bool {
        let before = self.display.len();

        match self.phase {
            Phase::Typing => {
                let phrase = &self.phrases[self.index];
                if let Some(c) = phrase[self.display.len()..].chars().next() {
                    self.display.push(c);
                }
            }
            Phase::Holding => {
                // 停顿结束，这一步同时删掉第一个字符
                self.enter(Phase::Deleting);
                self.display.pop();
            }
            Phase::Deleting => {
                self.display.pop();
            }
        }

        trace!(display = %self.display, phase = ?self.phase, "typewriter step");
        self.settle();
        self.display.len() != before
    }

    /// 处理不需要等待的状态迁移
    fn settle(&mut self) {
        if self.phase == Phase::Deleting && self.display.is_empty() {
            self.index = (self.index + 1) % self.phrases.len();
            self.enter(Phase::Typing);
        }
        if self.phase == Phase::Typing && self.display == self.phrases[self.index] {
            self.enter(Phase::Holding);
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, index = self.index, "typewriter phase");
        self.phase = phase;
    }
}
