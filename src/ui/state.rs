//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::rc::Rc;

use crate::models::{Profile, Section};
use crate::theme::Theme;
use crate::typewriter::{Animation, Clock, SystemClock, TypewriterError};

/// 滚动超过该行数后导航栏显示背景
pub const SCROLLED_THRESHOLD: usize = 2;

pub type SharedClock = Rc<dyn Clock>;

/// 应用状态
pub struct App {
    pub profile: Profile,
    pub animation: Animation<SharedClock>,
    pub is_dark: bool,
    pub mode: AppMode,
    pub menu_index: usize,
    pub scroll: usize,
    pub viewport_height: usize,
    pub layout: PageLayout,
    pub message: Option<String>,
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Browsing,
    Menu,
}

/// 文档布局：总行数和每个分区的起始行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub height: usize,
    pub anchors: Vec<(Section, usize)>,
}

impl PageLayout {
    pub fn anchor(&self, section: Section) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, line)| *line)
    }

    /// 最后一个起始行不超过 `offset` 的分区
    pub fn section_at(&self, offset: usize) -> Section {
        self.anchors
            .iter()
            .take_while(|(_, line)| *line <= offset)
            .last()
            .map(|(s, _)| *s)
            .unwrap_or(Section::Home)
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(profile: Profile, is_dark: bool) -> Result<Self, TypewriterError> {
        Self::with_clock(profile, is_dark, Rc::new(SystemClock::new()))
    }

    pub fn with_clock(
        profile: Profile,
        is_dark: bool,
        clock: SharedClock,
    ) -> Result<Self, TypewriterError> {
        let animation = Animation::new(profile.typewriter()?, clock);
        Ok(Self {
            profile,
            animation,
            is_dark,
            mode: AppMode::Browsing,
            menu_index: 0,
            scroll: 0,
            viewport_height: 0,
            layout: PageLayout::default(),
            message: None,
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.is_dark)
    }

    /// 滚动超过阈值后视为已滚动
    pub fn is_scrolled(&self) -> bool {
        self.scroll > SCROLLED_THRESHOLD
    }

    pub fn current_section(&self) -> Section {
        self.layout.section_at(self.scroll)
    }

    pub fn max_scroll(&self) -> usize {
        self.layout.height.saturating_sub(self.viewport_height.max(1))
    }

    /// 更新布局（每帧渲染时调用），并把滚动位置限制在范围内
    pub fn set_layout(&mut self, layout: PageLayout, viewport_height: usize) {
        self.layout = layout;
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }
}
