//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及鼠标命中区域

use ratatui::layout::{Position, Rect};

use crate::clock::ClockState;
use crate::config::Config;
use crate::models::{NavLink, SearchEngine, default_engines};

/// 应用状态
pub struct App {
    pub engines: Vec<SearchEngine>,
    pub current_engine: usize, // engines 的下标，engines 永不为空
    pub links: Vec<NavLink>,
    pub query: String,
    pub dropdown_open: bool,
    pub dropdown_cursor: usize,
    pub clock: ClockState,
    pub message: Option<String>,
    pub hit_areas: HitAreas,
}

/// 上一帧渲染出的可点击区域，由 view 写入、input 读取
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitAreas {
    pub engine_button: Rect,
    pub search_button: Rect,
    pub query_input: Rect,
    pub dropdown: Rect,
    pub dropdown_items: Vec<Rect>,
    pub links: Vec<Rect>,
}

impl HitAreas {
    pub fn dropdown_item_at(&self, pos: Position) -> Option<usize> {
        self.dropdown_items.iter().position(|r| r.contains(pos))
    }

    pub fn link_at(&self, pos: Position) -> Option<usize> {
        self.links.iter().position(|r| r.contains(pos))
    }
}

impl App {
    /// 创建新的应用实例，默认选中第一个搜索引擎
    pub fn new(config: Config) -> Self {
        let engines = if config.search_engines.is_empty() {
            default_engines()
        } else {
            config.search_engines
        };

        Self {
            engines,
            current_engine: 0,
            links: config.nav_links,
            query: String::new(),
            dropdown_open: false,
            dropdown_cursor: 0,
            clock: ClockState::now(),
            message: None,
            hit_areas: HitAreas::default(),
        }
    }

    /// 当前搜索引擎
    pub fn current_engine(&self) -> &SearchEngine {
        &self.engines[self.current_engine]
    }

    /// 每秒刷新时钟
    pub fn tick(&mut self) {
        self.clock = ClockState::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_links;

    #[test]
    fn first_engine_is_current() {
        let app = App::new(Config::default());
        assert_eq!(app.current_engine().name, "百度");
        assert!(!app.dropdown_open);
        assert_eq!(app.links, default_links());
    }

    #[test]
    fn empty_engine_list_is_replaced() {
        let app = App::new(Config {
            nav_links: Vec::new(),
            search_engines: Vec::new(),
        });
        assert_eq!(app.engines, default_engines());
        assert!(app.links.is_empty());
    }

    #[test]
    fn hit_areas_lookup() {
        let areas = HitAreas {
            links: vec![Rect::new(0, 10, 5, 1), Rect::new(8, 10, 5, 1)],
            ..Default::default()
        };
        assert_eq!(areas.link_at(Position::new(9, 10)), Some(1));
        assert_eq!(areas.link_at(Position::new(6, 10)), None);
        assert_eq!(areas.dropdown_item_at(Position::new(0, 0)), None);
    }
}
