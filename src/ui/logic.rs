//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种状态转换方法

use std::io;

use tracing::{info, warn};

use super::actions::{Action, Effect, Navigation};
use super::state::App;
use crate::search::build_search_url;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => return Effect::Quit,

            Action::ToggleDropdown => self.toggle_dropdown(),
            Action::CloseDropdown => self.close_dropdown(),
            Action::SelectEngine(index) => self.select_engine(index),
            Action::MoveCursorUp => self.move_cursor_up(),
            Action::MoveCursorDown => self.move_cursor_down(),

            Action::Submit => return self.submit(),
            Action::Input(c) => self.query.push(c),
            Action::DeleteChar => {
                self.query.pop();
            }
            Action::ClearQuery => {
                self.query.clear();
                self.message = None;
            }

            Action::OpenLink(index) => {
                if let Some(link) = self.links.get(index) {
                    return Effect::Open(Navigation::Link(link.url.clone()));
                }
            }
        }
        Effect::None
    }

    // ============ 下拉菜单 ============

    /// 打开时光标停在当前引擎上
    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
        if self.dropdown_open {
            self.dropdown_cursor = self.current_engine;
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// 选中引擎并关闭菜单
    pub fn select_engine(&mut self, index: usize) {
        if index < self.engines.len() {
            self.current_engine = index;
        }
        self.dropdown_open = false;
    }

    pub fn move_cursor_up(&mut self) {
        if self.dropdown_cursor > 0 {
            self.dropdown_cursor -= 1;
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.dropdown_cursor + 1 < self.engines.len() {
            self.dropdown_cursor += 1;
        }
    }

    // ============ 搜索 ============

    /// 空白查询不产生任何跳转
    pub fn submit(&mut self) -> Effect {
        match build_search_url(self.current_engine(), &self.query) {
            Some(url) => Effect::Open(Navigation::Search(url)),
            None => Effect::None,
        }
    }

    /// 主循环打开浏览器之后回报结果
    pub fn finish_navigation(&mut self, navigation: &Navigation, result: io::Result<()>) {
        let url = navigation.url();
        match result {
            Ok(()) => {
                info!(url, "已在浏览器中打开");
                if let Navigation::Search(_) = navigation {
                    self.query.clear();
                }
                self.message = Some(format!("已打开 {url}"));
            }
            Err(e) => {
                warn!(url, error = %e, "无法打开浏览器");
                self.message = Some(format!("无法打开 {url}: {e}"));
            }
        }
    }
}
