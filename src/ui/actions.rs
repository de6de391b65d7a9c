//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action，dispatch 的结果用 Effect 交还给主循环

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 搜索引擎下拉菜单
    ToggleDropdown,
    CloseDropdown,      // 点击菜单外部 / Esc
    SelectEngine(usize), // 点击菜单项
    MoveCursorUp,
    MoveCursorDown,

    // 搜索框
    Submit,      // Enter
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    ClearQuery,  // Ctrl+U / Esc

    OpenLink(usize),
}

/// 需要主循环执行的副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    Open(Navigation),
}

/// 交给系统浏览器打开的地址
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Search(String),
    Link(String),
}

impl Navigation {
    pub fn url(&self) -> &str {
        match self {
            Navigation::Search(url) | Navigation::Link(url) => url,
        }
    }
}
