//! 通用 UI 组件
//!
//! 弹出框、单行输入框等通用组件

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::layouts::text_width;

/// [组件] 弹出框基础框架，返回内部区域
pub fn render_popup_frame(frame: &mut Frame, area: Rect, border_color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 单行输入框，内容过长时向左滚动，光标始终在末尾
pub fn render_line_input(frame: &mut Frame, area: Rect, value: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = text_width(value);
    let visible = area.width - 1; // 给光标留一格
    let offset = width.saturating_sub(visible);

    let input = Paragraph::new(value).style(style).scroll((0, offset));
    frame.render_widget(input, area);

    frame.set_cursor_position(Position::new(area.x + width.min(visible), area.y));
}
