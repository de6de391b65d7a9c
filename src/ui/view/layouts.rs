//! 布局辅助函数

use ratatui::{layout::Rect, text::Line};

/// 文本显示宽度，超出 u16 时截到 u16::MAX
pub fn text_width(text: &str) -> u16 {
    u16::try_from(Line::from(text).width()).unwrap_or(u16::MAX)
}

/// 在 area 中水平居中一个宽度为 width 的区域
pub fn center_horizontal(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// 把若干项排成居中的一行，返回每项的区域
///
/// 放不下的项直接丢弃，返回值可能比 widths 短
pub fn row_centered(area: Rect, widths: &[u16], gap: u16) -> Vec<Rect> {
    let mut total = 0u16;
    let mut fitting = 0;
    for (i, &w) in widths.iter().enumerate() {
        let step = if i == 0 { w } else { w.saturating_add(gap) };
        let next = total.saturating_add(step);
        if next > area.width {
            break;
        }
        total = next;
        fitting += 1;
    }

    let mut x = area.x + (area.width - total) / 2;
    widths[..fitting]
        .iter()
        .map(|&w| {
            let rect = Rect::new(x, area.y, w, area.height.min(1));
            x = x.saturating_add(w).saturating_add(gap);
            rect
        })
        .collect()
}
