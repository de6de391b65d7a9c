//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件。渲染时顺带记录鼠标可点击的区域。

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::state::App;
use components::{render_line_input, render_popup_frame};
use layouts::{center_horizontal, row_centered, text_width};

const SEARCH_WIDTH: u16 = 64;
const SEARCH_BUTTON: &str = "搜索";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25), // 顶部留白
            Constraint::Length(2),      // 时钟
            Constraint::Length(1),
            Constraint::Length(3), // 搜索框
            Constraint::Min(0),
            Constraint::Length(1), // 导航链接
            Constraint::Length(1), // 帮助
        ])
        .split(frame.area());

    render_clock(frame, app, chunks[1]);

    let search_area = center_horizontal(chunks[3], SEARCH_WIDTH);
    render_search_bar(frame, app, search_area);

    render_links(frame, app, chunks[5]);
    render_help(frame, app, chunks[6]);

    // 下拉菜单最后画，盖在其他内容上面
    if app.dropdown_open {
        render_dropdown(frame, app, search_area);
    } else {
        app.hit_areas.dropdown = Rect::default();
        app.hit_areas.dropdown_items.clear();
    }
}

fn render_clock(frame: &mut Frame, app: &App, area: Rect) {
    let clock = &app.clock;
    let lines = vec![
        Line::from(Span::styled(
            clock.time.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(clock.date.as_str(), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(
                clock.lunar_date.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_search_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chevron = if app.dropdown_open { "▴" } else { "▾" };
    let label = format!(" {} {} ", app.current_engine().name, chevron);
    let label_width = text_width(&label);
    let button_width = text_width(SEARCH_BUTTON).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(label_width), // 引擎按钮
            Constraint::Length(2),           // 分隔线
            Constraint::Min(1),              // 输入框
            Constraint::Length(button_width), // 搜索按钮
        ])
        .split(inner);

    let engine_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(label).style(engine_style), chunks[0]);
    frame.render_widget(
        Paragraph::new("│").style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );

    render_line_input(frame, chunks[2], &app.query, Style::default().fg(Color::White));

    frame.render_widget(
        Paragraph::new(SEARCH_BUTTON)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Black).bg(Color::Gray)),
        chunks[3],
    );

    app.hit_areas.engine_button = chunks[0];
    app.hit_areas.query_input = chunks[2];
    app.hit_areas.search_button = chunks[3];
}

fn render_dropdown(frame: &mut Frame, app: &mut App, search_area: Rect) {
    let name_width = app
        .engines
        .iter()
        .map(|e| text_width(&e.name))
        .max()
        .unwrap_or(0);

    let area = Rect::new(
        app.hit_areas.engine_button.x.saturating_sub(1),
        search_area.bottom(),
        name_width.saturating_add(4).max(14),
        u16::try_from(app.engines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2),
    )
    .intersection(frame.area());

    let inner = render_popup_frame(frame, area, Color::Gray);

    let current_name = app.current_engine().name.as_str();
    let mut items = Vec::new();
    for (i, engine) in app.engines.iter().enumerate() {
        let Ok(offset) = u16::try_from(i) else {
            break;
        };
        let row = Rect::new(inner.x, inner.y.saturating_add(offset), inner.width, 1);
        if offset >= inner.height {
            break;
        }

        // 与当前引擎同名的项高亮，光标所在项反色
        let mut style = if engine.name == current_name {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if i == app.dropdown_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        frame.render_widget(
            Paragraph::new(format!(" {}", engine.name)).style(style),
            row,
        );
        items.push(row);
    }

    app.hit_areas.dropdown = area;
    app.hit_areas.dropdown_items = items;
}

fn render_links(frame: &mut Frame, app: &mut App, area: Rect) {
    let labels: Vec<String> = app.links.iter().map(|l| format!(" {} ", l.name)).collect();
    let widths: Vec<u16> = labels.iter().map(|l| text_width(l)).collect();
    let rects = row_centered(area, &widths, 2);

    let style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED);
    for (label, rect) in labels.into_iter().zip(&rects) {
        frame.render_widget(Paragraph::new(label).style(style), *rect);
    }

    app.hit_areas.links = rects;
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.dropdown_open {
        "[↑/↓] 选择  [Enter] 确定  [Esc] 关闭"
    } else {
        "[Tab] 切换搜索引擎  [Enter] 搜索  [Alt+1~9] 打开链接  [Esc] 清空/退出"
    };

    let text = match app.message.as_deref() {
        Some(message) => format!("{}  |  {}", help_text, message),
        None => help_text.to_string(),
    };

    let help = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
