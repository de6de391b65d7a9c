//! 键盘与鼠标事件映射 (Input -> Action)
//!
//! 将按键和点击转换为 Action，鼠标命中依赖上一帧记录的 HitAreas

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::actions::{Action, Effect};
use super::state::App;

/// 根据当前状态和按键获取对应的 Action
pub fn get_action(app: &App, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('u') if ctrl => Some(Action::ClearQuery),
        KeyCode::Char(c @ '1'..='9') if alt => {
            Some(Action::OpenLink(c as usize - '1' as usize))
        }
        KeyCode::Tab => Some(Action::ToggleDropdown),
        _ if app.dropdown_open => match key.code {
            KeyCode::Esc => Some(Action::CloseDropdown),
            KeyCode::Up => Some(Action::MoveCursorUp),
            KeyCode::Down => Some(Action::MoveCursorDown),
            KeyCode::Enter => Some(Action::SelectEngine(app.dropdown_cursor)),
            // 输入框仍保有焦点
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) if !ctrl && !alt => Some(Action::Input(c)),
            _ => None,
        },
        KeyCode::Esc if app.query.is_empty() => Some(Action::Quit),
        KeyCode::Esc => Some(Action::ClearQuery),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::Char(c) if !ctrl && !alt => Some(Action::Input(c)),
        _ => None,
    }
}

/// 左键点击映射
///
/// 菜单打开时，搜索栏以外的区域相当于一层透明遮罩：点击只会关闭菜单
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let pos = Position::new(mouse.column, mouse.row);
    let areas = &app.hit_areas;

    if app.dropdown_open {
        if let Some(index) = areas.dropdown_item_at(pos) {
            Some(Action::SelectEngine(index))
        } else if areas.engine_button.contains(pos) {
            Some(Action::ToggleDropdown)
        } else if areas.search_button.contains(pos) {
            Some(Action::Submit)
        } else if areas.query_input.contains(pos) || areas.dropdown.contains(pos) {
            None // 输入框、菜单边框
        } else {
            Some(Action::CloseDropdown)
        }
    } else if areas.engine_button.contains(pos) {
        Some(Action::ToggleDropdown)
    } else if areas.search_button.contains(pos) {
        Some(Action::Submit)
    } else {
        areas.link_at(pos).map(Action::OpenLink)
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Effect {
    match get_action(app, key) {
        Some(action) => app.dispatch(action),
        None => Effect::None,
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Effect {
    match get_mouse_action(app, mouse) {
        Some(action) => app.dispatch(action),
        None => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with_areas() -> App {
        let mut app = App::new(Config::default());
        app.hit_areas.engine_button = Rect::new(10, 5, 8, 1);
        app.hit_areas.search_button = Rect::new(60, 5, 4, 1);
        app.hit_areas.query_input = Rect::new(20, 5, 40, 1);
        app.hit_areas.dropdown = Rect::new(10, 7, 16, 8);
        app.hit_areas.dropdown_items = (0..6).map(|i| Rect::new(11, 8 + i, 14, 1)).collect();
        app.hit_areas.links = vec![Rect::new(30, 20, 10, 1)];
        app
    }

    #[test]
    fn typing_goes_to_query() {
        let app = App::new(Config::default());
        assert_eq!(get_action(&app, key(KeyCode::Char('q'))), Some(Action::Input('q')));
        assert_eq!(get_action(&app, key(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(get_action(&app, key(KeyCode::Backspace)), Some(Action::DeleteChar));
    }

    #[test]
    fn esc_quits_only_with_empty_query() {
        let mut app = App::new(Config::default());
        assert_eq!(get_action(&app, key(KeyCode::Esc)), Some(Action::Quit));
        app.query.push('x');
        assert_eq!(get_action(&app, key(KeyCode::Esc)), Some(Action::ClearQuery));
    }

    #[test]
    fn modifier_shortcuts() {
        let app = App::new(Config::default());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let alt_2 = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT);
        assert_eq!(get_action(&app, ctrl_c), Some(Action::Quit));
        assert_eq!(get_action(&app, alt_2), Some(Action::OpenLink(1)));
    }

    #[test]
    fn open_dropdown_captures_navigation_keys() {
        let mut app = App::new(Config::default());
        app.dropdown_open = true;
        app.dropdown_cursor = 3;
        assert_eq!(get_action(&app, key(KeyCode::Esc)), Some(Action::CloseDropdown));
        assert_eq!(get_action(&app, key(KeyCode::Down)), Some(Action::MoveCursorDown));
        assert_eq!(get_action(&app, key(KeyCode::Enter)), Some(Action::SelectEngine(3)));
    }

    #[test]
    fn typing_still_reaches_query_while_dropdown_is_open() {
        let mut app = App::new(Config::default());
        app.dispatch(Action::ToggleDropdown);

        for code in [KeyCode::Char('a'), KeyCode::Char('b'), KeyCode::Backspace, KeyCode::Char('c')] {
            handle_key_event(&mut app, key(code));
        }
        assert_eq!(app.query, "ac");
        assert!(app.dropdown_open);

        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(get_action(&app, ctrl_a), None);
    }

    #[test]
    fn clicks_when_closed() {
        let app = app_with_areas();
        assert_eq!(get_mouse_action(&app, click(12, 5)), Some(Action::ToggleDropdown));
        assert_eq!(get_mouse_action(&app, click(31, 20)), Some(Action::OpenLink(0)));
        assert_eq!(get_mouse_action(&app, click(61, 5)), Some(Action::Submit));
        assert_eq!(get_mouse_action(&app, click(0, 0)), None);
    }

    #[test]
    fn clicks_when_open() {
        let mut app = app_with_areas();
        app.dropdown_open = true;
        assert_eq!(get_mouse_action(&app, click(12, 9)), Some(Action::SelectEngine(1)));
        assert_eq!(get_mouse_action(&app, click(12, 5)), Some(Action::ToggleDropdown));
        // 整个搜索栏在遮罩之上
        assert_eq!(get_mouse_action(&app, click(61, 5)), Some(Action::Submit));
        assert_eq!(get_mouse_action(&app, click(30, 5)), None);
        // 遮罩挡住了底部链接
        assert_eq!(get_mouse_action(&app, click(31, 20)), Some(Action::CloseDropdown));
        assert_eq!(get_mouse_action(&app, click(10, 7)), None);
    }

    #[test]
    fn only_left_press_counts() {
        let app = app_with_areas();
        let mut event = click(12, 5);
        event.kind = MouseEventKind::Up(MouseButton::Left);
        assert_eq!(get_mouse_action(&app, event), None);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(get_mouse_action(&app, event), None);
    }

    #[test]
    fn click_outside_closes_without_changing_engine() {
        let mut app = app_with_areas();
        app.dispatch(Action::ToggleDropdown);
        assert!(app.dropdown_open);

        let effect = handle_mouse_event(&mut app, click(0, 0));
        assert_eq!(effect, Effect::None);
        assert!(!app.dropdown_open);
        assert_eq!(app.current_engine().name, "百度");
    }

    #[test]
    fn click_in_query_keeps_dropdown_open() {
        let mut app = app_with_areas();
        app.dispatch(Action::ToggleDropdown);

        assert_eq!(handle_mouse_event(&mut app, click(25, 5)), Effect::None);
        assert!(app.dropdown_open);
    }
}
