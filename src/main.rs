mod clock;
mod config;
mod lunar;
mod models;
mod search;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::clock::{TICK_RATE, Ticker};
use crate::config::Config;
use crate::ui::{App, Effect, render};

/// 终端起始页：时钟、农历、多引擎搜索和快捷导航
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 配置文件路径，默认 ~/.config/lunartab/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志文件路径，默认 ~/.local/share/lunartab/lunartab.log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// 获取数据目录路径 (~/.local/share/lunartab/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("lunartab");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 日志写入文件，终端留给界面
fn init_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("无法创建日志目录 {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("无法打开日志文件 {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "lunartab=info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .context("无法初始化日志")?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_path = match args.log_file {
        Some(path) => path,
        None => get_data_dir()?.join("lunartab.log"),
    };
    init_logging(&log_path)?;
    tracing::info!("lunartab v{} 启动", env!("CARGO_PKG_VERSION"));

    // 加载配置，创建应用状态
    let config = Config::load(args.config.as_deref());
    let mut app = App::new(config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("lunartab 退出");
    result.context("事件循环异常退出")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    // 退出循环时 ticker 随之释放，不会留下计时器
    let mut ticker = Ticker::new(TICK_RATE);

    loop {
        terminal.draw(|f| render(f, app))?;

        if event::poll(ticker.timeout())? {
            let effect = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    ui::handle_key_event(app, key)
                }
                Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse),
                _ => Effect::None,
            };

            match effect {
                Effect::Quit => break,
                Effect::Open(navigation) => {
                    let result = open::that_detached(navigation.url());
                    app.finish_navigation(&navigation, result);
                }
                Effect::None => {}
            }
        }

        if ticker.is_due() {
            app.tick();
        }
    }
    Ok(())
}
