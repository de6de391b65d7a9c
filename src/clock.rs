//! 时钟：时间、日期和农历文本，每秒刷新一次

use std::time::{Duration, Instant};

use chrono::{Datelike, Local, NaiveDateTime, Weekday};
use tracing::debug;

use crate::lunar::LunarDate;

/// 刷新间隔
pub const TICK_RATE: Duration = Duration::from_millis(1000);

/// 时钟显示内容，每次刷新重新计算
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockState {
    pub time: String,
    pub date: String,
    pub lunar_date: String,
}

impl ClockState {
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// `14:05`、`10/18星期日`、`农历 九月初九`
    pub fn at(now: NaiveDateTime) -> Self {
        let lunar_date = match LunarDate::from_solar(now.date()) {
            Ok(lunar) => format!("农历 {lunar}"),
            Err(e) => {
                debug!(error = %e, "无法换算农历");
                String::new()
            }
        };

        Self {
            time: now.format("%H:%M").to_string(),
            date: format!("{}{}", now.format("%m/%d"), weekday_name(now.weekday())),
            lunar_date,
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}

/// 主循环用的节拍器
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    last_tick: Instant,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
        }
    }

    /// 距离下一次刷新还剩多久，用作事件轮询的超时
    pub fn timeout(&self) -> Duration {
        self.interval
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or_default()
    }

    /// 到点返回 true 并重新计时
    pub fn is_due(&mut self) -> bool {
        if self.last_tick.elapsed() >= self.interval {
            self.last_tick = Instant::now();
            true
        } else {
            false
        }
    }
}
