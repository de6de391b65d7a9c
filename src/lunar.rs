//! 公历转农历
//!
//! 查表法，覆盖农历 1900 年到 2100 年。
//! 每个年份用一个 17 位整数编码：
//! - 低 4 位：闰月月份，0 表示无闰月
//! - 第 4..16 位：正月到腊月的大小月，1 为大月 (30 天)，0 为小月 (29 天)
//! - 第 16 位：闰月是大月还是小月

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

#[rustfmt::skip]
const LUNAR_INFO: [u32; (MAX_YEAR - MIN_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                 // 2100
];

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DAY_TENS: [&str; 4] = ["初", "十", "廿", "三"];
const DIGITS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LunarError {
    #[error("{0} 超出农历换算范围 (1900-01-31 起，农历 2100 年止)")]
    OutOfRange(NaiveDate),
}

/// 农历日期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap: bool,
}

impl LunarDate {
    /// 由公历日期换算
    pub fn from_solar(date: NaiveDate) -> Result<Self, LunarError> {
        // 农历 1900 年正月初一
        let epoch = NaiveDate::from_ymd_opt(MIN_YEAR, 1, 31).ok_or(LunarError::OutOfRange(date))?;
        let mut offset = u32::try_from((date - epoch).num_days())
            .map_err(|_| LunarError::OutOfRange(date))?;

        let mut year = MIN_YEAR;
        loop {
            if year > MAX_YEAR {
                return Err(LunarError::OutOfRange(date));
            }
            let days = year_days(year);
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }

        let leap = leap_month(year);
        let mut month = 1;
        let mut is_leap = false;
        loop {
            let days = if is_leap {
                leap_days(year)
            } else {
                month_days(year, month)
            };
            if offset < days {
                break;
            }
            offset -= days;
            if !is_leap && leap == month {
                is_leap = true;
            } else {
                is_leap = false;
                month += 1;
            }
        }

        Ok(Self {
            year,
            month,
            day: offset + 1,
            is_leap,
        })
    }

    /// 月份的中文写法，如 "正"、"闰六"、"腊"
    pub fn month_in_chinese(&self) -> String {
        let name = MONTH_NAMES[(self.month - 1) as usize];
        if self.is_leap {
            format!("闰{name}")
        } else {
            name.to_string()
        }
    }

    /// 日期的中文写法，如 "初一"、"二十"、"廿九"
    pub fn day_in_chinese(&self) -> String {
        match self.day {
            10 => "初十".to_string(),
            20 => "二十".to_string(),
            30 => "三十".to_string(),
            d => format!(
                "{}{}",
                DAY_TENS[(d / 10) as usize],
                DIGITS[(d % 10) as usize]
            ),
        }
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}月{}", self.month_in_chinese(), self.day_in_chinese())
    }
}

fn info(year: i32) -> u32 {
    LUNAR_INFO[(year - MIN_YEAR) as usize]
}

fn leap_month(year: i32) -> u32 {
    info(year) & 0xf
}

fn leap_days(year: i32) -> u32 {
    match (leap_month(year), info(year) & 0x10000) {
        (0, _) => 0,
        (_, 0) => 29,
        _ => 30,
    }
}

fn month_days(year: i32, month: u32) -> u32 {
    if info(year) & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

fn year_days(year: i32) -> u32 {
    let big_months = (1..=12).filter(|&m| month_days(year, m) == 30).count() as u32;
    12 * 29 + big_months + leap_days(year)
}
