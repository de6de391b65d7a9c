//! 搜索地址拼接

use crate::models::SearchEngine;

/// `<engine.url><百分号编码后的查询词>`；空白查询返回 `None`
///
/// 编码的是原始输入（不去除首尾空白），与浏览器 `encodeURIComponent` 的结果对齐：
/// 保留 `A-Z a-z 0-9 - _ . ~`，其余按 UTF-8 转义，空格为 `%20`。
pub fn build_search_url(engine: &SearchEngine, query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    Some(format!("{}{}", engine.url, urlencoding::encode(query)))
}
