use serde::{Deserialize, Serialize};

/// 搜索引擎：名称 + 查询前缀（查询词直接拼接在后面）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEngine {
    pub name: String,
    pub url: String,
}

impl SearchEngine {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// 底部快捷导航链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub url: String,
}

impl NavLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// 内置搜索引擎列表
pub fn default_engines() -> Vec<SearchEngine> {
    vec![
        SearchEngine::new("百度", "https://www.baidu.com/s?wd="),
        SearchEngine::new("Google", "https://www.google.com/search?q="),
        SearchEngine::new("DuckDuckGo", "https://duckduckgo.com/?q="),
        SearchEngine::new("必应", "https://www.bing.com/search?q="),
        SearchEngine::new("360", "https://www.so.com/s?q="),
        SearchEngine::new("搜狗", "https://www.sogou.com/web?query="),
    ]
}

/// 内置导航链接
pub fn default_links() -> Vec<NavLink> {
    vec![NavLink::new("演示-淘宝", "https://www.taobao.com")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engines_start_with_baidu() {
        let engines = default_engines();
        assert_eq!(engines.len(), 6);
        assert_eq!(engines[0].name, "百度");
        assert_eq!(engines[0].url, "https://www.baidu.com/s?wd=");
    }

    #[test]
    fn engine_deserializes_from_json_object() {
        let engine: SearchEngine =
            serde_json::from_str(r#"{"name":"Bing","url":"https://www.bing.com/search?q="}"#)
                .unwrap();
        assert_eq!(engine, SearchEngine::new("Bing", "https://www.bing.com/search?q="));
    }
}
