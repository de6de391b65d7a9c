//! 配置加载
//!
//! 优先级：环境变量中的 JSON > 配置文件 (TOML) > 内置默认值。
//! 任何解析失败都只记录日志，然后回退到下一级。

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{NavLink, SearchEngine, default_engines, default_links};

/// 导航链接环境变量，内容为 `[{ "name": ..., "url": ... }]`
pub const NAV_LINKS_ENV: &str = "LUNARTAB_NAV_LINKS";
/// 搜索引擎环境变量，格式同上
pub const SEARCH_ENGINES_ENV: &str = "LUNARTAB_SEARCH_ENGINES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置文件 {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("配置文件格式错误 {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{name} 不是合法的 JSON 数组: {source}")]
    Json {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置文件结构 (config.toml)
///
/// ```toml
/// [[search_engines]]
/// name = "Google"
/// url = "https://www.google.com/search?q="
///
/// [[nav_links]]
/// name = "GitHub"
/// url = "https://github.com"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub nav_links: Option<Vec<NavLink>>,
    pub search_engines: Option<Vec<SearchEngine>>,
}

impl FileConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 文件不存在时返回 `Ok(None)`
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content, path).map(Some)
    }
}

/// 默认配置文件路径 (~/.config/lunartab/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lunartab").join("config.toml"))
}

/// 最终生效的配置
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub nav_links: Vec<NavLink>,
    pub search_engines: Vec<SearchEngine>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nav_links: default_links(),
            search_engines: default_engines(),
        }
    }
}

impl Config {
    /// 从环境变量和配置文件加载；`path` 为空时使用默认路径
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).or_else(default_config_path);

        let file = match path.as_deref().map(FileConfig::load) {
            Some(Ok(Some(file))) => {
                info!(path = ?path, "已加载配置文件");
                Some(file)
            }
            Some(Ok(None)) | None => None,
            Some(Err(e)) => {
                warn!(error = %e, "配置文件无效，已忽略");
                None
            }
        };

        let nav_json = env::var(NAV_LINKS_ENV).ok();
        let engines_json = env::var(SEARCH_ENGINES_ENV).ok();

        Self::resolve(nav_json.as_deref(), engines_json.as_deref(), file)
    }

    /// 按优先级合并三个来源
    pub fn resolve(
        nav_json: Option<&str>,
        engines_json: Option<&str>,
        file: Option<FileConfig>,
    ) -> Self {
        let FileConfig {
            nav_links: file_links,
            search_engines: file_engines,
        } = file.unwrap_or_default();

        let nav_json = nav_json.and_then(non_blank);
        let engines_json = engines_json.and_then(non_blank);

        let nav_links = match (nav_json, file_links) {
            (Some(raw), _) => parse_nav_links(Some(raw)),
            (None, Some(links)) => links,
            (None, None) => default_links(),
        };

        let search_engines = match (engines_json, file_engines) {
            (Some(raw), _) => parse_search_engines(Some(raw)),
            (None, Some(engines)) if !engines.is_empty() => engines,
            (None, Some(_)) => {
                warn!("配置文件中的搜索引擎列表为空，使用内置默认值");
                default_engines()
            }
            (None, None) => default_engines(),
        };

        debug!(
            links = nav_links.len(),
            engines = search_engines.len(),
            "配置已就绪"
        );

        Self {
            nav_links,
            search_engines,
        }
    }
}

/// 设置了但为空的环境变量视为未设置
fn non_blank(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

fn parse_json_list<T: DeserializeOwned>(
    name: &'static str,
    raw: &str,
) -> Result<Vec<T>, ConfigError> {
    serde_json::from_str(raw).map_err(|source| ConfigError::Json { name, source })
}

/// 解析导航链接；缺失或格式错误时返回内置默认值，空数组原样保留
pub fn parse_nav_links(raw: Option<&str>) -> Vec<NavLink> {
    let Some(raw) = raw.and_then(non_blank) else {
        return default_links();
    };

    match parse_json_list(NAV_LINKS_ENV, raw) {
        Ok(links) => links,
        Err(e) => {
            warn!(error = %e, "导航链接解析失败，使用内置默认值");
            default_links()
        }
    }
}

/// 解析搜索引擎；缺失、格式错误或为空时返回内置默认值
pub fn parse_search_engines(raw: Option<&str>) -> Vec<SearchEngine> {
    let Some(raw) = raw.and_then(non_blank) else {
        return default_engines();
    };

    match parse_json_list::<SearchEngine>(SEARCH_ENGINES_ENV, raw) {
        Ok(engines) if !engines.is_empty() => engines,
        Ok(_) => {
            warn!("搜索引擎列表为空，使用内置默认值");
            default_engines()
        }
        Err(e) => {
            warn!(error = %e, "搜索引擎配置解析失败，使用内置默认值");
            default_engines()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_nav_links_fall_back_to_single_default() {
        let links = parse_nav_links(Some("[{name: broken"));
        assert_eq!(links, default_links());
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn nav_links_with_wrong_shape_fall_back() {
        assert_eq!(parse_nav_links(Some(r#"{"name":"x"}"#)), default_links());
    }

    #[test]
    fn empty_nav_link_array_is_kept() {
        assert!(parse_nav_links(Some("[]")).is_empty());
    }

    #[test]
    fn nav_links_parse_in_order() {
        let links = parse_nav_links(Some(
            r#"[{"name":"GitHub","url":"https://github.com"},{"name":"V2EX","url":"https://v2ex.com"}]"#,
        ));
        assert_eq!(
            links,
            vec![
                NavLink::new("GitHub", "https://github.com"),
                NavLink::new("V2EX", "https://v2ex.com"),
            ]
        );
    }

    #[test]
    fn malformed_or_empty_engines_fall_back_to_defaults() {
        assert_eq!(parse_search_engines(Some("not json")), default_engines());
        assert_eq!(parse_search_engines(Some("[]")), default_engines());
        assert_eq!(parse_search_engines(None), default_engines());
    }

    #[test]
    fn custom_engines_replace_defaults() {
        let engines =
            parse_search_engines(Some(r#"[{"name":"Kagi","url":"https://kagi.com/search?q="}]"#));
        assert_eq!(
            engines,
            vec![SearchEngine::new("Kagi", "https://kagi.com/search?q=")]
        );
    }

    #[test]
    fn env_value_wins_over_file() {
        let file = FileConfig {
            nav_links: Some(vec![NavLink::new("file", "https://file.example")]),
            search_engines: Some(vec![SearchEngine::new("file", "https://file.example/?q=")]),
        };
        let config = Config::resolve(
            Some(r#"[{"name":"env","url":"https://env.example"}]"#),
            None,
            Some(file),
        );
        assert_eq!(config.nav_links, vec![NavLink::new("env", "https://env.example")]);
        assert_eq!(
            config.search_engines,
            vec![SearchEngine::new("file", "https://file.example/?q=")]
        );
    }

    #[test]
    fn malformed_env_value_does_not_fall_back_to_file() {
        let file = FileConfig {
            nav_links: Some(vec![NavLink::new("file", "https://file.example")]),
            search_engines: None,
        };
        let config = Config::resolve(Some("oops"), None, Some(file));
        assert_eq!(config.nav_links, default_links());
    }

    #[test]
    fn blank_env_values_count_as_unset() {
        let file = FileConfig {
            nav_links: Some(vec![NavLink::new("file", "https://file.example")]),
            search_engines: Some(vec![SearchEngine::new("file", "https://file.example/?q=")]),
        };
        let config = Config::resolve(Some(""), Some("  \n"), Some(file));
        assert_eq!(config.nav_links, vec![NavLink::new("file", "https://file.example")]);
        assert_eq!(
            config.search_engines,
            vec![SearchEngine::new("file", "https://file.example/?q=")]
        );

        assert_eq!(parse_nav_links(Some(" ")), default_links());
        assert_eq!(parse_search_engines(Some("")), default_engines());
    }

    #[test]
    fn empty_engine_list_in_file_is_rejected() {
        let file = FileConfig {
            nav_links: None,
            search_engines: Some(Vec::new()),
        };
        let config = Config::resolve(None, None, Some(file));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn toml_file_parses_tables() {
        let content = r#"
[[search_engines]]
name = "Google"
url = "https://www.google.com/search?q="

[[nav_links]]
name = "GitHub"
url = "https://github.com"
"#;
        let file = FileConfig::from_toml_str(content, Path::new("config.toml")).unwrap();
        assert_eq!(
            file.search_engines,
            Some(vec![SearchEngine::new(
                "Google",
                "https://www.google.com/search?q="
            )])
        );
        assert_eq!(
            file.nav_links,
            Some(vec![NavLink::new("GitHub", "https://github.com")])
        );
    }

    #[test]
    fn broken_toml_reports_path() {
        let err = FileConfig::from_toml_str("[[nav_links]\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = Path::new("/definitely/not/here/lunartab.toml");
        assert!(FileConfig::load(path).unwrap().is_none());
    }
}
