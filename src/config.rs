use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 题目数据来源
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// 通过 HTTP 拉取静态文件
    Http,
    /// 从本地目录读取
    File,
}

impl FromStr for SourceKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" | "https" => Ok(SourceKind::Http),
            "file" | "fs" => Ok(SourceKind::File),
            _ => Err(()),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 数据来源
    pub source: SourceKind,
    /// 题目数据文件的基础 URL
    pub data_base_url: String,
    /// 本地题目数据目录
    pub data_dir: String,
    /// 选项打乱的随机种子（None 表示使用系统熵）
    pub shuffle_seed: Option<u64>,
    /// HTTP 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 检查报告输出文件
    pub report_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceKind::File,
            data_base_url: "http://localhost:4200/assets".to_string(),
            data_dir: "assets".to_string(),
            shuffle_seed: None,
            request_timeout_secs: 10,
            verbose_logging: false,
            report_file: "quiz_report.txt".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的变量使用默认值
    ///
    /// 变量存在但无法解析时返回 `ConfigError::EnvVarParseFailed`
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|var_name| std::env::var(var_name).ok())
    }

    /// 通过任意查找函数加载配置，便于脱离进程环境测试
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let default = Self::default();
        Ok(Self {
            source: parse_var(&lookup, "QUIZ_SOURCE")?.unwrap_or(default.source),
            data_base_url: lookup("QUIZ_DATA_URL").unwrap_or(default.data_base_url),
            data_dir: lookup("QUIZ_DATA_DIR").unwrap_or(default.data_dir),
            shuffle_seed: parse_var(&lookup, "QUIZ_SHUFFLE_SEED")?.or(default.shuffle_seed),
            request_timeout_secs: parse_var(&lookup, "QUIZ_REQUEST_TIMEOUT_SECS")?
                .unwrap_or(default.request_timeout_secs),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING")?
                .unwrap_or(default.verbose_logging),
            report_file: lookup("QUIZ_REPORT_FILE").unwrap_or(default.report_file),
        })
    }

    /// 从 TOML 配置文件加载，未填写的字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| {
            AppError::from(ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            })
        })
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// 读取并解析变量，变量不存在时返回 `Ok(None)`
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var_name: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var_name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: std::any::type_name::<T>().to_string(),
            }),
        None => Ok(None),
    }
}
