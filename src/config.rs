use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 默认配置文件路径，可通过环境变量 FLOW_CONFIG 覆盖
const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 程序配置文件
///
/// 启动时构造一次，之后在流程中只读传递
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 姓名
    pub name: String,
    /// 注册号（问题源按其数字部分的奇偶性选择）
    pub reg_no: String,
    /// 邮箱
    pub email: String,
    /// generate 接口地址
    pub generate_url: String,
    /// 问题一地址（注册号为奇数时选择）
    pub question1_url: String,
    /// 问题二地址（注册号为偶数时选择）
    pub question2_url: String,
    /// 本地问题文件路径（远程和内联都拿不到时的兜底）
    pub local_question_file: String,
    /// 内联问题文本（远程获取失败时优先使用的兜底）
    pub inline_question: String,
    /// 预先配置的最终答案（留空时流程在求解步骤结束）
    pub final_query: String,
    // --- generate 重试配置 ---
    /// 首次调用之外的最大重试次数
    pub generate_max_retries: u32,
    /// 退避起始时长（毫秒）
    pub generate_backoff_ms: u64,
    /// 退避封顶时长（毫秒）
    pub generate_backoff_cap_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::new(),
            reg_no: String::new(),
            email: String::new(),
            generate_url: String::new(),
            question1_url: String::new(),
            question2_url: String::new(),
            local_question_file: String::new(),
            inline_question: String::new(),
            final_query: String::new(),
            generate_max_retries: 3,
            generate_backoff_ms: 1000,
            generate_backoff_cap_ms: 5000,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置
    ///
    /// 文件里缺省的字段取默认值
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))?;
        Ok(config)
    }

    /// 加载配置
    ///
    /// 存在配置文件时先读文件，再用环境变量逐项覆盖
    pub fn load() -> Result<Self> {
        let path =
            std::env::var("FLOW_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let base = if Path::new(&path).exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        Ok(base.with_env_overrides())
    }

    fn with_env_overrides(self) -> Self {
        Self {
            name: std::env::var("FLOW_NAME").unwrap_or(self.name),
            reg_no: std::env::var("FLOW_REG_NO").unwrap_or(self.reg_no),
            email: std::env::var("FLOW_EMAIL").unwrap_or(self.email),
            generate_url: std::env::var("GENERATE_URL").unwrap_or(self.generate_url),
            question1_url: std::env::var("QUESTION1_URL").unwrap_or(self.question1_url),
            question2_url: std::env::var("QUESTION2_URL").unwrap_or(self.question2_url),
            local_question_file: std::env::var("LOCAL_QUESTION_FILE")
                .unwrap_or(self.local_question_file),
            inline_question: std::env::var("INLINE_QUESTION").unwrap_or(self.inline_question),
            final_query: std::env::var("FINAL_QUERY").unwrap_or(self.final_query),
            generate_max_retries: std::env::var("GENERATE_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.generate_max_retries),
            generate_backoff_ms: std::env::var("GENERATE_BACKOFF_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.generate_backoff_ms),
            generate_backoff_cap_ms: std::env::var("GENERATE_BACKOFF_CAP_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.generate_backoff_cap_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_retry_policy() {
        let config = Config::default();
        assert_eq!(config.generate_max_retries, 3);
        assert_eq!(config.generate_backoff_ms, 1000);
        assert_eq!(config.generate_backoff_cap_ms, 5000);
    }

    #[test]
    fn test_from_file_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
name = "张三"
reg_no = "REG12723"
email = "zhangsan@example.com"
generate_url = "https://example.com/generate"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.name, "张三");
        assert_eq!(config.reg_no, "REG12723");
        assert_eq!(config.generate_url, "https://example.com/generate");
        // 文件里没写的字段取默认值
        assert!(config.inline_question.is_empty());
        assert_eq!(config.generate_max_retries, 3);
    }

    #[test]
    fn test_from_file_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = ").unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }
}
