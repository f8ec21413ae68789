//! 问题文本获取服务 - 业务能力层
//!
//! 只负责"拿到问题文本"这一件事：
//! 远程获取 → 内联文本兜底 → 本地文件兜底，谁先拿到用谁

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;

/// 远程获取超时时间
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
/// 不超过该字符数的响应视为无效
const MIN_QUESTION_CHARS: usize = 20;

/// 问题文本获取服务
///
/// 所有失败都是软失败：调用方只会看到拿到或没拿到
pub struct QuestionService {
    http: Client,
    inline_question: String,
    local_question_file: String,
}

impl QuestionService {
    /// 创建新的问题文本获取服务
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            inline_question: config.inline_question.clone(),
            local_question_file: config.local_question_file.clone(),
        }
    }

    /// 获取问题文本
    ///
    /// 优先远程获取；失败或内容过短时依次尝试内联文本、本地文件。
    /// 所有来源都拿不到时返回 None
    pub async fn resolve(&self, question_url: &str) -> Option<String> {
        if let Some(text) = self.fetch_remote(question_url).await {
            return Some(text);
        }
        warn!("⚠️ 远程问题获取失败，尝试内联/本地兜底");
        self.fallback()
    }

    /// 远程获取问题文本
    ///
    /// 单次请求不重试；请求失败、非成功状态、内容过短都按"没拿到"处理
    async fn fetch_remote(&self, question_url: &str) -> Option<String> {
        if question_url.trim().is_empty() {
            return None;
        }

        info!("🔍 正在获取远程问题: {}", question_url);

        let response = match self
            .http
            .get(question_url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("远程问题请求失败: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("远程问题返回错误状态: {}", response.status());
            return None;
        }

        match response.text().await {
            Ok(page) if page.chars().count() > MIN_QUESTION_CHARS => {
                info!("✓ 远程问题获取成功，长度: {} 字符", page.chars().count());
                Some(page)
            }
            Ok(_) => {
                warn!("远程问题内容为空或过短");
                None
            }
            Err(e) => {
                warn!("读取远程问题内容失败: {}", e);
                None
            }
        }
    }

    /// 兜底来源：内联文本优先，其次本地文件
    fn fallback(&self) -> Option<String> {
        if !self.inline_question.trim().is_empty() {
            info!("✓ 使用内联配置的问题文本");
            return Some(self.inline_question.clone());
        }

        if self.local_question_file.trim().is_empty() {
            return None;
        }

        let path = Path::new(&self.local_question_file);
        if !path.exists() {
            warn!("本地问题文件不存在: {}", self.local_question_file);
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => {
                info!("✓ 使用本地问题文件: {}", self.local_question_file);
                // 逐行重组，行尾统一为 \n
                Some(content.lines().collect::<Vec<_>>().join("\n"))
            }
            Err(e) => {
                warn!(
                    "读取本地问题文件失败 ({}): {}",
                    self.local_question_file, e
                );
                None
            }
        }
    }
}
