//! webhook 接口客户端
//!
//! 封装 generate / 提交两个接口的调用逻辑，
//! generate 的重试退避策略也在这一层

use std::time::Duration;

use rand::Rng;
use reqwest::Client;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{FlowError, Result};
use crate::models::{GenerateRequest, GenerateResponse, SubmitRequest};

/// 提交接口超时时间
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(20);
/// 退避抖动幅度（±25%）
const BACKOFF_JITTER: f64 = 0.25;

/// webhook 接口客户端
pub struct WebhookClient {
    http: Client,
    generate_url: String,
    max_retries: u32,
    backoff_ms: u64,
    backoff_cap_ms: u64,
}

impl WebhookClient {
    /// 创建新的 webhook 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            generate_url: config.generate_url.clone(),
            max_retries: config.generate_max_retries,
            backoff_ms: config.generate_backoff_ms,
            backoff_cap_ms: config.generate_backoff_cap_ms,
        }
    }

    /// 调用 generate 接口获取 webhook 和 accessToken
    ///
    /// 首次调用失败后最多重试 max_retries 次：
    /// 退避从 backoff_ms 开始逐次翻倍，封顶 backoff_cap_ms，再加抖动。
    /// 网络错误、非成功状态、响应解析失败都会触发重试
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let mut attempt = 0u32;
        loop {
            match self.try_generate(request).await {
                Ok(response) => return Ok(response),
                Err(e) if attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.backoff_delay(attempt);
                    warn!(
                        "generate 调用失败 (尝试 {}/{}), {} 毫秒后重试: {}",
                        attempt,
                        self.max_retries,
                        delay.as_millis(),
                        e
                    );
                    sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// 单次 generate 调用
    async fn try_generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let response = self
            .http
            .post(&self.generate_url)
            .json(request)
            .send()
            .await
            .map_err(|e| FlowError::RequestFailed {
                endpoint: self.generate_url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlowError::BadStatus {
                endpoint: self.generate_url.clone(),
                status,
            });
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| FlowError::ParseFailed {
                endpoint: self.generate_url.clone(),
                source: e,
            })
    }

    /// 计算第 attempt 次重试前的退避时长
    ///
    /// 抖动作用在封顶之后的值上
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let doubled = self
            .backoff_ms
            .saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)));
        let capped = doubled.min(self.backoff_cap_ms);
        let jitter = rand::thread_rng().gen_range(1.0 - BACKOFF_JITTER..=1.0 + BACKOFF_JITTER);
        Duration::from_millis((capped as f64 * jitter) as u64)
    }

    /// 提交最终答案到 webhook
    ///
    /// Authorization 头直接使用 generate 下发的原始 token，不带任何前缀。
    /// 单次请求不重试，响应体在成功时直接丢弃
    pub async fn submit(
        &self,
        webhook_url: &str,
        access_token: &str,
        final_query: &str,
    ) -> Result<()> {
        let body = SubmitRequest {
            final_query: final_query.to_string(),
        };

        let response = self
            .http
            .post(webhook_url)
            .header(reqwest::header::AUTHORIZATION, access_token)
            .json(&body)
            .timeout(SUBMIT_TIMEOUT)
            .send()
            .await
            .map_err(|e| FlowError::RequestFailed {
                endpoint: webhook_url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlowError::BadStatus {
                endpoint: webhook_url.to_string(),
                status,
            });
        }

        debug!("提交响应状态: {}", status);
        Ok(())
    }
}
