//! 提交流程 - 流程层
//!
//! 定义一次完整提交的五个步骤：
//! 1. generate → 拿到 webhook 和 accessToken
//! 2. 按注册号奇偶选择问题源
//! 3. 获取问题文本（远程 → 内联 → 本地文件）
//! 4. 求解（由注入的求解器完成）
//! 5. 把最终答案提交到 webhook
//!
//! 任一步骤拿不到结果时流程提前结束，不再发起后续请求；
//! 结束原因以 FlowOutcome 返回，不以 panic 或 Err 形式向上抛

use anyhow::Result;
use tracing::{error, info, warn};

use crate::clients::WebhookClient;
use crate::config::Config;
use crate::models::GenerateRequest;
use crate::services::{QuestionService, Solver};
use crate::workflow::question_pick::QuestionSource;

/// 流程结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// 答案已提交
    Submitted,
    /// 流程提前结束
    Halted(HaltReason),
}

/// 流程提前结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// generate 没有给出可用的 webhook（含重试耗尽）
    NoWebhook,
    /// generate 没有给出可用的 accessToken
    NoAccessToken,
    /// 所有来源都拿不到问题文本
    NoQuestionText,
    /// 没有产生最终答案
    NoFinalAnswer,
    /// 提交失败
    SubmitFailed,
}

/// 提交流程
///
/// - 编排完整的五步流程
/// - 决定何时兜底、何时提前结束
/// - 只依赖业务能力（clients / services），不自己发请求
pub struct SolveFlow {
    webhook_client: WebhookClient,
    question_service: QuestionService,
    solver: Box<dyn Solver>,
    config: Config,
}

impl SolveFlow {
    /// 创建新的提交流程
    pub fn new(config: &Config, solver: Box<dyn Solver>) -> Self {
        Self {
            webhook_client: WebhookClient::new(config),
            question_service: QuestionService::new(config),
            solver,
            config: config.clone(),
        }
    }

    /// 执行一次完整流程
    pub async fn run(&self) -> Result<FlowOutcome> {
        info!(
            "🚀 开始执行提交流程, 姓名: {}, 注册号: {}",
            self.config.name, self.config.reg_no
        );

        // ========== 步骤 1: generate ==========
        let request = GenerateRequest {
            name: self.config.name.clone(),
            reg_no: self.config.reg_no.clone(),
            email: self.config.email.clone(),
        };

        let grant = match self.webhook_client.generate(&request).await {
            Ok(grant) => grant,
            Err(e) => {
                error!("❌ generate 调用失败, 流程结束: {}", e);
                return Ok(FlowOutcome::Halted(HaltReason::NoWebhook));
            }
        };

        let webhook_url = match grant.webhook.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => {
                error!("❌ generate 响应缺少 webhook, 流程结束");
                return Ok(FlowOutcome::Halted(HaltReason::NoWebhook));
            }
        };

        let access_token = match grant.access_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => token.to_string(),
            _ => {
                error!("❌ generate 响应缺少 accessToken, 流程结束");
                return Ok(FlowOutcome::Halted(HaltReason::NoAccessToken));
            }
        };

        info!("✓ 已获取 webhook: {}", webhook_url);

        // ========== 步骤 2: 选择问题源 ==========
        let source = QuestionSource::from_reg_no(&self.config.reg_no);
        let question_url = source.url(&self.config);
        info!("✓ 根据注册号选择问题源: {:?} -> {}", source, question_url);

        // ========== 步骤 3: 获取问题文本 ==========
        let question_text = match self.question_service.resolve(question_url).await {
            Some(text) => text,
            None => {
                error!("❌ 所有来源都未获取到问题文本, 流程结束");
                return Ok(FlowOutcome::Halted(HaltReason::NoQuestionText));
            }
        };
        info!("问题文本长度: {} 字符", question_text.chars().count());

        // ========== 步骤 4: 求解 ==========
        let answer = match self.solver.solve(&question_text) {
            Ok(answer) => answer,
            Err(e) => {
                // 求解器的错误不向上抛，按"没有答案"处理
                error!("❌ 自动求解失败: {}", e);
                None
            }
        };

        let final_query = match answer {
            Some(answer) if !answer.trim().is_empty() => answer,
            _ => {
                warn!("⚠️ 没有产生最终答案, 请通过配置 final_query 提供, 流程结束");
                return Ok(FlowOutcome::Halted(HaltReason::NoFinalAnswer));
            }
        };

        // ========== 步骤 5: 提交 ==========
        info!("📤 正在提交最终答案到 webhook...");
        match self
            .webhook_client
            .submit(&webhook_url, &access_token, &final_query)
            .await
        {
            Ok(()) => {
                info!("✅ 最终答案提交成功");
                Ok(FlowOutcome::Submitted)
            }
            Err(e) => {
                error!("❌ 提交最终答案失败: {}", e);
                Ok(FlowOutcome::Halted(HaltReason::SubmitFailed))
            }
        }
    }
}
