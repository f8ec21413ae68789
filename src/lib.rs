//! # Question Solve Submit
//!
//! 一个自动化"获取题目并提交答案"流程的 Rust 应用程序
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 封装远程接口调用
//! - `WebhookClient` - generate / 提交两个接口，含 generate 的重试退避
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程顺序
//! - `QuestionService` - 获取问题文本能力（远程 + 兜底）
//! - `Solver` - 求解能力（由外部注入，自带占位/固定答案两种实现）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义一次完整提交的流程
//! - `QuestionSource` - 按注册号奇偶选择问题源
//! - `SolveFlow` - 流程编排（generate → 选择 → 获取 → 求解 → 提交）
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::WebhookClient;
pub use config::Config;
pub use error::{FlowError, Result};
pub use models::{GenerateRequest, GenerateResponse, SubmitRequest};
pub use services::{
    solver_from_config, FixedAnswerSolver, FnSolver, QuestionService, Solver, UnsolvedSolver,
};
pub use workflow::{FlowOutcome, HaltReason, QuestionSource, SolveFlow};
