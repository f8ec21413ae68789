//! 日志工具模块
//!
//! 日志初始化和启动/结束横幅

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::workflow::FlowOutcome;

/// 初始化日志输出
///
/// 默认 info 级别，可通过 RUST_LOG 覆盖；重复调用是安全的
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - webhook 提交流程");
    info!("姓名: {}, 注册号: {}", config.name, config.reg_no);
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 记录流程结束信息
pub fn log_finished(outcome: &FlowOutcome) {
    info!("{}", "=".repeat(60));
    match outcome {
        FlowOutcome::Submitted => info!("✅ 流程完成: 答案已提交"),
        FlowOutcome::Halted(reason) => info!("⚠️ 流程提前结束: {:?}", reason),
    }
    info!(
        "结束时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}
