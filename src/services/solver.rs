//! 求解能力 - 业务能力层
//!
//! 流程本身不实现任何求解算法，答案由外部注入：
//! 可以是调用方注册的求解函数，也可以是配置里预先写好的最终答案

use anyhow::Result;

use crate::config::Config;

/// 求解器接口
///
/// 输入问题文本，输出最终答案；返回 None 表示给不出答案。
/// 求解器内部的错误由流程层捕获，按"没有答案"处理
pub trait Solver: Send + Sync {
    fn solve(&self, question_text: &str) -> Result<Option<String>>;
}

/// 函数式求解器：把一个 `Fn(&str) -> Option<String>` 包装成求解器
pub struct FnSolver<F>(pub F);

impl<F> Solver for FnSolver<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn solve(&self, question_text: &str) -> Result<Option<String>> {
        Ok((self.0)(question_text))
    }
}

/// 占位求解器：不做任何求解，始终返回 None
#[derive(Debug, Default)]
pub struct UnsolvedSolver;

impl Solver for UnsolvedSolver {
    fn solve(&self, _question_text: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// 固定答案求解器：忽略问题文本，返回预先配置的答案
///
/// 对应"答案由人工在配置里提供"的使用方式
#[derive(Debug, Clone)]
pub struct FixedAnswerSolver {
    final_query: String,
}

impl FixedAnswerSolver {
    pub fn new(final_query: impl Into<String>) -> Self {
        Self {
            final_query: final_query.into(),
        }
    }
}

impl Solver for FixedAnswerSolver {
    fn solve(&self, _question_text: &str) -> Result<Option<String>> {
        if self.final_query.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.final_query.clone()))
        }
    }
}

/// 根据配置组装求解器
///
/// 配置了 final_query 时用固定答案求解器，否则用占位求解器
pub fn solver_from_config(config: &Config) -> Box<dyn Solver> {
    if config.final_query.trim().is_empty() {
        Box::new(UnsolvedSolver)
    } else {
        Box::new(FixedAnswerSolver::new(config.final_query.clone()))
    }
}
