use thiserror::Error;

/// 流程错误类型
///
/// 只覆盖接口调用这一层；流程层在每个步骤边界把这些错误
/// 转换为重试、兜底或提前结束，不会让它们穿透成 panic
#[derive(Debug, Error)]
pub enum FlowError {
    /// 网络请求失败（连接失败、超时等）
    #[error("接口请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// 接口返回了非成功状态码
    #[error("接口返回错误状态 ({endpoint}): {status}")]
    BadStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    /// 响应体解析失败
    #[error("响应解析失败 ({endpoint}): {source}")]
    ParseFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// 应用程序结果类型
pub type Result<T> = std::result::Result<T, FlowError>;
