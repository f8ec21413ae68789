//! 接口数据模型
//!
//! generate / 提交两个接口的请求和响应体

use serde::{Deserialize, Serialize};

/// generate 接口请求体
///
/// 三个字段都来自配置，进程生命周期内不变
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub name: String,
    #[serde(rename = "regNo")]
    pub reg_no: String,
    pub email: String,
}

/// generate 接口响应体
///
/// 服务端可能附带额外字段，反序列化时一律忽略；
/// accessToken 按原始键名显式映射到 access_token
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub webhook: Option<String>,
    #[serde(default, rename = "accessToken")]
    pub access_token: Option<String>,
}

/// 提交答案请求体
#[derive(Debug, Clone, Serialize)]
pub struct SubmitRequest {
    #[serde(rename = "finalQuery")]
    pub final_query: String,
}
