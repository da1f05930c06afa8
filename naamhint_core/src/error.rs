use thiserror::Error;

/// 切分错误。
///
/// 空输入、没有大写开头的词、纯空白输入都**不是**错误（返回空序列）；
/// 只有“拼接后的子串在预期偏移之后找不到”才会走到这里：
/// 这属于缺陷，直接暴露，不猜测位置。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("token「{text}」在字节偏移 {vanaf} 之后未找到")]
    SpanNotFound { text: String, vanaf: usize },
}
