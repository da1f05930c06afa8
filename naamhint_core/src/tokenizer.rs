//! `tokenizer`：把文本切分为候选名字片段（token）。
//!
//! core 只定义接口；具体的名字切分规则由 `naamhint_token` 实现，
//! 方便未来替换为更复杂的切分器（例如词典驱动或语言相关的规则）。

use crate::{error::TokenizeError, model::Token};

/// Tokenizer：raw 文本 -> 候选 token 序列。
///
/// 约定：
/// - 输出按（起始词下标升序，词组长度升序）排列：同一起点先短后长
/// - 每个 token 的 `text` 等于原文 `span` 区间 trim 之后的内容
/// - 退化输入（空串/无大写开头/纯空白）返回 `Ok(vec![])`
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError>;
}
