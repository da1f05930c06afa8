use tracing::debug;

use crate::context::ScanContext;
use crate::error::TokenizeError;
use crate::kandidaat::Kandidaat;
use crate::model::Hint;
use crate::reducer::{GrootsteOverlap, Reducer};
use crate::tokenizer::Tokenizer;

/// 引擎：把一段文本 + 候选快照变成去冗余的 hint 列表。
///
/// 结构上对应流水线：
/// - engine（编排）-> tokenizer（切分）-> matcher（前缀匹配，带缓存）
///   -> reducer（去掉被包含的区间）-> `Hint` 输出
pub struct Engine<T> {
    tokenizer: T,
}

impl<T> Engine<T>
where
    T: Tokenizer,
{
    pub fn new(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// 仅切分（不做匹配）。
    pub fn tokenize(&self, tekst: &str) -> Result<Vec<crate::model::Token>, TokenizeError> {
        self.tokenizer.tokenize(tekst)
    }

    /// 管线入口：`tekst` 在文档坐标 `origin` 处的一次扫描。
    ///
    /// - 零命中的 token 在 overlap 归约**之前**就被丢弃
    ///   （只有命中的 token 参与“最大区间”竞争）
    /// - 候选集合在一次调用内视为纯快照：同一 `(tekst, origin, 快照)`
    ///   两次调用产出完全相同
    /// - 每个存活 token 携带的匹配是按**它自己的文本**算出来的，
    ///   不继承被它包含的短 token 的匹配
    pub fn generate_hints<K: Kandidaat>(
        &self,
        tekst: &str,
        origin: usize,
        ctx: &mut ScanContext<K>,
    ) -> Result<Vec<Hint<K>>, TokenizeError> {
        let tokens = self.tokenizer.tokenize(tekst)?;

        let mut gevonden: Vec<Hint<K>> = Vec::new();
        for token in tokens {
            let matches = ctx.matches_voor(&token.text);
            if matches.is_empty() {
                continue;
            }
            gevonden.push(Hint {
                span: token.span,
                absolute_span: token.span.verschoven(origin),
                matches,
            });
        }
        debug!(tokens = gevonden.len(), "tokens met treffers");

        // reducer：去掉被包含的区间
        Ok(GrootsteOverlap.apply(gevonden))
    }
}
