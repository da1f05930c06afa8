//! `reducer`：hint 后处理（丢弃被包含的区间，只留最大匹配）。

use crate::model::Hint;

/// Reducer：对“有命中的 token”序列做后处理。
pub trait Reducer: Send + Sync {
    fn apply<K: Clone>(&self, hints: Vec<Hint<K>>) -> Vec<Hint<K>>;
}

/// 默认 reducer：只保留“最大重叠”的 hint。
///
/// 一个 hint 被丢弃，当且仅当它的 span 被同一序列里**另一个** hint 的
/// span 严格包含（`Span::bevat_in`）。嵌套词组因此只剩最大的那个：
/// 「Felix」被「Felix Ruiz」包含，只有后者存活。
/// span 完全相同的两个 hint 互不包含，二者都保留。
pub struct GrootsteOverlap;

impl Reducer for GrootsteOverlap {
    fn apply<K: Clone>(&self, hints: Vec<Hint<K>>) -> Vec<Hint<K>> {
        let spans: Vec<_> = hints.iter().map(|h| h.span).collect();
        hints
            .into_iter()
            .filter(|h| !spans.iter().any(|s| h.span.bevat_in(*s)))
            .collect()
    }
}
