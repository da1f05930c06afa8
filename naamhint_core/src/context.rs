//! `ScanContext`：扫描管线共享的显式状态容器。
//!
//! 约定：
//! - scope（如 bestuursorgaan URI）变化时必须清空候选与匹配缓存，等待重新加载
//! - 缓存条目是“查过的结果”：空列表表示**查过且无命中**，
//!   用来短路后续同文本的扫描，不会与“还没查过”混淆
//! - 一次扫描期间候选集合视为纯快照：同输入两次扫描产出完全相同

use std::collections::HashMap;

use tracing::debug;

use crate::kandidaat::{Kandidaat, matches_prefix};

/// 扫描状态：当前 scope + 已加载候选 + token 文本的匹配备忘。
#[derive(Debug, Clone)]
pub struct ScanContext<K> {
    /// 当前 scope；`None` 表示尚未确定（此时不加载）
    pub scope: Option<String>,
    /// 候选是否已为当前 scope 加载
    pub geladen: bool,
    kandidaten: Vec<K>,
    cache: HashMap<String, Vec<K>>,
}

impl<K> Default for ScanContext<K> {
    fn default() -> Self {
        Self {
            scope: None,
            geladen: false,
            kandidaten: Vec::new(),
            cache: HashMap::new(),
        }
    }
}

impl<K: Kandidaat> ScanContext<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换 scope；返回是否发生了变化。
    ///
    /// 变化时清空已加载候选与缓存（旧 scope 的记录不得泄漏到新 scope）。
    pub fn wissel_scope(&mut self, scope: &str) -> bool {
        if self.scope.as_deref() == Some(scope) {
            return false;
        }
        debug!(scope, "scope gewisseld, kandidaten en cache geleegd");
        self.scope = Some(scope.to_string());
        self.geladen = false;
        (&mut self.kandidaten).clear();
        (&mut self.cache).clear();
        true
    }

    /// 用一次完整抓取的快照替换候选集合，并标记已加载。
    pub fn vul(&mut self, kandidaten: Vec<K>) {
        self.kandidaten = kandidaten;
        self.cache.clear();
        self.geladen = true;
    }

    /// 清空全部状态（等价于重新开始）。
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 当前已加载候选的快照视图。
    pub fn kandidaten(&self) -> &[K] {
        &self.kandidaten
    }

    /// 备忘式匹配：同一 token 文本在缓存有效期内只做一次线性扫描。
    ///
    /// 缓存按**精确的 token 文本**为 key；best-effort，
    /// `vul`/`wissel_scope` 之后整体失效。
    pub fn matches_voor(&mut self, tekst: &str) -> Vec<K> {
        if let Some(hit) = self.cache.get(tekst) {
            debug!(tekst, "cache hit");
            return hit.clone();
        }
        let gevonden: Vec<K> = self
            .kandidaten
            .iter()
            .filter(|k| matches_prefix(*k, tekst))
            .cloned()
            .collect();
        self.cache.insert(tekst.to_string(), gevonden.clone());
        gevonden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Naam(&'static str, &'static str);

    impl Kandidaat for Naam {
        fn id(&self) -> &str {
            self.0
        }
        fn voornaam(&self) -> Option<&str> {
            Some(self.0)
        }
        fn achternaam(&self) -> Option<&str> {
            Some(self.1)
        }
        fn volledige_naam(&self) -> Option<String> {
            Some(format!("{} {}", self.0, self.1))
        }
    }

    #[test]
    fn wissel_scope_leegt_kandidaten() {
        let mut ctx = ScanContext::new();
        assert!(ctx.wissel_scope("http://a"));
        ctx.vul(vec![Naam("Felix", "Ruiz")]);
        assert!(ctx.geladen);
        assert_eq!(ctx.matches_voor("Fel").len(), 1);

        // 同一 scope：状态不动
        assert!(!ctx.wissel_scope("http://a"));
        assert!(ctx.geladen);

        // 其他 scope：候选与缓存都清空
        assert!(ctx.wissel_scope("http://b"));
        assert!(!ctx.geladen);
        assert!(ctx.kandidaten().is_empty());
        assert!(ctx.matches_voor("Fel").is_empty());
    }

    #[test]
    fn cache_onthoudt_ook_nul_treffers() {
        let mut ctx = ScanContext::new();
        ctx.vul(vec![Naam("Felix", "Ruiz")]);
        assert!(ctx.matches_voor("Zzz").is_empty());
        // 第二次命中“查过且无命中”的缓存条目（行为与第一次一致）
        assert!(ctx.matches_voor("Zzz").is_empty());
        assert_eq!(ctx.matches_voor("Fel").len(), 1);
    }
}
