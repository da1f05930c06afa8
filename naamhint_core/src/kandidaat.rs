//! 候选记录抽象：core 不关心记录来自内存/store/网络。

/// Mandataris 候选记录的最小视图。
///
/// 约定：
/// - `id` 在一个索引内全局唯一（通常是记录的 URI）
/// - 三个姓名字段（常用名/姓/全名）任意一个都可能缺失；
///   缺失按空串处理，空串永不匹配
pub trait Kandidaat: Clone {
    fn id(&self) -> &str;
    /// 常用名（gebruikte voornaam）
    fn voornaam(&self) -> Option<&str>;
    /// 姓（achternaam）
    fn achternaam(&self) -> Option<&str>;
    /// 全名（通常为 "voornaam achternaam"，可能是派生值）
    fn volledige_naam(&self) -> Option<String>;
}

/// 大小写不敏感的前缀匹配：任一非空姓名字段以 token 文本开头即命中。
///
/// 只做前缀，不做模糊/编辑距离。
pub fn matches_prefix<K: Kandidaat>(kandidaat: &K, token_text: &str) -> bool {
    let naald: String = token_text.to_lowercase();
    let begint = |veld: &str| !veld.is_empty() && veld.to_lowercase().starts_with(&naald);
    kandidaat
        .volledige_naam()
        .as_deref()
        .map_or(false, begint)
        || kandidaat.voornaam().map_or(false, begint)
        || kandidaat.achternaam().map_or(false, begint)
}
