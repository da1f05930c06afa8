//! 候选来源：抽象抓取接口 + 内存实现 + TSV/JSON 装载。

use std::{fs, path::Path};

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Mandaat, Mandataris, Persoon};

/// 来源错误。抓取失败必须以 `Err` 传播，不得退化为“零候选”。
#[derive(Debug, Error)]
pub enum BronError {
    /// 记录源不可用（网络/后端失败）
    #[error("mandataris 记录源不可用：{0}")]
    Onbeschikbaar(String),

    #[error("TSV 第 {regel} 行缺少 voornaam/achternaam")]
    OngeldigeRegel { regel: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// 候选记录来源：按 scope（bestuursorgaan URI）抓取 mandatarissen。
///
/// 约定：
/// - 一次抓取返回该 scope 的完整快照；调用方整体替换自己的缓存
/// - 抓取与过滤分离：这里只负责“拿到记录”，匹配在 core 里做
#[async_trait]
pub trait KandidaatBron: Send + Sync {
    async fn laad(&self, scope: &str) -> Result<Vec<Mandataris>, BronError>;
}

/// 内存来源：固定记录集（CLI 与测试用），对所有 scope 返回同一份快照。
#[derive(Debug)]
pub struct VasteBron {
    mandatarissen: Vec<Mandataris>,
}

impl VasteBron {
    pub fn new(mandatarissen: Vec<Mandataris>) -> Self {
        Self { mandatarissen }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BronError> {
        let s = fs::read_to_string(path)?;
        Self::from_tsv_str(&s)
    }

    /// TSV 格式（简化版）：
    ///
    /// - `voornaam<TAB>achternaam<TAB>bestuursfunctie<TAB>uri`
    /// - bestuursfunctie 与 uri 可省略；uri 缺失时按行号合成
    /// - 名字段可用空串表示缺失，但不能两个都空
    /// - 允许 `#` 开头注释行
    pub fn from_tsv_str(s: &str) -> Result<Self, BronError> {
        let mut mandatarissen: Vec<Mandataris> = Vec::new();
        for (idx, ruw) in s.lines().enumerate() {
            // 行首的 tab 是有意义的（空 voornaam），只修剪行尾
            let regel = ruw.trim_end();
            if regel.trim_start().is_empty() || regel.trim_start().starts_with('#') {
                continue;
            }
            let mut velden = regel.split('\t');
            let voornaam = velden.next().map(str::trim).unwrap_or("");
            let achternaam = velden.next().map(str::trim).unwrap_or("");
            if voornaam.is_empty() && achternaam.is_empty() {
                return Err(BronError::OngeldigeRegel { regel: idx + 1 });
            }
            let functie = velden.next().map(str::trim).filter(|f| !f.is_empty());
            let uri = velden
                .next()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(String::from)
                .unwrap_or_else(|| format!("urn:mandataris:{}", idx + 1));

            let niet_leeg = |v: &str| {
                if v.is_empty() {
                    None
                } else {
                    Some(v.to_string())
                }
            };
            mandatarissen.push(Mandataris {
                persoon: Persoon {
                    uri: format!("{uri}#persoon"),
                    gebruikte_voornaam: niet_leeg(voornaam),
                    achternaam: niet_leeg(achternaam),
                    alternatieve_naam: None,
                    geslacht: None,
                },
                mandaat: functie.map(|f| Mandaat {
                    uri: format!("{uri}#mandaat"),
                    bestuursfunctie: f.to_string(),
                }),
                start: None,
                einde: None,
                uri,
            });
        }
        Ok(Self { mandatarissen })
    }

    /// JSON 装载：`Vec<Mandataris>` 的直接反序列化。
    pub fn from_json_str(s: &str) -> Result<Self, BronError> {
        Ok(Self {
            mandatarissen: serde_json::from_str(s)?,
        })
    }

    pub fn mandatarissen(&self) -> &[Mandataris] {
        &self.mandatarissen
    }
}

#[async_trait]
impl KandidaatBron for VasteBron {
    async fn laad(&self, _scope: &str) -> Result<Vec<Mandataris>, BronError> {
        Ok(self.mandatarissen.clone())
    }
}
