//! 记录模型：persoon / mandaat / mandataris。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use naamhint_core::kandidaat::Kandidaat;

/// 人员记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persoon {
    pub uri: String,
    /// 常用名
    #[serde(default)]
    pub gebruikte_voornaam: Option<String>,
    /// 姓
    #[serde(default)]
    pub achternaam: Option<String>,
    #[serde(default)]
    pub alternatieve_naam: Option<String>,
    #[serde(default)]
    pub geslacht: Option<String>,
}

impl Persoon {
    /// 全名：存在的名字段按 "voornaam achternaam" 拼接；两者都缺则为 `None`。
    pub fn volledige_naam(&self) -> Option<String> {
        let delen: Vec<&str> = [
            self.gebruikte_voornaam.as_deref(),
            self.achternaam.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
        if delen.is_empty() {
            None
        } else {
            Some(delen.join(" "))
        }
    }
}

/// 职务（bestuursfunctie 的载体）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mandaat {
    pub uri: String,
    /// 职务名称（card 展示用）
    pub bestuursfunctie: String,
}

/// 任职记录：一个人在一个 mandaat 上的任命。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mandataris {
    pub uri: String,
    /// 此任职是谁的行政别名（is bestuurlijke alias van）
    pub persoon: Persoon,
    #[serde(default)]
    pub mandaat: Option<Mandaat>,
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub einde: Option<DateTime<Utc>>,
}

impl Kandidaat for Mandataris {
    fn id(&self) -> &str {
        &self.uri
    }

    fn voornaam(&self) -> Option<&str> {
        self.persoon.gebruikte_voornaam.as_deref()
    }

    fn achternaam(&self) -> Option<&str> {
        self.persoon.achternaam.as_deref()
    }

    fn volledige_naam(&self) -> Option<String> {
        self.persoon.volledige_naam()
    }
}
