//! `naamhint_store`：记录模型与候选来源。
//!
//! - `model`：persoon / mandaat / mandataris 记录（serde 可序列化）
//! - `bron`：抽象抓取接口 + 内存实现 + TSV/JSON 装载
pub mod bron;
pub mod model;

pub use bron::{BronError, KandidaatBron, VasteBron};
pub use model::{Mandaat, Mandataris, Persoon};
