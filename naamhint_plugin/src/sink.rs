//! hint 输出端：宿主 hints-registry 的窄接口。

use std::sync::{Arc, Mutex};

use naamhint_core::model::Span;
use naamhint_store::Mandataris;

use crate::kind::Card;

/// HintSink：替换式（先撤后加）协议。
///
/// 约定：
/// - 同一区域/batch 的旧 hints 必须先 `verwijder_regio` 再 `voeg_toe`：
///   替换，不追加
/// - 两个调用都带 `who`：宿主据此把事件归属到本插件，
///   本插件随后能忽略自己触发的事件（防反馈回路）
pub trait HintSink<K>: Send + Sync {
    fn verwijder_regio(&self, batch: &str, regio: Span, who: &str);
    fn voeg_toe(&self, batch: &str, who: &str, cards: Vec<Card<K>>);
}

/// sink 收到的一次操作（`VerzamelSink` 的记录单元）。
#[derive(Debug, Clone)]
pub enum SinkOp {
    Verwijderd {
        batch: String,
        regio: Span,
        who: String,
    },
    Toegevoegd {
        batch: String,
        who: String,
        cards: Vec<Card<Mandataris>>,
    },
}

/// 记录式 sink：按先后顺序记住所有操作（测试与 CLI 用）。
///
/// clone 共享同一份记录。
#[derive(Clone, Default)]
pub struct VerzamelSink {
    ops: Arc<Mutex<Vec<SinkOp>>>,
}

impl VerzamelSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> Vec<SinkOp> {
        self.ops.lock().unwrap().clone()
    }

    /// 目前累计收到的全部 cards（按添加顺序）。
    pub fn cards(&self) -> Vec<Card<Mandataris>> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                SinkOp::Toegevoegd { cards, .. } => Some(cards),
                SinkOp::Verwijderd { .. } => None,
            })
            .flatten()
            .collect()
    }

    pub fn leeg(&self) {
        self.ops.lock().unwrap().clear();
    }
}

impl HintSink<Mandataris> for VerzamelSink {
    fn verwijder_regio(&self, batch: &str, regio: Span, who: &str) {
        self.ops.lock().unwrap().push(SinkOp::Verwijderd {
            batch: batch.to_string(),
            regio,
            who: who.to_string(),
        });
    }

    fn voeg_toe(&self, batch: &str, who: &str, cards: Vec<Card<Mandataris>>) {
        self.ops.lock().unwrap().push(SinkOp::Toegevoegd {
            batch: batch.to_string(),
            who: who.to_string(),
            cards,
        });
    }
}
