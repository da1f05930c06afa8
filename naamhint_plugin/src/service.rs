//! `PluginService`：对宿主提供的扫描服务（一次 batch 一个请求）。
//!
//! 与宿主“重启式任务”的语义对齐，但取代隐式重启的是显式代别：
//! - 每个请求领到一个递增的 generation，并拿到一枚取消令牌
//! - 新请求一到，旧请求的令牌立即过期；过期请求照常算完，
//!   但**任何 sink 提交前都要查令牌**，过期结果整体丢弃
//! - 候选刷新（唯一会做 I/O 的一步）被状态锁串行化：
//!   并发调用者等同一次抓取完成，不重复抓

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use naamhint_core::context::ScanContext;
use naamhint_core::engine::Engine;
use naamhint_core::error::TokenizeError;
use naamhint_core::model::Span;
use naamhint_core::tokenizer::Tokenizer;
use naamhint_store::{BronError, KandidaatBron, Mandataris};

use crate::kind::{Card, ContextKind};
use crate::sink::HintSink;

/// 扫描请求级错误：作用域限于单个请求，共享状态不受污染。
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    /// 记录源失败原样传播；绝不当成“零候选”吞掉
    #[error("kandidaten laden mislukt：{0}")]
    Bron(#[from] BronError),
}

/// 一个待扫描的文本区域。
#[derive(Debug, Clone)]
pub struct ScanRegio {
    /// 区域文本
    pub tekst: String,
    /// 区域在文档坐标系里的起点
    pub origin: usize,
    /// 所在上下文的类型 URI（决定是否扫描与 card 的种类）
    pub type_uri: String,
}

impl ScanRegio {
    /// 区域在文档坐标系里的范围。
    pub fn span(&self) -> Span {
        Span::new(self.origin, self.origin + self.tekst.len())
    }
}

/// 一批扫描请求（宿主每次事件发一批，带共享的 batch 标识）。
#[derive(Debug, Clone)]
pub struct ScanVerzoek {
    pub batch: String,
    /// 当前 scope（bestuursorgaan URI）；`None` 表示沿用现状、不触发加载
    pub scope: Option<String>,
    pub regios: Vec<ScanRegio>,
    /// 触发者身份；等于本插件的 who 时整批忽略
    pub triggered_by: Option<String>,
}

/// 取消令牌：generation 落后于最新值即视为被取代。
///
/// 管线在每个 await 点之后、每次 sink 提交之前查它。
#[derive(Clone)]
pub struct Annulering {
    generatie: u64,
    nieuwste: Arc<AtomicU64>,
}

impl Annulering {
    pub fn vervallen(&self) -> bool {
        self.nieuwste.load(Ordering::SeqCst) != self.generatie
    }
}

/// 扫描服务：engine + 记录源 + sink 的编排。
pub struct PluginService<T, B, S> {
    who: String,
    engine: Engine<T>,
    bron: B,
    sink: S,
    staat: Mutex<ScanContext<Mandataris>>,
    generatie: Arc<AtomicU64>,
    debounce: Duration,
}

impl<T, B, S> PluginService<T, B, S>
where
    T: Tokenizer,
    B: KandidaatBron,
    S: HintSink<Mandataris>,
{
    pub fn new(who: impl Into<String>, engine: Engine<T>, bron: B, sink: S) -> Self {
        Self {
            who: who.into(),
            engine,
            bron,
            sink,
            staat: Mutex::new(ScanContext::new()),
            generatie: Arc::new(AtomicU64::new(0)),
            debounce: Duration::from_millis(300),
        }
    }

    /// 设置 debounce 时长（快速连打时只有最新请求活下来）。
    pub fn debounce(mut self, d: Duration) -> Self {
        self.debounce = d;
        self
    }

    pub fn who(&self) -> &str {
        &self.who
    }

    /// 处理一批扫描请求。
    ///
    /// 流程（与宿主事件流一致）：忽略自己触发的事件 -> debounce ->
    /// 确保候选已为当前 scope 加载 -> 逐区域扫描 ->
    /// 先撤该区域旧 hints，最后一次性添加所有 cards。
    #[instrument(skip(self, verzoek), fields(batch = %verzoek.batch))]
    pub async fn execute(&self, verzoek: ScanVerzoek) -> Result<(), ScanError> {
        if verzoek.regios.is_empty() {
            return Ok(());
        }
        if verzoek.triggered_by.as_deref() == Some(self.who.as_str()) {
            debug!("eigen event, genegeerd");
            return Ok(());
        }

        let nummer = self.generatie.fetch_add(1, Ordering::SeqCst) + 1;
        let token = Annulering {
            generatie: nummer,
            nieuwste: Arc::clone(&self.generatie),
        };

        tokio::time::sleep(self.debounce).await;
        if token.vervallen() {
            debug!("verouderd na debounce, overgeslagen");
            return Ok(());
        }

        self.zorg_geladen(verzoek.scope.as_deref()).await?;
        if token.vervallen() {
            return Ok(());
        }

        let mut staat = self.staat.lock().await;
        let mut cards: Vec<Card<Mandataris>> = Vec::new();
        for regio in &verzoek.regios {
            let Some(kind) = ContextKind::van_uri(&regio.type_uri) else {
                continue;
            };
            let hints = self
                .engine
                .generate_hints(&regio.tekst, regio.origin, &mut staat)?;
            if hints.is_empty() {
                continue;
            }
            // 替换语义：先撤掉本插件在该区域先前的 hints
            if token.vervallen() {
                return Ok(());
            }
            self.sink
                .verwijder_regio(&verzoek.batch, regio.span(), &self.who);
            for hint in &hints {
                cards.extend(kind.bouw_cards(hint));
            }
        }
        drop(staat);

        if !cards.is_empty() && !token.vervallen() {
            info!(cards = cards.len(), "hints toegevoegd");
            self.sink.voeg_toe(&verzoek.batch, &self.who, cards);
        }
        Ok(())
    }

    /// 确保候选已为当前 scope 加载。
    ///
    /// 状态锁覆盖整个抓取：同一时刻最多一个刷新在途，
    /// 后来者在锁上等它完成后直接复用结果。
    /// 抓取失败时状态保持“未加载”，下一个请求会重试。
    async fn zorg_geladen(&self, scope: Option<&str>) -> Result<(), ScanError> {
        let mut staat = self.staat.lock().await;
        if let Some(s) = scope {
            staat.wissel_scope(s);
        }
        if staat.geladen {
            return Ok(());
        }
        let Some(sleutel) = staat.scope.clone() else {
            // scope 未知：不加载，照常用现有（可能为空的）快照扫描
            return Ok(());
        };
        let mandatarissen = self.bron.laad(&sleutel).await?;
        debug!(aantal = mandatarissen.len(), scope = %sleutel, "kandidaten geladen");
        staat.vul(mandatarissen);
        Ok(())
    }
}
