//! `naamhint_plugin`：编辑器侧的扫描服务。
//!
//! 对应宿主里的插件生命周期：
//! - 收到一批扫描请求（batch 标识 + 若干文本区域）
//! - debounce 之后按 scope 加载候选（同 scope 只抓一次，刷新串行化）
//! - core 管线产出 hints，按上下文种类扇出成 cards
//! - 以“先撤后加”的替换语义交给 hint sink，并带上自己的 who 身份
//!   （宿主据此忽略本插件自己触发的事件）
pub mod kind;
pub mod service;
pub mod sink;

pub use kind::{Card, ContextKind};
pub use service::{Annulering, PluginService, ScanError, ScanRegio, ScanVerzoek};
pub use sink::{HintSink, SinkOp, VerzamelSink};
