//! `naamhint_core`：纯逻辑层（无 I/O）。
//!
//! 设计目标：
//! - **核心可复用**：CLI/编辑器宿主/服务端都能复用同一套扫描逻辑
//! - **分层清晰**：engine -> tokenizer -> matcher（带备忘缓存）-> reducer -> 输出（`Hint`）
//! - **状态显式**：scope、已加载候选、匹配缓存全部放在 `ScanContext`，
//!   不依赖模块级单例，多个 scope/测试之间互不干扰
pub mod context;
pub mod engine;
pub mod error;
pub mod kandidaat;
pub mod model;
pub mod reducer;
pub mod tokenizer;
