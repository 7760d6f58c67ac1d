//! menu-ai-rust
//!
//! メニュー写真AI翻訳・注文アシスタントのCLI実装

pub mod ai;
pub mod ai_provider;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod view;
