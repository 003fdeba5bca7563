//! # ユースケース層
//!
//! API サーバーのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: 配信コラボレータを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//!
//! ## モジュール構成
//!
//! - `dispatch`: 配信関連のユースケース

pub mod dispatch;

pub use dispatch::DispatchService;
