//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックはユースケース層に委譲

pub mod dispatch;
pub mod health;
pub mod resource;

pub use dispatch::{DispatchRequestDto, DispatchResultDto, DispatchState, dispatch_resources};
pub use health::health_check;
pub use resource::{ResourceDto, ResourceState, list_resources};
