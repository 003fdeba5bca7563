//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **HTTP ステータスへのマッピング**: API 層でステータスコードに変換可能
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 送信リクエストの検証失敗 |
//! | `NotFound` | 404 Not Found | カタログに存在しない資料 ID |
//!
//! ## 使用例
//!
//! ```rust
//! use salamat_domain::DomainError;
//!
//! fn validate_message(message: &str) -> Result<(), DomainError> {
//!     if message.chars().count() > 1000 {
//!         return Err(DomainError::Validation(
//!             "メッセージが長すぎます".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// 配信ロジックの実行中に発生する例外状態を表現する。
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
///
/// # 設計判断
///
/// - `thiserror` を使用し、`std::error::Error` トレイトを自動実装
/// - 各バリアントに `#[error(...)]` で人間可読なメッセージを定義
/// - `Debug` derive により、ログ出力時に詳細情報を表示可能
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 送信リクエストが配信規則に違反している場合に使用する。
    /// バリデーションは fail-fast であり、最初に違反した規則のメッセージが
    /// そのまま利用者に報告される。
    ///
    /// # 例
    ///
    /// - 資料が 1 つも選択されていない
    /// - 送信方法が 1 つも選択されていない
    /// - WhatsApp 番号の形式が不正
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// エンティティが見つからない
    ///
    /// 指定された ID の資料がカタログに存在しない場合に使用する。
    /// `entity_type` にはエンティティの種類を指定し、エラーメッセージを
    /// 具体的にする。
    ///
    /// # フィールド
    ///
    /// - `entity_type`: エンティティの種類（コンパイル時に決定される `&'static str`）
    /// - `id`: 検索に使用した識別子
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Resource" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}
