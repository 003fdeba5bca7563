//! # API エラー定義
//!
//! API サーバー固有のエラーと、HTTP レスポンスへの変換を定義する。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use salamat_domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// エラーレスポンス（RFC 7807 Problem Details）
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

/// API サーバーで発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// 不正なリクエスト（バリデーション失敗）
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// 有効な全チャネルの配信が失敗
   ///
   /// チャネルごとの失敗詳細はログにのみ残し、利用者には汎用メッセージを返す。
   #[error("送信に失敗しました")]
   DispatchFailed,

   /// 内部エラー
   #[error("内部エラー: {0}")]
   Internal(String),
}

impl From<DomainError> for ApiError {
   fn from(error: DomainError) -> Self {
      match error {
         DomainError::Validation(msg) => ApiError::Validation(msg),
         DomainError::NotFound { .. } => ApiError::NotFound(error.to_string()),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, error_type, title, detail) = match &self {
         ApiError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            "https://salamat.example.com/errors/bad-request",
            "Bad Request",
            msg.clone(),
         ),
         ApiError::NotFound(msg) => (
            StatusCode::NOT_FOUND,
            "https://salamat.example.com/errors/not-found",
            "Not Found",
            msg.clone(),
         ),
         ApiError::DispatchFailed => (
            StatusCode::BAD_GATEWAY,
            "https://salamat.example.com/errors/dispatch-failed",
            "Bad Gateway",
            "送信に失敗しました".to_string(),
         ),
         ApiError::Internal(msg) => {
            tracing::error!("内部エラー: {}", msg);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               "https://salamat.example.com/errors/internal-error",
               "Internal Server Error",
               "内部エラーが発生しました".to_string(),
            )
         }
      };

      (
         status,
         Json(ErrorResponse {
            error_type: error_type.to_string(),
            title: title.to_string(),
            status: status.as_u16(),
            detail,
         }),
      )
         .into_response()
   }
}
