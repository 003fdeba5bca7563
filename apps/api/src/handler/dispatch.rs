//! # 配信 API ハンドラ
//!
//! 送信リクエストを受け付け、配信ユースケースへ委譲する。
//!
//! 利用者に返すのは「検証エラー」「集約成功」「集約失敗」のいずれか
//! ちょうど 1 つ。チャネル別の失敗詳細はレスポンスに含めない。

use std::sync::Arc;

use axum::{
   Json,
   extract::State,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use salamat_domain::{
   dispatch::{DispatchResult, SentVia, Submission},
   resource::{ResourceCatalog, ResourceId},
};
use salamat_shared::ApiResponse;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, usecase::DispatchService};

/// 配信ハンドラーの State
pub struct DispatchState {
   pub catalog: ResourceCatalog,
   pub service: DispatchService,
}

/// 送信リクエスト DTO
#[derive(Debug, Deserialize)]
pub struct DispatchRequestDto {
   pub recipient_email: Option<String>,
   pub recipient_phone: Option<String>,
   pub message:         Option<String>,
   #[serde(default)]
   pub send_email:      bool,
   #[serde(default)]
   pub send_whatsapp:   bool,
   #[serde(default)]
   pub resource_ids:    Vec<String>,
}

/// 配信結果 DTO
#[derive(Debug, Serialize)]
pub struct DispatchResultDto {
   pub email:    bool,
   pub whatsapp: bool,
   pub sent_via: SentVia,
}

impl DispatchResultDto {
   fn from_result(result: &DispatchResult, sent_via: SentVia) -> Self {
      Self {
         email: result.email,
         whatsapp: result.whatsapp,
         sent_via,
      }
   }
}

/// 選択資料を配信する
///
/// ## エンドポイント
/// POST /api/dispatch
///
/// ## レスポンス
///
/// - 400: 検証エラー（資料未選択、送信方法未選択、番号形式不正、不明な資料 ID）
/// - 502: 有効な全チャネルの配信が失敗
/// - 200: 1 つ以上のチャネルで配信成功
pub async fn dispatch_resources(
   State(state): State<Arc<DispatchState>>,
   Json(request): Json<DispatchRequestDto>,
) -> Result<Response, ApiError> {
   let ids = request
      .resource_ids
      .iter()
      .map(ResourceId::new)
      .collect::<Vec<_>>();
   let resources = state.catalog.resolve(&ids)?;

   let submission = Submission {
      recipient_email: request.recipient_email,
      recipient_phone: request.recipient_phone,
      message:         request.message,
      send_email:      request.send_email,
      send_whatsapp:   request.send_whatsapp,
      resources,
   };

   let result = state.service.dispatch(submission).await?;

   let Some(sent_via) = result.sent_via() else {
      return Err(ApiError::DispatchFailed);
   };

   let response = ApiResponse::new(DispatchResultDto::from_result(&result, sent_via));
   Ok((StatusCode::OK, Json(response)).into_response())
}
