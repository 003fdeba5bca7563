//! # 資料 API ハンドラ
//!
//! カタログに定義された資料の一覧を提供する。

use std::sync::Arc;

use axum::{Json, extract::State};
use salamat_domain::resource::{Resource, ResourceCatalog};
use salamat_shared::ApiResponse;
use serde::Serialize;

/// 資料ハンドラーの State
pub struct ResourceState {
   pub catalog: ResourceCatalog,
}

/// 資料 DTO
#[derive(Debug, Serialize)]
pub struct ResourceDto {
   pub id:            String,
   pub title:         String,
   #[serde(rename = "type")]
   pub resource_type: String,
   pub description:   String,
   pub file_url:      String,
   pub preview_url:   String,
}

impl ResourceDto {
   fn from_resource(resource: &Resource) -> Self {
      Self {
         id:            resource.id.to_string(),
         title:         resource.title.clone(),
         resource_type: resource.resource_type.to_string(),
         description:   resource.description.clone(),
         file_url:      resource.file_url.clone(),
         preview_url:   resource.preview_url().to_string(),
      }
   }
}

/// 資料一覧を取得する
///
/// ## エンドポイント
/// GET /api/resources
///
/// カタログの定義順で全資料を返す。
pub async fn list_resources(
   State(state): State<Arc<ResourceState>>,
) -> Json<ApiResponse<Vec<ResourceDto>>> {
   let resources = state
      .catalog
      .iter()
      .map(ResourceDto::from_resource)
      .collect::<Vec<_>>();

   Json(ApiResponse::new(resources))
}
