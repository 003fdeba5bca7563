//! # Salamat API サーバー
//!
//! 保健教育資料の配信を担当する HTTP サービス。
//!
//! ## 役割
//!
//! API サーバーは資料カタログの提供と配信ワークフローの実行を担当する:
//!
//! - **カタログ提供**: 定義済み資料の一覧（GET /api/resources）
//! - **配信実行**: 送信リクエストの検証・ペイロード構築・チャネル別送信
//!   （POST /api/dispatch）
//!
//! ## 配信チャネル
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Frontend   │────▶│  API Server  │────▶│  SMTP / Mail │
//! └──────────────┘     └──────┬───────┘     └──────────────┘
//!                             │
//!                             ▼
//!                      ┌──────────────┐
//!                      │ Twilio (WA)  │
//!                      └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | **Yes** | ポート番号 |
//! | `EMAIL_BACKEND` | No | `smtp` または `noop`（デフォルト: `noop`） |
//! | `MESSAGING_BACKEND` | No | `twilio` または `noop`（デフォルト: `noop`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p salamat-api
//!
//! # 本番環境
//! API_PORT=3001 EMAIL_BACKEND=smtp MESSAGING_BACKEND=twilio \
//!     cargo run -p salamat-api --release
//! ```

mod config;
mod error;
mod handler;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use axum::{
   Router,
   routing::{get, post},
};
use config::ApiConfig;
use handler::{DispatchState, ResourceState, dispatch_resources, health_check, list_resources};
use salamat_domain::resource::ResourceCatalog;
use salamat_infra::delivery::{
   EmailDelivery,
   MessageDelivery,
   NoopEmailDelivery,
   NoopMessageDelivery,
   SmtpEmailDelivery,
   TwilioMessageDelivery,
};
use salamat_shared::observability::{LogFormat, TracingConfig};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usecase::DispatchService;

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化（LOG_FORMAT で JSON / Pretty を切り替え）
   let tracing_config = TracingConfig::from_env("salamat-api");
   let registry = tracing_subscriber::registry().with(
      tracing_subscriber::EnvFilter::try_from_default_env()
         .unwrap_or_else(|_| "info,salamat=debug".into()),
   );
   match tracing_config.log_format {
      LogFormat::Json => registry
         .with(tracing_subscriber::fmt::layer().json())
         .init(),
      LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
   }

   // 設定読み込み
   let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!(
      "API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // 資料カタログは起動時に一度だけ構築し、必要なコンポーネントへ注入する
   let catalog = ResourceCatalog::builtin();

   // 配信コラボレータをバックエンド設定に応じて初期化
   let email: Arc<dyn EmailDelivery> = match config.email.backend.as_str() {
      "smtp" => Arc::new(SmtpEmailDelivery::new(
         &config.email.smtp_host,
         config.email.smtp_port,
         config.email.from_address.clone(),
      )),
      "noop" => Arc::new(NoopEmailDelivery),
      other => {
         tracing::warn!("不明な EMAIL_BACKEND: {other}、noop を使用します");
         Arc::new(NoopEmailDelivery)
      }
   };
   let whatsapp: Arc<dyn MessageDelivery> = match config.messaging.backend.as_str() {
      "twilio" => Arc::new(TwilioMessageDelivery::new(
         &config.messaging.api_base,
         config.messaging.account_sid.clone(),
         config.messaging.auth_token.clone(),
         config.messaging.from_number.clone(),
      )),
      "noop" => Arc::new(NoopMessageDelivery),
      other => {
         tracing::warn!("不明な MESSAGING_BACKEND: {other}、noop を使用します");
         Arc::new(NoopMessageDelivery)
      }
   };
   tracing::info!(
      email_backend = %config.email.backend,
      messaging_backend = %config.messaging.backend,
      "配信バックエンドを初期化しました"
   );

   // 依存コンポーネントを初期化
   let resource_state = Arc::new(ResourceState {
      catalog: catalog.clone(),
   });
   let dispatch_state = Arc::new(DispatchState {
      catalog,
      service: DispatchService::new(email, whatsapp),
   });

   // ルーター構築
   let app = Router::new()
      .route("/health", get(health_check))
      .route("/api/resources", get(list_resources))
      .with_state(resource_state)
      .route("/api/dispatch", post(dispatch_resources))
      .with_state(dispatch_state)
      .layer(TraceLayer::new_for_http());

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
