//! # 配信サービス
//!
//! バリデーション → ペイロード構築 → チャネル別送信 → 結果集約を統合する
//! Coordinator。
//!
//! ## 設計方針
//!
//! - **fail-fast バリデーション**: 検証エラー時は配信コラボレータを一切
//!   呼び出さない
//! - **チャネル独立**: 2 つのチャネル呼び出しは並行に発行し、両方の完了を
//!   待ってから結果を集約する（片方の失敗がもう一方を中断・変更しない）
//! - **依存性注入**: `EmailDelivery` / `MessageDelivery` は trait で抽象化
//! - **リトライなし**: 有効なチャネルごとに外部呼び出しはちょうど 1 回

use std::sync::Arc;

use salamat_domain::{
   DomainError,
   channel::{EmailMessage, TextMessage},
   dispatch::{DispatchResult, Submission},
   phone::PhoneNumber,
};
use salamat_infra::delivery::{EmailDelivery, MessageDelivery};
use salamat_shared::{event_log::event, log_business_event};

use super::composer;

/// 配信サービス
///
/// 1 回の送信リクエストを 0〜2 件の独立した配信試行へ展開し、
/// チャネルごとの成否を [`DispatchResult`] に集約する。
pub struct DispatchService {
   email:    Arc<dyn EmailDelivery>,
   whatsapp: Arc<dyn MessageDelivery>,
}

impl DispatchService {
   pub fn new(email: Arc<dyn EmailDelivery>, whatsapp: Arc<dyn MessageDelivery>) -> Self {
      Self { email, whatsapp }
   }

   /// 送信リクエストを配信する
   ///
   /// バリデーション通過後、有効な各チャネルへ並行に送信する。
   /// 返り値の集約規則:
   ///
   /// - 検証エラー → `Err(DomainError::Validation)`（外部呼び出しなし）
   /// - 1 つ以上のチャネルが成功 → `Ok` かつ `is_success() == true`
   /// - 有効な全チャネルが失敗 → `Ok` かつ `is_success() == false`
   ///   （チャネル別の失敗詳細はログにのみ残る）
   pub async fn dispatch(&self, submission: Submission) -> Result<DispatchResult, DomainError> {
      let plan = match submission.validate() {
         Ok(plan) => plan,
         Err(e) => {
            log_business_event!(
               event.category = event::category::DISPATCH,
               event.action = event::action::DISPATCH_REJECTED,
               event.result = event::result::FAILURE,
               error = %e,
               "送信リクエストを拒否"
            );
            return Err(e);
         }
      };

      // 2 チャネルを並行に発行し、両方の完了を待つ。
      // 無効なチャネルは外部呼び出しを行わず、偽のまま残る。
      let email_task = async {
         match &plan.email_to {
            Some(to) => self.deliver_email(to, &submission).await,
            None => false,
         }
      };
      let whatsapp_task = async {
         match &plan.whatsapp_to {
            Some(to) => self.deliver_whatsapp(to, &submission).await,
            None => false,
         }
      };
      let (email, whatsapp) = tokio::join!(email_task, whatsapp_task);

      let result = DispatchResult { email, whatsapp };

      let outcome = if result.is_success() {
         event::result::SUCCESS
      } else {
         event::result::FAILURE
      };
      log_business_event!(
         event.category = event::category::DISPATCH,
         event.action = event::action::DISPATCH_COMPLETED,
         event.result = outcome,
         dispatch.email = result.email,
         dispatch.whatsapp = result.whatsapp,
         "配信完了"
      );

      Ok(result)
   }

   /// メールチャネルへ送信し、成否を真偽値で返す
   ///
   /// 配信エラーはこの境界で捕捉され、もう一方のチャネルには伝播しない。
   async fn deliver_email(&self, to: &str, submission: &Submission) -> bool {
      let content = composer::compose_email(submission.message.as_deref(), &submission.resources);
      let email = EmailMessage {
         to:        to.to_string(),
         subject:   content.subject,
         text_body: content.text,
         html_body: content.html,
      };

      match self.email.send_email(&email).await {
         Ok(()) => {
            log_business_event!(
               event.category = event::category::DISPATCH,
               event.action = event::action::EMAIL_SENT,
               event.result = event::result::SUCCESS,
               dispatch.recipient = %email.to,
               "メール送信成功"
            );
            true
         }
         Err(e) => {
            log_business_event!(
               event.category = event::category::DISPATCH,
               event.action = event::action::EMAIL_FAILED,
               event.result = event::result::FAILURE,
               dispatch.recipient = %email.to,
               error = %e,
               "メール送信失敗"
            );
            false
         }
      }
   }

   /// WhatsApp チャネルへ送信し、成否を真偽値で返す
   ///
   /// 配信エラーはこの境界で捕捉され、もう一方のチャネルには伝播しない。
   async fn deliver_whatsapp(&self, to: &PhoneNumber, submission: &Submission) -> bool {
      let body = composer::compose_whatsapp(submission.message.as_deref(), &submission.resources);
      let message = TextMessage {
         to: to.clone(),
         body,
      };

      match self.whatsapp.send_message(&message).await {
         Ok(()) => {
            log_business_event!(
               event.category = event::category::DISPATCH,
               event.action = event::action::WHATSAPP_SENT,
               event.result = event::result::SUCCESS,
               dispatch.recipient = %message.to,
               "WhatsApp 送信成功"
            );
            true
         }
         Err(e) => {
            log_business_event!(
               event.category = event::category::DISPATCH,
               event.action = event::action::WHATSAPP_FAILED,
               event.result = event::result::FAILURE,
               dispatch.recipient = %message.to,
               error = %e,
               "WhatsApp 送信失敗"
            );
            false
         }
      }
   }
}
