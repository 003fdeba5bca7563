//! 配信ワークフローの統合テスト
//!
//! カタログ解決 → 送信リクエスト検証 → チャネル別送信 → 結果集約の
//! 全体フローを、モック配信コラボレータを通して検証する。

use std::sync::Arc;

use salamat_api::usecase::DispatchService;
use salamat_domain::{
    DomainError,
    dispatch::{SentVia, Submission},
    resource::{ResourceCatalog, ResourceId},
};
use salamat_infra::mock::{MockEmailDelivery, MockMessageDelivery};

struct DispatchSetup {
    catalog:  ResourceCatalog,
    email:    MockEmailDelivery,
    whatsapp: MockMessageDelivery,
    sut:      DispatchService,
}

fn make_setup() -> DispatchSetup {
    let email = MockEmailDelivery::new();
    let whatsapp = MockMessageDelivery::new();
    let sut = DispatchService::new(Arc::new(email.clone()), Arc::new(whatsapp.clone()));

    DispatchSetup {
        catalog: ResourceCatalog::builtin(),
        email,
        whatsapp,
        sut,
    }
}

fn make_submission(setup: &DispatchSetup, ids: &[&str]) -> Submission {
    let ids = ids.iter().map(ResourceId::new).collect::<Vec<_>>();
    let resources = setup.catalog.resolve(&ids).unwrap();

    Submission {
        recipient_email: Some("patient@example.com".to_string()),
        recipient_phone: Some("+971 (50) 123-4567".to_string()),
        message:         Some("経過観察のための資料です".to_string()),
        send_email:      true,
        send_whatsapp:   true,
        resources,
    }
}

#[tokio::test]
async fn test_dispatch_両チャネルで選択資料のリンクが配信される() {
    // Arrange
    let setup = make_setup();
    let submission = make_submission(&setup, &["health-guide", "exercise-video"]);

    // Act
    let result = setup.sut.dispatch(submission).await.unwrap();

    // Assert
    assert!(result.is_success());
    assert_eq!(result.sent_via(), Some(SentVia::Both));

    let sent = setup.email.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "patient@example.com");
    assert!(sent[0].text_body.contains("経過観察のための資料です"));
    assert!(sent[0].html_body.contains("Patient Health Guide"));
    assert!(sent[0].html_body.contains("Exercise Tutorial"));

    let messages = setup.whatsapp.sent_messages();
    assert_eq!(messages.len(), 1);
    // 番号は宛先の正規化後の形式
    assert_eq!(messages[0].to.as_str(), "+971501234567");
    assert!(messages[0].body.contains("1. Patient Health Guide (PDF)"));
    assert!(messages[0].body.contains("2. Exercise Tutorial (Video)"));
}

#[tokio::test]
async fn test_dispatch_不明な資料idはカタログ解決で拒否される() {
    // Arrange
    let setup = make_setup();
    let ids = vec![ResourceId::new("health-guide"), ResourceId::new("unknown")];

    // Act
    let result = setup.catalog.resolve(&ids);

    // Assert
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_dispatch_資料未選択は検証エラーで外部呼び出しゼロ() {
    // Arrange
    let setup = make_setup();
    let submission = Submission {
        resources: Vec::new(),
        ..make_submission(&setup, &["health-guide"])
    };

    // Act
    let result = setup.sut.dispatch(submission).await;

    // Assert
    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert!(setup.email.sent_emails().is_empty());
    assert!(setup.whatsapp.sent_messages().is_empty());
}

#[tokio::test]
async fn test_dispatch_メール失敗時もwhatsapp配信は完了し集約は成功() {
    // Arrange
    let setup = make_setup();
    setup.email.fail_with("SMTP 接続失敗");
    let submission = make_submission(&setup, &["medical-guidelines"]);

    // Act
    let result = setup.sut.dispatch(submission).await.unwrap();

    // Assert
    assert!(!result.email);
    assert!(result.whatsapp);
    assert!(result.is_success());
    assert_eq!(result.sent_via(), Some(SentVia::Whatsapp));
    assert_eq!(setup.whatsapp.sent_messages().len(), 1);
}

#[tokio::test]
async fn test_dispatch_全チャネル失敗で集約は失敗() {
    // Arrange
    let setup = make_setup();
    setup.email.fail_with("SMTP 接続失敗");
    setup.whatsapp.fail_with("Twilio API エラー");
    let submission = make_submission(&setup, &["health-guide"]);

    // Act
    let result = setup.sut.dispatch(submission).await.unwrap();

    // Assert
    assert!(!result.email);
    assert!(!result.whatsapp);
    assert!(!result.is_success());
    assert_eq!(result.sent_via(), None);
}

#[tokio::test]
async fn test_dispatch_メールのみ有効ならwhatsappは呼ばれない() {
    // Arrange
    let setup = make_setup();
    let submission = Submission {
        send_whatsapp: false,
        ..make_submission(&setup, &["health-guide"])
    };

    // Act
    let result = setup.sut.dispatch(submission).await.unwrap();

    // Assert
    assert_eq!(result.sent_via(), Some(SentVia::Email));
    assert_eq!(setup.email.sent_emails().len(), 1);
    assert!(setup.whatsapp.sent_messages().is_empty());
}
