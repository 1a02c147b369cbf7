use homebook::Error;
use homebook::store::{DocumentStore, RestStore};
use homebook::transaction::{Transaction, TransactionKind};
use time::macros::date;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn record() -> Transaction {
    Transaction {
        id: String::new(),
        amount: 1_000_000.0,
        date: date!(2024 - 01 - 05),
        created_at: None,
        updated_at: None,
        note: "January salary".to_owned(),
        photo_url: None,
        kind: TransactionKind::Income {
            by: "Ann".to_owned(),
            stored_at: "Bank".to_owned(),
        },
    }
}

#[tokio::test]
async fn list_decodes_the_snapshot() {
    let server = MockServer::start().await;

    let body = r#"[
        {
            "id": "r1",
            "type": "income",
            "amount": 1000000.0,
            "date": "2024-01-05",
            "createdAt": "2024-01-05T08:00:00Z",
            "by": "Ann",
            "storedAt": "Bank"
        },
        {
            "id": "r2",
            "type": "expense",
            "amount": 300000.0,
            "date": "2024-01-10",
            "by": "Ann",
            "category": "Groceries",
            "fromLocation": "Bank"
        }
    ]"#;

    Mock::given(method("GET"))
        .and(path("/users/uid-1/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let store = RestStore::new(&server.uri(), "uid-1");
    let transactions = store.list().await.unwrap();

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].id, "r1");
    assert!(transactions[1].is_expense());
}

#[tokio::test]
async fn list_surfaces_malformed_documents_as_decode_errors() {
    let server = MockServer::start().await;

    // An income record missing its storage location violates the schema.
    let body = r#"[{"id": "r1", "type": "income", "amount": 10.0, "date": "2024-01-05", "by": "Ann"}]"#;

    Mock::given(method("GET"))
        .and(path("/users/uid-1/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let store = RestStore::new(&server.uri(), "uid-1");
    let result = store.list().await;

    assert!(matches!(result, Err(Error::StoreDecode(_))));
}

#[tokio::test]
async fn create_posts_the_document_and_returns_the_assigned_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/uid-1/transactions"))
        .and(body_partial_json(serde_json::json!({
            "type": "income",
            "storedAt": "Bank"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_raw(r#"{"id": "assigned-1"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let store = RestStore::new(&server.uri(), "uid-1");
    let id = store.create(&record()).await.unwrap();

    assert_eq!(id, "assigned-1");
}

#[tokio::test]
async fn update_of_a_missing_record_is_the_specific_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/uid-1/transactions/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = RestStore::new(&server.uri(), "uid-1");
    let result = store.update("gone", &record()).await;

    assert_eq!(result, Err(Error::UpdateMissingTransaction));
}

#[tokio::test]
async fn delete_of_a_missing_record_is_the_specific_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/uid-1/transactions/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = RestStore::new(&server.uri(), "uid-1");
    let result = store.delete("gone").await;

    assert_eq!(result, Err(Error::DeleteMissingTransaction));
}

#[tokio::test]
async fn server_failures_are_retryable_store_errors() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/uid-1/transactions/r1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = RestStore::new(&server.uri(), "uid-1");
    let error = store.delete("r1").await.unwrap_err();

    assert!(matches!(error, Error::StoreRequest(_)));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn username_lookup_misses_are_none_not_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/usernames/nobody"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = RestStore::new(&server.uri(), "uid-1");
    let got = store.lookup_username("nobody").await.unwrap();

    assert_eq!(got, None);
}

#[tokio::test]
async fn username_lookup_returns_the_mapped_email() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/usernames/ann_84"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"uid": "uid-1", "email": "ann@example.com"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let store = RestStore::new(&server.uri(), "uid-1");
    let got = store.lookup_username("ann_84").await.unwrap().unwrap();

    assert_eq!(got.email, "ann@example.com");
}
