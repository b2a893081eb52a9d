//! Conversations and messaging

use knihomat_core::db::models::BookCreate;
use knihomat_core::{AppState, ErrorCode};
use rust_decimal::Decimal;
use shared::models::UserRole;
use surrealdb::RecordId;

async fn state() -> AppState {
    AppState::open_in_memory().await.unwrap()
}

async fn signup(app: &AppState, name: &str, email: &str) {
    app.register(name, email, "heslo123").await.unwrap();
    app.login(email, "heslo123").await.unwrap();
}

fn listing(title: &str, author: &str) -> BookCreate {
    BookCreate {
        title: title.to_string(),
        author: author.to_string(),
        price: Decimal::from(250),
        condition: "good".to_string(),
        description: String::new(),
    }
}

#[tokio::test]
async fn contact_seller_is_idempotent() {
    let app = state().await;
    signup(&app, "Jana", "jana@example.com").await;
    let book = app.add_book(listing("Dune", "Frank Herbert")).await.unwrap();
    let book_id = book.id.clone().unwrap();

    signup(&app, "Petr", "petr@example.com").await;
    let first = app.contact_seller(&book_id).await.unwrap();
    let second = app.contact_seller(&book_id).await.unwrap();
    assert_eq!(first.id, second.id);

    let conversations = app.my_conversations().await.unwrap();
    assert_eq!(conversations.len(), 1);
}

#[tokio::test]
async fn contact_on_missing_book_fails() {
    let app = state().await;
    signup(&app, "Petr", "petr@example.com").await;
    let missing = RecordId::from_table_key("book", "missing");
    let err = app.contact_seller(&missing).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::BookNotFound);
}

#[tokio::test]
async fn messages_keep_post_order() {
    let app = state().await;
    signup(&app, "Jana", "jana@example.com").await;
    let book = app.add_book(listing("Dune", "Frank Herbert")).await.unwrap();

    signup(&app, "Petr", "petr@example.com").await;
    let conversation = app
        .contact_seller(&book.id.clone().unwrap())
        .await
        .unwrap();
    let conv_id = conversation.id.clone().unwrap();

    // burst of messages within the same millisecond must still read
    // back in post order
    for i in 0..10 {
        app.send_message(&conv_id, &format!("message {i}")).await.unwrap();
    }

    let history = app.messages(&conv_id).await.unwrap();
    assert_eq!(history.len(), 10);
    for (i, msg) in history.iter().enumerate() {
        assert_eq!(msg.message, format!("message {i}"));
        assert_eq!(msg.sender_name, "Petr");
    }
    for pair in history.windows(2) {
        assert!(pair[0].seq < pair[1].seq);
        assert!(pair[0].created_at <= pair[1].created_at);
    }
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let app = state().await;
    signup(&app, "Jana", "jana@example.com").await;
    let book = app.add_book(listing("Dune", "Frank Herbert")).await.unwrap();

    signup(&app, "Petr", "petr@example.com").await;
    let conversation = app
        .contact_seller(&book.id.clone().unwrap())
        .await
        .unwrap();
    let conv_id = conversation.id.clone().unwrap();

    let err = app.send_message(&conv_id, "   ").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::EmptyMessage);
    assert!(app.messages(&conv_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn message_to_missing_conversation_fails() {
    let app = state().await;
    signup(&app, "Petr", "petr@example.com").await;
    let missing = RecordId::from_table_key("conversation", "missing");
    let err = app.send_message(&missing, "hello?").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConversationNotFound);
}

#[tokio::test]
async fn both_parties_see_the_counterpart() {
    let app = state().await;
    signup(&app, "Jana", "jana@example.com").await;
    let book = app.add_book(listing("Dune", "Frank Herbert")).await.unwrap();

    signup(&app, "Petr", "petr@example.com").await;
    app.contact_seller(&book.id.clone().unwrap()).await.unwrap();

    let buyer_side = app.my_conversations().await.unwrap();
    assert_eq!(buyer_side.len(), 1);
    assert_eq!(buyer_side[0].counterpart_name, "Jana");
    assert_eq!(buyer_side[0].role, UserRole::Buyer);
    assert_eq!(buyer_side[0].book_title, "Dune");

    app.login("jana@example.com", "heslo123").await.unwrap();
    let seller_side = app.my_conversations().await.unwrap();
    assert_eq!(seller_side.len(), 1);
    assert_eq!(seller_side[0].counterpart_name, "Petr");
    assert_eq!(seller_side[0].role, UserRole::Seller);
}

#[tokio::test]
async fn conversation_info_carries_the_book_and_parties() {
    let app = state().await;
    signup(&app, "Jana", "jana@example.com").await;
    let book = app.add_book(listing("Dune", "Frank Herbert")).await.unwrap();

    signup(&app, "Petr", "petr@example.com").await;
    let conversation = app
        .contact_seller(&book.id.clone().unwrap())
        .await
        .unwrap();

    let info = app
        .conversation_info(&conversation.id.clone().unwrap())
        .await
        .unwrap();
    assert_eq!(info.book_title, "Dune");
    assert_eq!(info.book_author, "Frank Herbert");
    assert_eq!(info.book_price, Decimal::from(250));
    assert_eq!(info.seller_name, "Jana");
    assert_eq!(info.buyer_name, "Petr");

    let missing = RecordId::from_table_key("conversation", "missing");
    let err = app.conversation_info(&missing).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConversationNotFound);
}

#[tokio::test]
async fn conversations_are_scoped_per_book() {
    let app = state().await;
    signup(&app, "Jana", "jana@example.com").await;
    let dune = app.add_book(listing("Dune", "Frank Herbert")).await.unwrap();
    let solaris = app.add_book(listing("Solaris", "Stanislaw Lem")).await.unwrap();

    signup(&app, "Petr", "petr@example.com").await;
    let a = app.contact_seller(&dune.id.clone().unwrap()).await.unwrap();
    let b = app
        .contact_seller(&solaris.id.clone().unwrap())
        .await
        .unwrap();
    assert_ne!(a.id, b.id);

    let conversations = app.my_conversations().await.unwrap();
    assert_eq!(conversations.len(), 2);
}
