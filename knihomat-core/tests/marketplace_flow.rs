//! End-to-end marketplace scenario exercising every surface in order:
//! two accounts, one listing, discovery, negotiation, purchase and
//! fulfillment.

use knihomat_core::db::models::BookCreate;
use knihomat_core::{AppState, ErrorCode};
use rust_decimal::Decimal;
use shared::models::OrderStatus;

#[tokio::test]
async fn dune_changes_hands() {
    let app = AppState::open_in_memory().await.unwrap();

    // two accounts
    app.register("Jana Novakova", "jana@example.com", "heslo123")
        .await
        .unwrap();
    app.register("Petr Svoboda", "petr@example.com", "tajne456")
        .await
        .unwrap();

    // Jana lists her copy
    app.login("jana@example.com", "heslo123").await.unwrap();
    let book = app
        .add_book(BookCreate {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            price: Decimal::from(250),
            condition: "like new".to_string(),
            description: "Hardcover, read once".to_string(),
        })
        .await
        .unwrap();
    let book_id = book.id.clone().unwrap();
    app.logout();

    // Petr finds it and checks the detail
    app.login("petr@example.com", "tajne456").await.unwrap();
    let hits = app.search_books("dune").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].seller_name, "Jana Novakova");

    let detail = app.book_detail(&book_id).await.unwrap();
    assert_eq!(detail.seller_email, "jana@example.com");

    // he asks about the condition
    let conversation = app.contact_seller(&book_id).await.unwrap();
    let conv_id = conversation.id.clone().unwrap();
    app.send_message(&conv_id, "Hi, is the dust jacket intact?")
        .await
        .unwrap();
    app.logout();

    // Jana answers
    app.login("jana@example.com", "heslo123").await.unwrap();
    let inbox = app.my_conversations().await.unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].counterpart_name, "Petr Svoboda");
    app.send_message(&conv_id, "Yes, perfect condition.")
        .await
        .unwrap();
    app.logout();

    // Petr reads the reply and buys
    app.login("petr@example.com", "tajne456").await.unwrap();
    let history = app.messages(&conv_id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].sender_name, "Jana Novakova");

    let order = app
        .purchase_book(&book_id, "Dlouha 12, Praha", "+420777123456")
        .await
        .unwrap();
    let order_id = order.id.clone().unwrap();
    assert_eq!(order.order_status, OrderStatus::Pending);

    // the listing is gone from browse immediately
    assert!(app.list_available_books().await.unwrap().is_empty());
    assert!(app.search_books("dune").await.unwrap().is_empty());
    app.logout();

    // Jana sees the sale with the delivery info and fulfills it
    app.login("jana@example.com", "heslo123").await.unwrap();
    let sales = app.my_sales().await.unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].buyer_address, "Dlouha 12, Praha");
    assert_eq!(sales[0].buyer_phone, "+420777123456");

    app.confirm_order(&order_id).await.unwrap();
    app.update_order_status(&order_id, OrderStatus::Shipped)
        .await
        .unwrap();
    app.update_order_status(&order_id, OrderStatus::Completed)
        .await
        .unwrap();
    app.logout();

    // Petr's view reflects completion
    app.login("petr@example.com", "tajne456").await.unwrap();
    let purchases = app.my_purchases().await.unwrap();
    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0].status, OrderStatus::Completed);
    assert_eq!(purchases[0].total_price, Decimal::from(250));

    // a second buyer arriving late is turned away cleanly
    app.register("Eva", "eva@example.com", "heslo789").await.unwrap();
    app.login("eva@example.com", "heslo789").await.unwrap();
    let err = app
        .purchase_book(&book_id, "Kratka 3, Brno", "+420777654321")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AlreadySold);
}
