//! Account registration, authentication and session lifecycle

use knihomat_core::{AppState, ErrorCode};

async fn state() -> AppState {
    AppState::open_in_memory().await.unwrap()
}

#[tokio::test]
async fn register_then_login() {
    let app = state().await;
    app.register("Jana Novakova", "jana@example.com", "heslo123")
        .await
        .unwrap();

    let identity = app.login("jana@example.com", "heslo123").await.unwrap();
    assert_eq!(identity.name, "Jana Novakova");
    assert_eq!(identity.email, "jana@example.com");
    assert!(identity.id.starts_with("user:"));

    let current = app.current_user().unwrap();
    assert_eq!(current, identity);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = state().await;
    app.register("Jana", "jana@example.com", "heslo123")
        .await
        .unwrap();

    let err = app
        .register("Other Jana", "jana@example.com", "different")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::DuplicateEmail);
}

#[tokio::test]
async fn blank_registration_fields_are_rejected() {
    let app = state().await;
    let err = app
        .register("  ", "jana@example.com", "heslo123")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingField);

    let err = app.register("Jana", "jana@example.com", "").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingField);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_collapse() {
    let app = state().await;
    app.register("Jana", "jana@example.com", "heslo123")
        .await
        .unwrap();

    // both failures must be indistinguishable to the caller
    let wrong_password = app
        .login("jana@example.com", "spatne")
        .await
        .unwrap_err();
    let unknown_email = app.login("nikdo@example.com", "heslo123").await.unwrap_err();

    assert_eq!(wrong_password.code, ErrorCode::InvalidCredentials);
    assert_eq!(unknown_email.code, ErrorCode::InvalidCredentials);
    assert_eq!(wrong_password.message, unknown_email.message);
}

#[tokio::test]
async fn logout_clears_the_session() {
    let app = state().await;
    app.register("Jana", "jana@example.com", "heslo123")
        .await
        .unwrap();
    app.login("jana@example.com", "heslo123").await.unwrap();
    assert!(app.current_user().is_some());

    app.logout();
    assert!(app.current_user().is_none());

    let err = app.my_books().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NotAuthenticated);
}

#[tokio::test]
async fn facade_mutations_require_authentication() {
    let app = state().await;

    assert_eq!(
        app.my_conversations().await.unwrap_err().code,
        ErrorCode::NotAuthenticated
    );
    assert_eq!(
        app.my_purchases().await.unwrap_err().code,
        ErrorCode::NotAuthenticated
    );
    assert_eq!(
        app.my_sales().await.unwrap_err().code,
        ErrorCode::NotAuthenticated
    );
}

#[tokio::test]
async fn second_login_replaces_the_identity() {
    let app = state().await;
    app.register("Jana", "jana@example.com", "heslo123")
        .await
        .unwrap();
    app.register("Petr", "petr@example.com", "tajne456")
        .await
        .unwrap();

    app.login("jana@example.com", "heslo123").await.unwrap();
    app.login("petr@example.com", "tajne456").await.unwrap();

    assert_eq!(app.current_user().unwrap().name, "Petr");
}
