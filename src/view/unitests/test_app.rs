use std::sync::Arc;

use crate::{
    Error,
    contact::{ContactId, Field},
    view::{Action, App, Route, View},
};

use super::{
    Call,
    MockApi,
    sample_contacts,
};

async fn start(route: Route) -> (Arc<MockApi>, App) {
    let api = Arc::new(MockApi::new(sample_contacts()));
    let app = App::start(api.clone(), route).await;
    (api, app)
}

#[tokio::test]
async fn test_start_mounts_route() {
    let (api, app) = start(Route::List).await;
    assert_eq!(app.route(), &Route::List);
    assert!(matches!(app.view(), View::List(_)));
    assert_eq!(api.calls(), vec![Call::List]);

    let text = app.to_string();
    assert!(text.starts_with("Contact Manager"));
    assert!(text.contains("Bob"));
}

#[tokio::test]
async fn test_open_paths() {
    let (api, mut app) = start(Route::List).await;

    app.open("/contact/2").await.unwrap();
    assert!(matches!(app.view(), View::Detail(_)));

    app.open("/edit/2").await.unwrap();
    assert!(matches!(app.view(), View::Form(_)));

    app.open("/add").await.unwrap();
    assert_eq!(app.route(), &Route::Add);

    assert!(matches!(app.open("/nowhere").await, Err(Error::Argument(_))));
    assert_eq!(app.route(), &Route::Add);

    let id = ContactId::new("2");
    assert_eq!(api.calls(), vec![Call::List, Call::Get(id.clone()), Call::Get(id)]);
}

#[tokio::test]
async fn test_create_flow() {
    let (api, mut app) = start(Route::Add).await;

    app.dispatch(Action::SetField(Field::Name, "Dee".into())).await.unwrap();
    app.dispatch(Action::SetField(Field::Email, "dee@example.com".into())).await.unwrap();
    app.dispatch(Action::SetField(Field::Phone, "5552223333".into())).await.unwrap();
    app.dispatch(Action::Submit).await.unwrap();

    assert_eq!(app.route(), &Route::List);
    let View::List(list) = app.view() else {
        panic!("expected list view");
    };
    assert_eq!(list.contacts().len(), 4);
    assert!(matches!(api.calls().as_slice(), [Call::Create(_), Call::List]));
}

#[tokio::test]
async fn test_delete_from_list() {
    let (api, mut app) = start(Route::List).await;
    api.clear_calls();

    app.dispatch(Action::Delete(Some(ContactId::new("1")))).await.unwrap();
    app.dispatch(Action::CancelDelete).await.unwrap();
    assert!(api.calls().is_empty());

    app.dispatch(Action::Delete(Some(ContactId::new("1")))).await.unwrap();
    app.dispatch(Action::ConfirmDelete).await.unwrap();
    assert_eq!(api.calls(), vec![Call::Delete(ContactId::new("1"))]);

    let View::List(list) = app.view() else {
        panic!("expected list view");
    };
    assert_eq!(list.contacts().len(), 2);
}

#[tokio::test]
async fn test_delete_from_detail() {
    let (api, mut app) = start(Route::Detail(ContactId::new("2"))).await;

    assert!(matches!(
        app.dispatch(Action::Delete(Some(ContactId::new("3")))).await,
        Err(Error::Argument(_))
    ));

    app.dispatch(Action::Delete(None)).await.unwrap();
    app.dispatch(Action::ConfirmDelete).await.unwrap();

    assert_eq!(app.route(), &Route::List);
    assert_eq!(api.stored().len(), 2);
}

#[tokio::test]
async fn test_back_from_form() {
    let (api, mut app) = start(Route::Edit(ContactId::new("1"))).await;
    app.dispatch(Action::SetField(Field::Name, "Changed".into())).await.unwrap();
    app.dispatch(Action::Back).await.unwrap();

    assert_eq!(app.route(), &Route::List);
    assert_eq!(api.stored()[0].name(), "Ann");
}

#[tokio::test]
async fn test_unsupported_actions() {
    let (_, mut app) = start(Route::List).await;

    let result = app.dispatch(Action::Submit).await;
    assert!(matches!(result, Err(Error::State(_))));

    let result = app.dispatch(Action::SetField(Field::Name, "x".into())).await;
    assert!(matches!(result, Err(Error::State(_))));

    let result = app.dispatch(Action::Delete(None)).await;
    assert!(matches!(result, Err(Error::State(_))));
    assert_eq!(app.route(), &Route::List);
}

#[tokio::test]
async fn test_dismiss_error() {
    let api = Arc::new(MockApi::new(sample_contacts()));
    api.fail_with(Some(Error::Server(500)));
    let mut app = App::start(api.clone(), Route::List).await;

    assert!(app.to_string().contains("Failed to fetch contacts."));
    app.dispatch(Action::DismissError).await.unwrap();
    assert!(!app.to_string().contains("Failed to fetch contacts."));
}
