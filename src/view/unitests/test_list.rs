use crate::{
    Error,
    contact::ContactId,
    view::{
        ContactListView,
        ListStatus,
        Transition,
        DELETE_CONTACT_FAILED,
        FETCH_CONTACTS_FAILED,
    },
};

use super::{
    Call,
    MockApi,
    contact,
    sample_contacts,
};

fn ids(view: &ContactListView) -> Vec<&str> {
    view.contacts().iter().map(|v| v.id().as_str()).collect()
}

#[tokio::test]
async fn test_mount_lists_contacts() {
    let api = MockApi::new(sample_contacts());
    let mut view = ContactListView::new();
    assert_eq!(view.status(), ListStatus::Loading);
    assert!(view.to_string().contains("Loading contacts..."));

    view.mount(&api).await;
    assert_eq!(view.status(), ListStatus::Ready);
    assert_eq!(ids(&view), vec!["1", "2", "3"]);
    assert!(view.error().is_none());
    assert_eq!(api.calls(), vec![Call::List]);
}

#[tokio::test]
async fn test_mount_failure() {
    let api = MockApi::new(sample_contacts());
    api.fail_with(Some(Error::Network("connection refused".into())));

    let mut view = ContactListView::new();
    view.mount(&api).await;

    assert_eq!(view.status(), ListStatus::Ready);
    assert!(view.is_empty());
    assert_eq!(view.error(), Some(FETCH_CONTACTS_FAILED));
}

#[tokio::test]
async fn test_render_single_card() {
    let api = MockApi::new(vec![contact("1", "Ann", "a@x.com", "5551234567")]);
    let mut view = ContactListView::new();
    view.mount(&api).await;

    let text = view.to_string();
    assert!(text.contains("Ann"));
    assert!(text.contains("a@x.com"));
    assert!(text.contains("5551234567"));
    assert!(text.contains("[View </contact/1>]"));
    assert!(text.contains("[Edit </edit/1>]"));
    assert!(text.contains("[Delete 1]"));
    assert!(!text.contains("No contacts found"));
}

#[tokio::test]
async fn test_render_empty_state() {
    let api = MockApi::new(Vec::new());
    let mut view = ContactListView::new();
    view.mount(&api).await;

    let text = view.to_string();
    assert!(text.contains("No contacts found"));
    assert!(text.contains("Start by adding your first contact."));
    assert!(!text.contains("[View"));
}

#[tokio::test]
async fn test_confirm_delete() {
    let api = MockApi::new(sample_contacts());
    let mut view = ContactListView::new();
    view.mount(&api).await;
    api.clear_calls();

    let id = ContactId::new("2");
    view.request_delete(&id).unwrap();
    assert_eq!(view.pending_delete(), Some(&id));
    assert!(api.calls().is_empty());

    assert_eq!(view.confirm_delete(&api).await, Transition::Stay);
    assert_eq!(api.calls(), vec![Call::Delete(id)]);
    assert_eq!(ids(&view), vec!["1", "3"]);
    assert!(view.pending_delete().is_none());
}

#[tokio::test]
async fn test_decline_delete() {
    let api = MockApi::new(sample_contacts());
    let mut view = ContactListView::new();
    view.mount(&api).await;
    api.clear_calls();

    view.request_delete(&ContactId::new("1")).unwrap();
    assert!(view.to_string().contains("Are you sure you want to delete this contact?"));
    view.decline_delete();

    assert_eq!(view.confirm_delete(&api).await, Transition::Stay);
    assert!(api.calls().is_empty());
    assert_eq!(ids(&view), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_delete_failure_keeps_collection() {
    let api = MockApi::new(sample_contacts());
    let mut view = ContactListView::new();
    view.mount(&api).await;

    api.fail_with(Some(Error::Server(500)));
    view.request_delete(&ContactId::new("3")).unwrap();
    view.confirm_delete(&api).await;

    assert_eq!(ids(&view), vec!["1", "2", "3"]);
    assert_eq!(view.error(), Some(DELETE_CONTACT_FAILED));

    let text = view.to_string();
    assert!(text.contains(DELETE_CONTACT_FAILED));
    assert!(text.contains("Cid"));

    view.dismiss_error();
    assert!(view.error().is_none());
}

#[tokio::test]
async fn test_request_delete_unknown() {
    let api = MockApi::new(sample_contacts());
    let mut view = ContactListView::new();
    view.mount(&api).await;

    let result = view.request_delete(&ContactId::new("99"));
    assert!(matches!(result, Err(Error::Argument(_))));
    assert!(view.pending_delete().is_none());
}
