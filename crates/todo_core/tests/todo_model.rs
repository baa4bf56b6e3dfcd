use chrono::NaiveDate;
use std::collections::HashSet;
use todo_core::{icon_for, Category, EntryForm, TodoId, TodoItem};
use uuid::Uuid;

#[test]
fn sequential_constructions_have_distinct_ids() {
    let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let form = EntryForm::new(due);

    let ids: HashSet<TodoId> = (0..10_000).map(|_| form.build().id()).collect();
    assert_eq!(ids.len(), 10_000);
}

#[test]
fn back_to_back_items_differ_in_id() {
    let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let first = TodoItem::new(None, "same", due);
    let second = TodoItem::new(None, "same", due);
    assert_ne!(first.id(), second.id());
    assert!(!first.id().as_uuid().is_nil());
}

#[test]
fn every_category_maps_to_its_icon() {
    let expected = [
        (Category::Child, "child-selected"),
        (Category::Phone, "phone-selected"),
        (Category::ShoppingCart, "shopping-cart-selected"),
        (Category::Travel, "travel-selected"),
    ];
    for (category, icon) in expected {
        assert_eq!(category.icon_name(), icon);
        assert_eq!(icon_for(Some(category)), Some(icon));
    }
    assert_eq!(icon_for(None), None);
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let item = TodoItem::with_id(
        TodoId::from_uuid(id),
        Some(Category::ShoppingCart),
        "Go shopping",
        NaiveDate::from_ymd_opt(2014, 10, 2).unwrap(),
    );

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["category"], "shopping_cart");
    assert_eq!(json["title"], "Go shopping");
    assert_eq!(json["due_date"], "2014-10-02");

    let decoded: TodoItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn unset_category_serializes_as_null() {
    let item = TodoItem::new(None, "", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let json = serde_json::to_value(&item).unwrap();
    assert!(json["category"].is_null());
    assert_eq!(json["title"], "");
}
