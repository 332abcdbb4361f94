use sepet_common::store::Notice;

use sepet_list_integration::harness::ListHarness;
use sepet_list_integration::{BIM, ELEKTRONIK, FIRIN, MIGROS, OYUNCAK, SARKUTERI};

/// Add, buy and delete a single loaf of bread.
#[test]
fn single_item_lifecycle() {
    let mut h = ListHarness::setup();

    let id = h.add("Ekmek", Some(MIGROS), Some(FIRIN)).unwrap();
    assert_eq!(h.list.len(), 1);
    let ekmek = h.product(&id);
    assert_eq!(ekmek.name, "Ekmek");
    assert_eq!(ekmek.shop, "Migros");
    assert_eq!(ekmek.category, "Fırın");
    assert!(!ekmek.is_bought);

    h.toggle(&id);
    assert!(h.product(&id).is_bought);
    assert_eq!(h.notices(), &[Notice::ShoppingComplete]);

    h.delete(&id);
    assert!(h.list.is_empty());
    assert!(h.visible().is_empty());
}

/// The completion notice fires exactly once, on the toggle that finishes the list.
#[test]
fn completion_fires_at_last_purchase() {
    let mut h = ListHarness::setup();
    let a = h.add("A", Some(MIGROS), Some(FIRIN)).unwrap();
    let b = h.add("B", Some(BIM), Some(ELEKTRONIK)).unwrap();

    h.toggle(&a);
    assert!(h.notices().is_empty());
    h.toggle(&b);
    assert_eq!(h.notices(), &[Notice::ShoppingComplete]);
    assert!(h.product(&a).is_bought && h.product(&b).is_bought);
}

/// Un-buying and re-buying fires the notice again; adding a new item re-arms it.
#[test]
fn completion_rearms_after_leaving_all_bought() {
    let mut h = ListHarness::setup();
    let a = h.add("A", Some(MIGROS), Some(FIRIN)).unwrap();

    h.toggle(&a);
    h.toggle(&a);
    h.toggle(&a);
    assert_eq!(h.notices().len(), 2);

    let b = h.add("B", Some(MIGROS), Some(OYUNCAK)).unwrap();
    h.toggle(&b);
    assert_eq!(h.notices().len(), 3);
}

/// Deleting the last unbought item does not celebrate.
#[test]
fn delete_never_fires_completion() {
    let mut h = ListHarness::setup();
    let a = h.add("A", Some(MIGROS), Some(FIRIN)).unwrap();
    let b = h.add("B", Some(MIGROS), Some(FIRIN)).unwrap();
    h.toggle(&a);
    h.delete(&b);
    assert!(h.list.all_bought());
    assert!(h.notices().is_empty());
}

/// Rejected adds leave the list and the form untouched.
#[test]
fn incomplete_form_is_ignored() {
    let mut h = ListHarness::setup();
    assert!(h.add("", Some(MIGROS), Some(FIRIN)).is_none());
    assert!(h.add("Milk", None, Some(FIRIN)).is_none());
    assert_eq!(h.draft.name, "Milk");
    assert!(h.add("Milk", Some(MIGROS), None).is_none());
    assert!(h.list.is_empty());
}

/// The rendered sequence is handed over as `{id, name, shop, category, isBought}`.
#[test]
fn rendered_products_serialize_for_the_view() {
    let mut h = ListHarness::setup();
    let id = h.add("Sucuk", Some(BIM), Some(SARKUTERI)).unwrap();
    let json = serde_json::to_value(h.visible()).unwrap();
    assert_eq!(json[0]["id"], id.0.as_str());
    assert_eq!(json[0]["name"], "Sucuk");
    assert_eq!(json[0]["shop"], "Bim");
    assert_eq!(json[0]["category"], "Şarküteri");
    assert_eq!(json[0]["isBought"], false);
}

/// Every state change produces one render.
#[test]
fn each_change_rerenders() {
    let mut h = ListHarness::setup();
    let id = h.add("Ekmek", Some(MIGROS), Some(FIRIN)).unwrap();
    h.toggle(&id);
    h.set_shop_filter(Some(BIM));
    h.delete(&id);
    // initial + add + toggle + filter + delete
    assert_eq!(h.renders().len(), 5);
    assert_eq!(h.renders()[2], vec![id]);
    assert!(h.renders()[3].is_empty());
}
