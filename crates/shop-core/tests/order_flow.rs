//! End-to-end order scenarios against the public shop-core API.

use shop_core::{Money, OrderPolicy, Product, SharedProduct, ShopError, Store};

fn seeded_store() -> (Store, Vec<SharedProduct>) {
    let products: Vec<SharedProduct> = [
        ("MacBook Air M2", 1450, 100),
        ("Bose QuietComfort Earbuds", 250, 500),
        ("Google Pixel 7", 500, 250),
    ]
    .into_iter()
    .map(|(name, dollars, quantity)| {
        Product::new(name, Money::from_major_minor(dollars, 0).unwrap(), quantity)
            .unwrap()
            .into_shared()
    })
    .collect();

    (Store::new(products.clone()), products)
}

#[test]
fn test_seeded_catalog_totals() {
    let (store, _) = seeded_store();
    assert_eq!(store.total_quantity().unwrap(), 850);

    let lines: Vec<String> = store
        .all_products()
        .iter()
        .map(|p| p.borrow().describe_line())
        .collect();
    assert_eq!(
        lines,
        vec![
            "MacBook Air M2, Price: $1450.00, Quantity: 100",
            "Bose QuietComfort Earbuds, Price: $250.00, Quantity: 500",
            "Google Pixel 7, Price: $500.00, Quantity: 250",
        ]
    );
}

#[test]
fn test_order_picked_from_active_list() {
    let (store, _) = seeded_store();
    let active = store.all_products();

    let list = vec![(active[0].clone(), 2), (active[2].clone(), 1)];
    let total = store.order(&list).unwrap();

    assert_eq!(total, Money::from_major_minor(3400, 0).unwrap());
    assert_eq!(store.total_quantity().unwrap(), 847);
}

#[test]
fn test_sold_out_product_disappears_from_listing() {
    let (store, products) = seeded_store();
    let pixel = products[2].clone();

    store.order(&[(pixel.clone(), 250)]).unwrap();

    assert!(!pixel.borrow().is_active());
    assert_eq!(store.all_products().len(), 2);
    // Still counted, with zero stock.
    assert_eq!(store.total_quantity().unwrap(), 600);

    let err = store.order(&[(pixel, 1)]).unwrap_err();
    assert_eq!(err.to_string(), "Product Inactive");
}

#[test]
fn test_partial_order_leaves_applied_lines() {
    let (store, products) = seeded_store();
    let (macbook, bose) = (products[0].clone(), products[1].clone());
    bose.borrow_mut().set_quantity(3).unwrap();

    let err = store
        .place_order(&[(macbook.clone(), 2), (bose.clone(), 500)], OrderPolicy::Partial)
        .unwrap_err();

    assert_eq!(err.to_string(), "Product only has 3 in stock");
    assert_eq!(macbook.borrow().quantity(), 98);
    assert_eq!(bose.borrow().quantity(), 3);
}

#[test]
fn test_all_or_nothing_order_leaves_catalog_untouched() {
    let (store, products) = seeded_store();
    let (macbook, bose) = (products[0].clone(), products[1].clone());
    bose.borrow_mut().set_quantity(3).unwrap();
    let before = store.total_quantity().unwrap();

    let err = store
        .place_order(&[(macbook.clone(), 2), (bose, 500)], OrderPolicy::AllOrNothing)
        .unwrap_err();

    assert!(matches!(err, ShopError::InsufficientStock { available: 3, requested: 500, .. }));
    assert_eq!(store.total_quantity().unwrap(), before);
    assert_eq!(macbook.borrow().quantity(), 100);
}

#[test]
fn test_catalog_membership() {
    let (mut store, products) = seeded_store();

    let err = store.add_product(products[0].clone()).unwrap_err();
    assert_eq!(err.to_string(), "This product is already in store inventory.");

    let stranger = Product::new("MacBook Air M2", Money::from_major_minor(1450, 0).unwrap(), 100)
        .unwrap()
        .into_shared();
    let err = store.remove_product(&stranger).unwrap_err();
    assert_eq!(err.to_string(), "This product does not exist in store inventory.");

    store.add_product(stranger.clone()).unwrap();
    assert_eq!(store.total_quantity().unwrap(), 950);
    store.remove_product(&stranger).unwrap();
    assert_eq!(store.total_quantity().unwrap(), 850);
}

#[test]
fn test_reactivated_product_can_be_ordered_again() {
    let (store, products) = seeded_store();
    let pixel = products[2].clone();

    store.order(&[(pixel.clone(), 250)]).unwrap();
    pixel.borrow_mut().set_quantity(10).unwrap();
    assert_eq!(store.all_products().len(), 2);

    pixel.borrow_mut().activate();
    assert_eq!(store.all_products().len(), 3);
    assert_eq!(
        store.order(&[(pixel, 4)]).unwrap(),
        Money::from_major_minor(2000, 0).unwrap()
    );
}
