use bronzegen_core::{BookRow, OrderItem, Price, StoreRow, book_price};

#[test]
fn order_items_serialize_with_numeric_prices() {
    let items = vec![
        OrderItem {
            isbn: "978-0-12-345678-9".to_string(),
            title: "Dune".to_string(),
            quantity: 2,
            unit_price: book_price("978-0-12-345678-9"),
        },
        OrderItem {
            isbn: "978-1-23-456789-0".to_string(),
            title: "Emma".to_string(),
            quantity: 1,
            unit_price: Price::from_cents(1250),
        },
    ];

    let json = serde_json::to_string(&items).expect("serialize items");
    let expected = r#"[{"isbn":"978-0-12-345678-9","title":"Dune","quantity":2,"unit_price":25.52},{"isbn":"978-1-23-456789-0","title":"Emma","quantity":1,"unit_price":12.5}]"#;
    assert_eq!(json, expected);

    let parsed: Vec<OrderItem> = serde_json::from_str(&json).expect("parse items");
    assert_eq!(parsed, items);

    let total: Price = parsed.iter().map(OrderItem::line_total).sum();
    assert_eq!(total.to_string(), "63.54");
}

#[test]
fn book_row_validity_follows_dq_rules() {
    let valid = BookRow {
        isbn: "978-0-12-345678-9".to_string(),
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        genre: "Science Fiction".to_string(),
    };
    assert!(valid.is_valid());

    let blank_title = BookRow {
        title: "   ".to_string(),
        ..valid.clone()
    };
    assert!(!blank_title.is_valid());
}

#[test]
fn store_row_serializes_in_column_order() {
    let store = StoreRow {
        store_nbr: "STR-0001".to_string(),
        store_name: "Harbor Books".to_string(),
        store_address: "120 Oak Ave".to_string(),
        store_city: "Boston".to_string(),
        store_state: "MA".to_string(),
        store_zip: "02110".to_string(),
    };
    let json = serde_json::to_value(&store).expect("serialize store");
    let keys: Vec<&String> = json.as_object().expect("object").keys().collect();
    assert_eq!(keys.len(), 6);
    assert_eq!(json["store_nbr"], "STR-0001");
}
