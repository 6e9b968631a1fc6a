use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use bronzegen_core::{
    BookRow, InStoreOrderRow, OnlineOrderRow, OrderItem, Price, StoreRow, TimestampWindow,
    is_valid_book, parse_timestamp,
};
use bronzegen_generate::{
    BooksOptions, Dataset, DatasetDetails, GenerateOptions, GenerationEngine, GenerationError,
    GenerationReport, InStoreOrdersOptions, OnlineOrdersOptions, StoresOptions,
};
use serde::de::DeserializeOwned;

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("bronzegen_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn run(dataset: Dataset, output: &Path) -> GenerationReport {
    let engine = GenerationEngine::new(GenerateOptions {
        output: Some(output.to_path_buf()),
        report: None,
    });
    engine.run(&dataset).expect("run generation").report
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let mut reader = csv::Reader::from_path(path).expect("open csv");
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .expect("parse csv rows")
}

fn window() -> TimestampWindow {
    TimestampWindow::new(
        parse_timestamp("2024-06-01 09:00:00").expect("start"),
        parse_timestamp("2024-06-01 21:00:00").expect("end"),
    )
    .expect("window")
}

fn books_dataset(valid: u64, invalid: u64) -> Dataset {
    Dataset::Books(BooksOptions {
        valid,
        invalid,
        seed: Some(2024),
    })
}

fn items_of(json: &str) -> Vec<OrderItem> {
    serde_json::from_str(json).expect("items json")
}

#[test]
fn books_run_writes_valid_and_invalid_rows() {
    let dir = temp_out_dir("books");
    let output = dir.join("bronze_books.csv");
    let report = run(books_dataset(10, 7), &output);

    let rows: Vec<BookRow> = read_rows(&output);
    assert_eq!(rows.len(), 17);
    assert_eq!(rows.iter().filter(|row| row.is_valid()).count(), 10);
    assert_eq!(report.rows_written, 17);

    match &report.details {
        DatasetDetails::Books {
            valid_rows,
            invalid_rows,
            defects_by_mode,
        } => {
            assert_eq!(*valid_rows, 10);
            assert_eq!(*invalid_rows, 7);
            assert_eq!(defects_by_mode.len(), 7);
            assert!(defects_by_mode.values().all(|count| *count == 1));
        }
        other => panic!("unexpected details {other:?}"),
    }

    let header = fs::read_to_string(&output).expect("read books csv");
    assert!(header.starts_with("isbn,title,author,genre\n"));
}

#[test]
fn books_are_deterministic_for_a_seed() {
    let dir = temp_out_dir("books_determinism");
    let a = dir.join("a.csv");
    let b = dir.join("b.csv");
    run(books_dataset(25, 14), &a);
    run(books_dataset(25, 14), &b);

    let a = fs::read_to_string(a).expect("read a");
    let b = fs::read_to_string(b).expect("read b");
    assert_eq!(a, b, "books csv should be deterministic");
}

#[test]
fn stores_run_numbers_stores_sequentially() {
    let dir = temp_out_dir("stores");
    let output = dir.join("bronze_stores.csv");
    let report = run(
        Dataset::Stores(StoresOptions {
            count: 5,
            seed: None,
        }),
        &output,
    );
    assert_eq!(report.seed, 5);

    let rows: Vec<StoreRow> = read_rows(&output);
    let numbers: Vec<&str> = rows.iter().map(|row| row.store_nbr.as_str()).collect();
    assert_eq!(
        numbers,
        vec!["STR-0001", "STR-0002", "STR-0003", "STR-0004", "STR-0005"]
    );
}

#[test]
fn instore_orders_respect_references() {
    let dir = temp_out_dir("instore");
    let books_path = dir.join("books.csv");
    let stores_path = dir.join("stores.csv");
    run(books_dataset(40, 21), &books_path);
    run(
        Dataset::Stores(StoresOptions {
            count: 4,
            seed: None,
        }),
        &stores_path,
    );

    let valid: HashSet<String> = read_rows::<BookRow>(&books_path)
        .into_iter()
        .filter(|row| is_valid_book(&row.isbn, &row.title))
        .map(|row| row.isbn)
        .collect();
    let stores: HashSet<String> = read_rows::<StoreRow>(&stores_path)
        .into_iter()
        .map(|row| row.store_nbr)
        .collect();

    let output = dir.join("orders.csv");
    let report = run(
        Dataset::InStoreOrders(InStoreOrdersOptions {
            count: 150,
            books: books_path.clone(),
            stores: stores_path.clone(),
            seed: None,
            window: window(),
        }),
        &output,
    );
    assert_eq!(report.seed, 42);

    let orders: Vec<InStoreOrderRow> = read_rows(&output);
    assert_eq!(orders.len(), 150);
    for order in &orders {
        assert!(stores.contains(&order.store_nbr), "{}", order.store_nbr);
        let ts = parse_timestamp(&order.transaction_timestamp).expect("timestamp");
        assert!(window().contains(&ts));

        let items = items_of(&order.items);
        assert!(!items.is_empty());
        for item in &items {
            assert!(valid.contains(&item.isbn), "unknown isbn {}", item.isbn);
        }
        let total: Price = items.iter().map(OrderItem::line_total).sum();
        assert_eq!(order.total_amount, total.to_string());
    }

    match report.details {
        DatasetDetails::InstoreOrders {
            valid_books_loaded,
            stores_loaded,
            emails_attached,
        } => {
            assert_eq!(valid_books_loaded, 40);
            assert_eq!(stores_loaded, 4);
            let with_email = orders
                .iter()
                .filter(|order| !order.customer_email.is_empty())
                .count() as u64;
            assert_eq!(emails_attached, with_email);
        }
        other => panic!("unexpected details {other:?}"),
    }
}

#[test]
fn online_orders_with_single_valid_book_reference_only_it() {
    let dir = temp_out_dir("online_single");
    let books_path = dir.join("books.csv");
    fs::write(
        &books_path,
        "isbn,title,author,genre\n\
         978-3-16-148410-0,The Hobbit,J.R.R. Tolkien,Fantasy\n\
         ,Dune,Frank Herbert,Science Fiction\n\
         978-12-34-567890-1,Emma,Jane Austen,Romance\n\
         978-4-44-444444-4,   ,Nobody,Fiction\n",
    )
    .expect("write books fixture");

    let output = dir.join("online.csv");
    let report = run(
        Dataset::OnlineOrders(OnlineOrdersOptions {
            count: 12,
            books: books_path,
            seed: Some(7),
            window: window(),
        }),
        &output,
    );

    let orders: Vec<OnlineOrderRow> = read_rows(&output);
    assert_eq!(orders.len(), 12);
    for order in &orders {
        let items = items_of(&order.items);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].isbn, "978-3-16-148410-0");
        assert_eq!(items[0].title, "The Hobbit");
    }

    let emails: HashSet<&str> = orders.iter().map(|o| o.customer_email.as_str()).collect();
    match report.details {
        DatasetDetails::OnlineOrders {
            valid_books_loaded,
            distinct_customers,
        } => {
            assert_eq!(valid_books_loaded, 1);
            assert_eq!(distinct_customers, 4);
            assert!(emails.len() as u64 <= distinct_customers);
        }
        other => panic!("unexpected details {other:?}"),
    }
}

#[test]
fn prices_match_across_channels() {
    let dir = temp_out_dir("prices");
    let books_path = dir.join("books.csv");
    let stores_path = dir.join("stores.csv");
    run(books_dataset(3, 0), &books_path);
    run(
        Dataset::Stores(StoresOptions {
            count: 2,
            seed: None,
        }),
        &stores_path,
    );

    let instore_path = dir.join("instore.csv");
    let online_path = dir.join("online.csv");
    run(
        Dataset::InStoreOrders(InStoreOrdersOptions {
            count: 40,
            books: books_path.clone(),
            stores: stores_path,
            seed: Some(1),
            window: window(),
        }),
        &instore_path,
    );
    run(
        Dataset::OnlineOrders(OnlineOrdersOptions {
            count: 40,
            books: books_path,
            seed: Some(2),
            window: window(),
        }),
        &online_path,
    );

    let mut prices = std::collections::HashMap::new();
    let instore: Vec<InStoreOrderRow> = read_rows(&instore_path);
    let online: Vec<OnlineOrderRow> = read_rows(&online_path);
    let all_items = instore
        .iter()
        .map(|o| o.items.as_str())
        .chain(online.iter().map(|o| o.items.as_str()))
        .flat_map(items_of);
    for item in all_items {
        let price = *prices.entry(item.isbn.clone()).or_insert(item.unit_price);
        assert_eq!(price, item.unit_price, "price drift for {}", item.isbn);
    }
    assert_eq!(prices.len(), 3);
}

#[test]
fn orders_fail_without_valid_books_and_leave_no_output() {
    let dir = temp_out_dir("no_books");
    let books_path = dir.join("books.csv");
    fs::write(&books_path, "isbn,title,author,genre\n,Dune,Frank Herbert,Fiction\n")
        .expect("write books fixture");

    let output = dir.join("online.csv");
    let engine = GenerationEngine::new(GenerateOptions {
        output: Some(output.clone()),
        report: None,
    });
    let result = engine.run(&Dataset::OnlineOrders(OnlineOrdersOptions {
        count: 5,
        books: books_path,
        seed: None,
        window: window(),
    }));

    assert!(matches!(result, Err(GenerationError::NoValidBooks(_))));
    assert!(!output.exists());
}

#[test]
fn instore_orders_fail_without_stores() {
    let dir = temp_out_dir("no_stores");
    let books_path = dir.join("books.csv");
    let stores_path = dir.join("stores.csv");
    run(books_dataset(5, 0), &books_path);
    fs::write(&stores_path, "store_nbr,store_name\n").expect("write stores fixture");

    let engine = GenerationEngine::new(GenerateOptions {
        output: Some(dir.join("instore.csv")),
        report: None,
    });
    let result = engine.run(&Dataset::InStoreOrders(InStoreOrdersOptions {
        count: 5,
        books: books_path,
        stores: stores_path,
        seed: None,
        window: window(),
    }));
    assert!(matches!(result, Err(GenerationError::NoStores(_))));
}

#[test]
fn missing_reference_file_is_reported() {
    let dir = temp_out_dir("missing_ref");
    let engine = GenerationEngine::new(GenerateOptions {
        output: Some(dir.join("online.csv")),
        report: None,
    });
    let result = engine.run(&Dataset::OnlineOrders(OnlineOrdersOptions {
        count: 1,
        books: dir.join("does_not_exist.csv"),
        seed: None,
        window: window(),
    }));
    assert!(matches!(result, Err(GenerationError::Reference { .. })));
}

#[test]
fn oversized_books_request_fails_before_writing() {
    let dir = temp_out_dir("oversized_books");
    let output = dir.join("bronze_books.csv");
    let engine = GenerationEngine::new(GenerateOptions {
        output: Some(output.clone()),
        report: None,
    });

    for (valid, invalid) in [(u64::MAX, 1), (10_000_000_001, 0), (5, u64::MAX)] {
        let result = engine.run(&books_dataset(valid, invalid));
        assert!(
            matches!(result, Err(GenerationError::InvalidOptions(_))),
            "valid={valid} invalid={invalid}"
        );
    }
    assert!(!output.exists());
}

#[test]
fn report_is_written_when_requested() {
    let dir = temp_out_dir("report");
    let output = dir.join("nested").join("bronze_stores.csv");
    let report_path = dir.join("report.json");
    let engine = GenerationEngine::new(GenerateOptions {
        output: Some(output.clone()),
        report: Some(report_path.clone()),
    });
    let result = engine
        .run(&Dataset::Stores(StoresOptions {
            count: 3,
            seed: Some(9),
        }))
        .expect("run generation");

    let report: GenerationReport =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(report, result.report);
    assert_eq!(report.dataset, "stores");
    assert_eq!(report.rows_written, 3);
    assert_eq!(report.bytes_written, fs::metadata(&output).expect("stat").len());
}
