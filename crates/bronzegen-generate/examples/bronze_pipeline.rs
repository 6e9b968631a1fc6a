use std::env;
use std::path::PathBuf;

use bronzegen_core::TimestampWindow;
use bronzegen_generate::{
    BooksOptions, Dataset, GenerateOptions, GenerationEngine, InStoreOrdersOptions,
    OnlineOrdersOptions, StoresOptions,
};
use chrono::{Local, TimeDelta};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut out_dir = PathBuf::from("bronze_demo");
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out_dir = args.next().map(PathBuf::from).ok_or("missing --out value")?,
            _ => return Err(format!("unexpected argument {arg}").into()),
        }
    }

    let books = out_dir.join("bronze_books.csv");
    let stores = out_dir.join("bronze_stores.csv");
    let window = TimestampWindow::trailing(Local::now().naive_local(), TimeDelta::hours(24));

    let datasets = [
        Dataset::Books(BooksOptions {
            valid: 200,
            invalid: 35,
            seed: None,
        }),
        Dataset::Stores(StoresOptions {
            count: 12,
            seed: None,
        }),
        Dataset::InStoreOrders(InStoreOrdersOptions {
            count: 500,
            books: books.clone(),
            stores: stores.clone(),
            seed: None,
            window,
        }),
        Dataset::OnlineOrders(OnlineOrdersOptions {
            count: 500,
            books: books.clone(),
            seed: None,
            window,
        }),
    ];

    for dataset in &datasets {
        let engine = GenerationEngine::new(GenerateOptions {
            output: Some(out_dir.join(dataset.default_file_name())),
            report: None,
        });
        let result = engine.run(dataset)?;
        println!("{}", result.report.summary());
    }
    Ok(())
}
