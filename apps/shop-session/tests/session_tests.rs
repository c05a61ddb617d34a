use std::io::Write;
use std::path::PathBuf;

use shop_core::{ArgumentError, CoreError, ProductId, ValidationError};
use shop_session::{run, AppError, Operation, SessionConfig};
use tempfile::NamedTempFile;

const FIXTURE_CATALOG: &str = r#"[
    {"id": 1, "name": "Agile Web Development with Rails 5", "price": 2800, "vat_category_id": 2, "stock": 0},
    {"id": 3, "name": "Web Development with Clojure, Second Edition", "price": 2400, "vat_category_id": 2, "stock": 1},
    {"id": 6, "name": "Pragmatic T-Shirt", "price": 900, "vat_category_id": 1, "stock": 2}
]"#;

fn catalog_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn config_for(file: &NamedTempFile) -> SessionConfig {
    SessionConfig::default().with_overrides(Some(file.path().to_path_buf()), None)
}

fn ops(specs: &[&str]) -> Vec<Operation> {
    specs.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn test_book_and_two_shirts() {
    let file = catalog_file(FIXTURE_CATALOG);
    let summary = run(&config_for(&file), &ops(&["add:3", "add:6", "add:6"])).unwrap();

    assert_eq!(summary.items.len(), 2);
    assert_eq!(summary.total.cents(), 4200);
    assert_eq!(summary.total_with_vat.cents(), 4806);
}

#[test]
fn test_removing_shirts_one_by_one() {
    let file = catalog_file(FIXTURE_CATALOG);
    let config = config_for(&file);

    let one_shirt = run(&config, &ops(&["add:3", "add:6", "add:6", "remove:6"])).unwrap();
    assert_eq!(one_shirt.items.len(), 2);
    assert_eq!(one_shirt.total.cents(), 3300);

    let shirtless = run(
        &config,
        &ops(&["add:3", "add:6", "add:6", "remove:6", "remove:6"]),
    )
    .unwrap();
    assert_eq!(shirtless.items.len(), 1);
    assert_eq!(shirtless.total.cents(), 2400);
    assert_eq!(shirtless.total_with_vat.cents(), 2592);
}

#[test]
fn test_sold_out_is_not_an_error() {
    let file = catalog_file(FIXTURE_CATALOG);
    let summary = run(&config_for(&file), &ops(&["add:1", "add:3", "add:3"])).unwrap();

    assert_eq!(summary.items.len(), 1);
    assert_eq!(summary.items[0].id, ProductId::new(3));
    assert_eq!(summary.items[0].quantity, 1);
}

#[test]
fn test_unknown_product_is_rejected() {
    let file = catalog_file(FIXTURE_CATALOG);
    let err = run(&config_for(&file), &ops(&["add:1234"])).unwrap_err();

    assert!(matches!(
        err,
        AppError::Core(CoreError::InvalidArgument(ArgumentError::NotInCatalog(id))) if id == ProductId::new(1234)
    ));
}

#[test]
fn test_remove_unknown_product_is_not_in_cart() {
    let file = catalog_file(FIXTURE_CATALOG);
    let err = run(&config_for(&file), &ops(&["add:6", "remove:1234"])).unwrap_err();

    assert!(matches!(
        err,
        AppError::Core(CoreError::InvalidArgument(ArgumentError::NotInCart(id))) if id == ProductId::new(1234)
    ));
}

#[test]
fn test_overpriced_catalog_entry_is_rejected() {
    let file = catalog_file(
        r#"[{"id": 1, "name": "Overflow", "price": 9223372036854775807, "vat_category_id": 1, "stock": 1}]"#,
    );
    assert!(matches!(
        run(&config_for(&file), &ops(&["add:1"])),
        Err(AppError::Core(CoreError::Validation(ValidationError::OutOfRange { .. })))
    ));
}

#[test]
fn test_remove_not_in_cart_is_rejected() {
    let file = catalog_file(FIXTURE_CATALOG);
    let err = run(&config_for(&file), &ops(&["remove:6"])).unwrap_err();

    assert!(matches!(
        err,
        AppError::Core(CoreError::InvalidArgument(ArgumentError::NotInCart(id))) if id == ProductId::new(6)
    ));
}

#[test]
fn test_empty_session_summary_json() {
    let file = catalog_file(FIXTURE_CATALOG);
    let summary = run(&config_for(&file), &[]).unwrap();

    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        serde_json::json!({"items": [], "total": 0, "total_with_vat": 0})
    );
}

#[test]
fn test_builtin_bookshop_when_no_catalog() {
    let summary = run(&SessionConfig::default(), &ops(&["add:1", "add:6"])).unwrap();

    assert_eq!(summary.total.cents(), 3700);
    // 2800 * 1.08 + 900 * 1.23
    assert_eq!(summary.total_with_vat.cents(), 3024 + 1107);
}

#[test]
fn test_missing_catalog_file() {
    let config = SessionConfig::default()
        .with_overrides(Some(PathBuf::from("/nonexistent/catalog.json")), None);

    assert!(matches!(run(&config, &[]), Err(AppError::Io { .. })));
}

#[test]
fn test_malformed_catalog_file() {
    let file = catalog_file("not json");
    assert!(matches!(run(&config_for(&file), &[]), Err(AppError::Json(_))));
}
