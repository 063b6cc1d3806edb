#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::BudgetError;
use rust_decimal_macros::dec;
use std::io::Write;

fn make_csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_turkish_headers() {
    let file = make_csv_file("Kategori,Yıllık Bütçe\nAmbalaj,300000\nKimyasal,500000\n");
    let table = BudgetImporter::load(file.path()).unwrap();
    assert_eq!(table.categories(), vec!["Ambalaj", "Kimyasal"]);
    assert_eq!(table.find("Kimyasal").unwrap().annual_budget, dec!(500000));
}

#[test]
fn test_load_english_headers_and_extra_columns() {
    let table = BudgetImporter::from_reader(
        "Notes,Annual Budget,Category\nfoo,\"1,250.50\",Boya\n".as_bytes(),
    )
    .unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.find("Boya").unwrap().annual_budget, dec!(1250.50));
}

#[test]
fn test_blank_budget_is_zero() {
    let table = BudgetImporter::from_reader("Kategori,Yıllık Bütçe\nNumune,\n".as_bytes()).unwrap();
    assert!(table.find("Numune").unwrap().annual_budget.is_zero());
}

#[test]
fn test_missing_budget_column() {
    let err = BudgetImporter::from_reader("Kategori,Tutar\nAmbalaj,1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ImportError::MissingColumn("Yıllık Bütçe")));
}

#[test]
fn test_missing_category_column() {
    let err = BudgetImporter::from_reader("Yıllık Bütçe\n1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ImportError::MissingColumn("Kategori")));
}

#[test]
fn test_header_only_is_empty() {
    let err = BudgetImporter::from_reader("Kategori,Yıllık Bütçe\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ImportError::Empty));
}

#[test]
fn test_invalid_number_reports_row() {
    let err = BudgetImporter::from_reader(
        "Kategori,Yıllık Bütçe\nAmbalaj,100\nEtiket,çok\n".as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ImportError::InvalidNumber { row: 2, ref value } if value == "çok"
    ));
}

#[test]
fn test_duplicate_category_rejected() {
    let err = BudgetImporter::from_reader(
        "Kategori,Yıllık Bütçe\nAmbalaj,1\nAmbalaj,2\n".as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ImportError::Budget(BudgetError::DuplicateCategory(_))
    ));
}

#[test]
fn test_negative_budget_rejected() {
    let err = BudgetImporter::from_reader("Kategori,Yıllık Bütçe\nAmbalaj,(10)\n".as_bytes())
        .unwrap_err();
    assert!(matches!(
        err,
        ImportError::Budget(BudgetError::NegativeBudget(_, _))
    ));
}

#[test]
fn test_load_missing_file() {
    let err = BudgetImporter::load(std::path::Path::new("/nonexistent/budget.csv")).unwrap_err();
    assert!(matches!(err, ImportError::Csv(_)));
}
