//! Form validation for the product and transaction forms.
//!
//! Every check runs; errors are collected in the order the form shows them.

use crate::{ProductDraft, TransactionDraft};
use std::fmt;

pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_PRICE: i64 = 999_999_999;

/// Outcome of validating one form
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult<E> {
    pub errors: Vec<E>,
}

impl<E: fmt::Display> ValidationResult<E> {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// User-facing messages, one per error
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductValidationError {
    EmptyName,
    PriceNotPositive,
    NegativeStock,
    NameTooLong(usize),
    PriceTooLarge,
}

impl fmt::Display for ProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductValidationError::EmptyName => write!(f, "Nama produk harus diisi"),
            ProductValidationError::PriceNotPositive => write!(f, "Harga harus lebih dari 0"),
            ProductValidationError::NegativeStock => write!(f, "Stok tidak boleh negatif"),
            ProductValidationError::NameTooLong(_) => {
                write!(f, "Nama produk maksimal {} karakter", MAX_NAME_LENGTH)
            }
            ProductValidationError::PriceTooLarge => write!(f, "Harga terlalu besar"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    ProductNotSelected,
    QuantityNotPositive,
    TypeNotSelected,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionValidationError::ProductNotSelected => write!(f, "Produk harus dipilih"),
            TransactionValidationError::QuantityNotPositive => {
                write!(f, "Quantity harus lebih dari 0")
            }
            TransactionValidationError::TypeNotSelected => {
                write!(f, "Tipe transaksi harus dipilih")
            }
        }
    }
}

pub fn validate_product(product: &ProductDraft) -> ValidationResult<ProductValidationError> {
    let mut errors = Vec::new();

    if product.name.trim().is_empty() {
        errors.push(ProductValidationError::EmptyName);
    }

    if product.price.map_or(true, |price| price <= 0) {
        errors.push(ProductValidationError::PriceNotPositive);
    }

    if product.stock.map_or(true, |stock| stock < 0) {
        errors.push(ProductValidationError::NegativeStock);
    }

    let name_length = product.name.chars().count();
    if name_length > MAX_NAME_LENGTH {
        errors.push(ProductValidationError::NameTooLong(name_length));
    }

    if product.price.is_some_and(|price| price > MAX_PRICE) {
        errors.push(ProductValidationError::PriceTooLarge);
    }

    ValidationResult { errors }
}

pub fn validate_transaction(
    transaction: &TransactionDraft,
) -> ValidationResult<TransactionValidationError> {
    let mut errors = Vec::new();

    if transaction.product_id.map_or(true, |id| id <= 0) {
        errors.push(TransactionValidationError::ProductNotSelected);
    }

    if transaction.quantity.map_or(true, |quantity| quantity <= 0) {
        errors.push(TransactionValidationError::QuantityNotPositive);
    }

    if transaction.transaction_type.is_none() {
        errors.push(TransactionValidationError::TypeNotSelected);
    }

    ValidationResult { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransactionType;

    fn product(name: &str, price: Option<i64>, stock: Option<i32>) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price,
            stock,
        }
    }

    #[test]
    fn test_validate_product_success() {
        let validation = validate_product(&product("Kopi Arabika", Some(45000), Some(20)));
        assert!(validation.is_valid());
        assert!(validation.messages().is_empty());
    }

    #[test]
    fn test_validate_product_accepts_zero_stock() {
        let validation = validate_product(&product("Kopi Arabika", Some(45000), Some(0)));
        assert!(validation.is_valid());
    }

    #[test]
    fn test_validate_product_empty_name() {
        let validation = validate_product(&product("   ", Some(1000), Some(1)));
        assert!(!validation.is_valid());
        assert_eq!(validation.errors, vec![ProductValidationError::EmptyName]);
        assert_eq!(validation.messages(), vec!["Nama produk harus diisi".to_string()]);
    }

    #[test]
    fn test_validate_product_non_positive_price() {
        for price in [None, Some(0), Some(-500)] {
            let validation = validate_product(&product("Gula", price, Some(1)));
            assert_eq!(validation.errors, vec![ProductValidationError::PriceNotPositive]);
        }
    }

    #[test]
    fn test_validate_product_negative_or_missing_stock() {
        let validation = validate_product(&product("Gula", Some(1000), Some(-1)));
        assert_eq!(validation.errors, vec![ProductValidationError::NegativeStock]);

        let validation = validate_product(&product("Gula", Some(1000), None));
        assert_eq!(validation.errors, vec![ProductValidationError::NegativeStock]);
    }

    #[test]
    fn test_validate_product_limits() {
        let long_name = "x".repeat(256);
        let validation = validate_product(&product(&long_name, Some(1_000_000_000), Some(1)));
        assert_eq!(
            validation.errors,
            vec![
                ProductValidationError::NameTooLong(256),
                ProductValidationError::PriceTooLarge,
            ]
        );

        let edge_name = "x".repeat(255);
        assert!(validate_product(&product(&edge_name, Some(MAX_PRICE), Some(1))).is_valid());
    }

    #[test]
    fn test_validate_product_collects_all_errors() {
        let validation = validate_product(&product("", None, None));
        assert_eq!(validation.errors.len(), 3);
        assert_eq!(validation.errors[0], ProductValidationError::EmptyName);
    }

    #[test]
    fn test_validate_transaction_success() {
        let draft = TransactionDraft {
            product_id: Some(3),
            quantity: Some(2),
            transaction_type: Some(TransactionType::Sale),
            description: String::new(),
        };
        assert!(validate_transaction(&draft).is_valid());
    }

    #[test]
    fn test_validate_transaction_rejects_bad_input() {
        let validation = validate_transaction(&TransactionDraft::default());
        assert_eq!(
            validation.errors,
            vec![
                TransactionValidationError::ProductNotSelected,
                TransactionValidationError::QuantityNotPositive,
                TransactionValidationError::TypeNotSelected,
            ]
        );

        let draft = TransactionDraft {
            product_id: Some(0),
            quantity: Some(-4),
            transaction_type: Some(TransactionType::Purchase),
            description: String::new(),
        };
        let validation = validate_transaction(&draft);
        assert_eq!(
            validation.messages(),
            vec![
                "Produk harus dipilih".to_string(),
                "Quantity harus lebih dari 0".to_string(),
            ]
        );
    }
}
