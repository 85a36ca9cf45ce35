//! # Validation Module
//!
//! Input validation for the account and dashboard forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell command (clap)                                         │
//! │  └── Argument shape and types                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields, lengths, formats                                 │
//! │  └── Parsed values (e.g. price text → Money)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: storefront-store                                             │
//! │  └── Uniqueness (duplicate email) and existence (unknown id)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_email, validate_registration};
//!
//! assert!(validate_email("ana@example.com").is_ok());
//! assert!(validate_registration("ana@example.com", "secret1", "secret2").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ProductDraft;
use crate::{MAX_SEARCH_QUERY_LENGTH, MIN_PASSWORD_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn require<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(value)
}

// =============================================================================
// Account Validators
// =============================================================================

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@` with a non-empty local part
/// - Domain contains a `.` that is neither first nor last
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = require("email", email)?;

    let invalid = || ValidationError::invalid_format("email", "must be a valid email address");

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }

    Ok(())
}

/// Validates a password.
///
/// ## Rules
/// - Must not be empty
/// - At least [`MIN_PASSWORD_LENGTH`] characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    require("password", password)?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Validates the registration form.
///
/// Checks run in the order the form reports them: missing fields first,
/// then confirmation mismatch, then password length, then email format.
pub fn validate_registration(email: &str, password: &str, confirm: &str) -> ValidationResult<()> {
    require("email", email)?;
    require("password", password)?;
    require("confirm password", confirm)?;

    if password != confirm {
        return Err(ValidationError::Mismatch {
            field: "confirm password".to_string(),
            other: "password".to_string(),
        });
    }

    validate_password(password)?;
    validate_email(email)
}

/// Validates the login form. Only presence is checked; credentials are
/// verified against the store.
pub fn validate_login(email: &str, password: &str) -> ValidationResult<()> {
    require("email", email)?;
    require("password", password)?;
    Ok(())
}

// =============================================================================
// Dashboard Validators
// =============================================================================

/// Validates the product form and builds a draft from it.
///
/// ## Rules
/// - Every field is required
/// - Price must parse as a decimal amount and be greater than zero
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_draft;
///
/// let draft = validate_product_draft("Mug", "7.50", "kitchen", "Ceramic", "https://img/mug.png").unwrap();
/// assert_eq!(draft.price.cents(), 750);
///
/// assert!(validate_product_draft("Mug", "0", "kitchen", "Ceramic", "x").is_err());
/// ```
pub fn validate_product_draft(
    title: &str,
    price_text: &str,
    category: &str,
    description: &str,
    image: &str,
) -> ValidationResult<ProductDraft> {
    let title = require("title", title)?;
    let price = Money::parse_decimal(price_text)?;
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    let category = require("category", category)?;
    let description = require("description", description)?;
    let image = require("image", image)?;

    Ok(ProductDraft {
        title: title.to_string(),
        price,
        description: description.to_string(),
        category: category.to_string(),
        image: image.to_string(),
    })
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches every product)
/// - At most [`MAX_SEARCH_QUERY_LENGTH`] characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LENGTH {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LENGTH,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("  ana@shop.co.id ").is_ok());

        assert!(matches!(
            validate_email(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_email("ana").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ana@example").is_err());
        assert!(validate_email("ana@@example.com").is_err());
        assert!(validate_email("ana@.com").is_err());
        assert!(validate_email("a na@example.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret").is_ok());
        assert!(matches!(
            validate_password("12345"),
            Err(ValidationError::TooShort { min: 6, .. })
        ));
        assert!(validate_password("   ").is_err());
    }

    #[test]
    fn test_validate_registration_order() {
        assert!(matches!(
            validate_registration("", "secret", "secret"),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_registration("ana@example.com", "abc", "abd"),
            Err(ValidationError::Mismatch { .. })
        ));
        assert!(matches!(
            validate_registration("ana@example.com", "abc", "abc"),
            Err(ValidationError::TooShort { .. })
        ));
        assert!(matches!(
            validate_registration("ana", "secret", "secret"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_registration("ana@example.com", "secret", "secret").is_ok());
    }

    #[test]
    fn test_validate_login() {
        assert!(validate_login("ana@example.com", "x").is_ok());
        assert!(validate_login("ana@example.com", " ").is_err());
        assert!(validate_login("", "secret").is_err());
    }

    #[test]
    fn test_validate_product_draft() {
        let draft =
            validate_product_draft(" Mug ", "12.5", "kitchen", "Ceramic mug", "https://img").unwrap();
        assert_eq!(draft.title, "Mug");
        assert_eq!(draft.price.cents(), 1250);

        assert!(matches!(
            validate_product_draft("", "1", "c", "d", "i"),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_draft("t", "", "c", "d", "i"),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_draft("t", "-2", "c", "d", "i"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_product_draft("t", "abc", "c", "d", "i"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_product_draft("t", "1", "c", "d", " ").is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  bag ").unwrap(), "bag");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"a".repeat(101)).is_err());
    }
}
