use crate::domain::errors::ValidationError;

use super::model::NewProductProps;

/// Raw product form fields exactly as submitted.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub description: String,
}

impl ProductForm {
    /// Parses and validates the form into a product draft.
    ///
    /// Fields are checked in form order, so the first failing field is reported.
    pub fn validate(self) -> Result<NewProductProps, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameEmpty);
        }

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or(ValidationError::InvalidPrice)?;

        let stock = self
            .stock
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidStock)?;

        Ok(NewProductProps {
            name: name.to_string(),
            category: self.category.trim().to_string(),
            price,
            stock,
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_form() -> ProductForm {
        ProductForm {
            name: "Mouse".to_string(),
            category: "Electronics".to_string(),
            price: "29.99".to_string(),
            stock: "100".to_string(),
            description: "Wireless mouse".to_string(),
        }
    }

    #[test]
    fn should_build_props_when_form_is_valid() {
        let props = mouse_form().validate().unwrap();
        assert_eq!(props.name, "Mouse");
        assert_eq!(props.price, 29.99);
        assert_eq!(props.stock, 100);
    }

    #[test]
    fn should_trim_text_fields() {
        let form = ProductForm {
            name: "  Mouse ".to_string(),
            category: " Electronics".to_string(),
            price: " 29.99 ".to_string(),
            ..mouse_form()
        };
        let props = form.validate().unwrap();
        assert_eq!(props.name, "Mouse");
        assert_eq!(props.category, "Electronics");
    }

    #[test]
    fn should_reject_blank_name() {
        let form = ProductForm {
            name: "   ".to_string(),
            ..mouse_form()
        };
        assert_eq!(form.validate().unwrap_err(), ValidationError::NameEmpty);
    }

    #[test]
    fn should_reject_non_numeric_price() {
        let form = ProductForm {
            price: "abc".to_string(),
            ..mouse_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrice);
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn should_reject_negative_or_nan_price() {
        for price in ["-1", "NaN", "inf"] {
            let form = ProductForm {
                price: price.to_string(),
                ..mouse_form()
            };
            assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidPrice);
        }
    }

    #[test]
    fn should_reject_fractional_or_negative_stock() {
        for stock in ["1.5", "-3", ""] {
            let form = ProductForm {
                stock: stock.to_string(),
                ..mouse_form()
            };
            assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidStock);
        }
    }

    #[test]
    fn should_accept_zero_price_and_stock() {
        let form = ProductForm {
            price: "0".to_string(),
            stock: "0".to_string(),
            ..mouse_form()
        };
        let props = form.validate().unwrap();
        assert_eq!(props.price, 0.0);
        assert_eq!(props.stock, 0);
    }
}
