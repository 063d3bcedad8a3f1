//! "Add New Product" form state, including the AI generation buttons.

use tracing::{debug, warn};

use crate::dashboard::Dashboard;
use crate::transport::Transport;
use crate::types::{Product, ProductFormData};

pub const KEYWORDS_REQUIRED: &str = "Please enter keywords first";
pub const FIELDS_REQUIRED: &str = "Name, SKU and price are required";
pub const CREATED: &str = "Product created successfully!";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub keywords: String,
    pub description: String,
    pub image_url: String,
    price_input: String,
    error: Option<String>,
    success: Option<String>,
}

/// Digits with at most one dot, in any position; empty is allowed.
fn is_price_text(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit() || c == '.') && value.matches('.').count() <= 1
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price_input(&self) -> &str {
        &self.price_input
    }

    /// Accept an edit of the price field. Text that is not a partial decimal
    /// number is rejected and the buffer keeps its previous value.
    pub fn set_price_input(&mut self, value: &str) -> bool {
        if !is_price_text(value) {
            return false;
        }
        self.price_input = value.to_string();
        true
    }

    /// The parsed price, `0` while the input does not parse.
    pub fn price(&self) -> f64 {
        self.price_input.parse().unwrap_or(0.0)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn can_generate(&self) -> bool {
        !self.keywords.trim().is_empty()
    }

    /// Fill `description` from the AI service. Leaves it untouched on failure.
    pub fn generate_description<T: Transport>(&mut self, dashboard: &Dashboard<T>) -> bool {
        if !self.can_generate() {
            self.error = Some(KEYWORDS_REQUIRED.to_string());
            return false;
        }
        self.error = None;
        match dashboard.generate_description(&self.keywords) {
            Ok(description) => {
                debug!(len = description.len(), "description generated");
                self.description = description;
                true
            }
            Err(e) => {
                warn!(operation = %e.operation(), error = %e, "product form request failed");
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Fill `image_url` from the AI service. Leaves it untouched on failure.
    pub fn generate_image<T: Transport>(&mut self, dashboard: &Dashboard<T>) -> bool {
        if !self.can_generate() {
            self.error = Some(KEYWORDS_REQUIRED.to_string());
            return false;
        }
        self.error = None;
        match dashboard.generate_image(&self.keywords) {
            Ok(image_url) => {
                debug!(%image_url, "image generated");
                self.image_url = image_url;
                true
            }
            Err(e) => {
                warn!(operation = %e.operation(), error = %e, "product form request failed");
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// The create payload; blank description and image URL are omitted.
    pub fn form_data(&self) -> ProductFormData {
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        ProductFormData {
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            price: self.price(),
            description: optional(&self.description),
            image_url: optional(&self.image_url),
        }
    }

    /// Create the product. On success every field resets and the success
    /// message is set; on failure the fields are kept.
    pub fn submit<T: Transport>(&mut self, dashboard: &Dashboard<T>) -> Option<Product> {
        self.error = None;
        self.success = None;

        if self.name.trim().is_empty() || self.sku.trim().is_empty() || self.price_input.is_empty() {
            self.error = Some(FIELDS_REQUIRED.to_string());
            return None;
        }

        match dashboard.create_product(&self.form_data()) {
            Ok(product) => {
                *self = Self {
                    success: Some(CREATED.to_string()),
                    ..Self::default()
                };
                Some(product)
            }
            Err(e) => {
                warn!(operation = %e.operation(), error = %e, "product form request failed");
                self.error = Some(e.to_string());
                None
            }
        }
    }
}
