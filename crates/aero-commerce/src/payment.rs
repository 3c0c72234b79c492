//! Pix payment configuration.
//!
//! Only the shape lives here; the checkout flow that uses it is external.

use serde::{Deserialize, Serialize};

/// The Pix key the shop receives payments on.
///
/// Serializes in camelCase (`pixKey`, `pixType`) to match the admin feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PixConfig {
    /// Configuration record key.
    pub key: String,
    /// The Pix key itself (CPF, CNPJ, e-mail, phone or random key).
    pub pix_key: String,
    /// Kind of Pix key, as entered by the shop.
    pub pix_type: String,
    /// Name shown to the payer.
    pub recipient: String,
    /// Whether Pix is offered at checkout.
    pub active: bool,
}

impl PixConfig {
    /// Pix is offered only when active and a key is set.
    pub fn is_active(&self) -> bool {
        self.active && !self.pix_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case() {
        let config: PixConfig = serde_json::from_str(
            r#"{"key":"main","pixKey":"pedidos@aeropizza.com","pixType":"email",
                "recipient":"AeroPizza","active":true}"#,
        )
        .unwrap();
        assert_eq!(config.pix_type, "email");
        assert!(config.is_active());
    }

    #[test]
    fn test_blank_key_is_inactive() {
        let config = PixConfig {
            pix_key: "  ".to_string(),
            active: true,
            ..Default::default()
        };
        assert!(!config.is_active());
    }
}
