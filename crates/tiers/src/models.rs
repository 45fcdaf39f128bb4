// ABOUTME: Data models for scraped pricing tiers.
// ABOUTME: Package records serialize with camelCase keys and omit absent fields.

use std::fmt;

use serde::Serialize;

/// Billing cadence stated next to a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Frequency {
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        };
        write!(f, "{}", s)
    }
}

/// One pricing tier extracted from a page.
///
/// `price` is the text exactly as displayed. `yearly_price` and
/// `monthly_price` are only set when `frequency` is known, and then always
/// together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub option_title: String,
    pub description: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_camel_case_and_skips_absent_fields() {
        let pkg = Package {
            option_title: "Basic".to_string(),
            description: "Starter tier".to_string(),
            price: "£5.00".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&pkg).unwrap();
        assert_eq!(
            value,
            json!({
                "optionTitle": "Basic",
                "description": "Starter tier",
                "price": "£5.00"
            })
        );
    }

    #[test]
    fn serializes_frequency_and_derived_prices() {
        let pkg = Package {
            option_title: "Option 1".to_string(),
            description: "Description 1".to_string(),
            price: "£108.00".to_string(),
            frequency: Some(Frequency::Yearly),
            discount: Some("Save £11.90 on the monthly price".to_string()),
            yearly_price: Some(108.0),
            monthly_price: Some(9.0),
        };

        let value = serde_json::to_value(&pkg).unwrap();
        assert_eq!(value["frequency"], "Yearly");
        assert_eq!(value["yearlyPrice"], 108.0);
        assert_eq!(value["monthlyPrice"], 9.0);
        assert_eq!(value["discount"], "Save £11.90 on the monthly price");
    }

    #[test]
    fn unparseable_prices_serialize_as_null() {
        let pkg = Package {
            option_title: "Custom".to_string(),
            price: "POA".to_string(),
            frequency: Some(Frequency::Monthly),
            yearly_price: Some(f64::NAN),
            monthly_price: Some(f64::NAN),
            ..Default::default()
        };

        let value = serde_json::to_value(&pkg).unwrap();
        assert!(value["yearlyPrice"].is_null());
        assert!(value["monthlyPrice"].is_null());
    }
}
