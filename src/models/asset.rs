use crate::utils::currency_utils::{compute_appraisal_difference, format_wei_amount};
use crate::utils::label_utils::{format_percent_change, format_price_deviation, EMPTY_VALUE};
use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An asset row as returned by the market data backend. Amounts are
/// base-unit decimal-digit strings; percentages are plain floats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMarketData {
    pub contract: Option<String>,
    pub token_id: Option<String>,
    pub last_sale_price: Option<String>,
    pub last_appraisal: Option<String>,
    pub list_price: Option<String>,
    pub appraisal_change: Option<f64>,
}

/// Display form of an asset row: every cell a ready-to-render string, plus
/// the raw deviation kept for client-side sorting.
#[derive(Debug, Serialize)]
pub struct AssetMarketRow {
    pub contract: String,
    pub token_id: String,
    pub last_sale_price: String,
    pub last_appraisal: String,
    pub list_price: String,
    pub appraisal_change: String,
    pub price_deviation: String,
    #[serde(serialize_with = "super::serialize_option_bigdecimal")]
    pub appraisal_difference: Option<BigDecimal>,
}

impl AssetMarketData {
    /// Deviation of the list price from the appraisal, as a percentage.
    /// Both sides are base-unit amounts, so the scale cancels out.
    pub fn appraisal_difference(&self) -> Option<BigDecimal> {
        let list_price = self.list_price.as_deref().and_then(parse_amount);
        let appraisal = self.last_appraisal.as_deref().and_then(parse_amount);

        compute_appraisal_difference(list_price, appraisal)
    }

    /// Formats the row for display, rendering absent fields as `-`.
    pub fn to_row(&self, decimal_places: i64) -> AssetMarketRow {
        let difference = self.appraisal_difference();

        AssetMarketRow {
            contract: display_or_empty(&self.contract),
            token_id: display_or_empty(&self.token_id),
            last_sale_price: format_amount(&self.last_sale_price, decimal_places),
            last_appraisal: format_amount(&self.last_appraisal, decimal_places),
            list_price: format_amount(&self.list_price, decimal_places),
            appraisal_change: format_percent_change(self.appraisal_change),
            price_deviation: format_price_deviation(
                difference.as_ref().and_then(|d| d.to_f64()),
            ),
            appraisal_difference: difference,
        }
    }
}

fn parse_amount(amount: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(amount).ok()
}

fn display_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| EMPTY_VALUE.to_string())
}

fn format_amount(amount: &Option<String>, decimal_places: i64) -> String {
    amount
        .as_deref()
        .and_then(|a| format_wei_amount(a, decimal_places))
        .unwrap_or_else(|| EMPTY_VALUE.to_string())
}
