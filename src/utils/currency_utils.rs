use bigdecimal::BigDecimal;
use bigdecimal::RoundingMode;
use bigdecimal::Zero;
use num_bigint::BigInt;
use std::str::FromStr;
use tracing::warn;

/// Base-unit exponent of the chain's native currency.
pub const ETH_DECIMALS: i64 = 18;
/// Default number of fractional digits shown for amounts.
pub const DISPLAY_DECIMALS: i64 = 4;

fn one_eth_in_wei() -> BigDecimal {
    BigDecimal::new(BigInt::from(1), -ETH_DECIMALS)
}

/// Converts a user-typed major-unit amount into base units.
///
/// Returns `None` for malformed input, or for amounts carrying more
/// fractional digits than the base unit can represent.
pub fn eth_to_wei(input: &str) -> Option<BigInt> {
    let amount = match BigDecimal::from_str(input.trim()) {
        Ok(amount) => amount,
        Err(e) => {
            warn!("Invalid currency amount {input:?}: {e}");
            return None;
        }
    };

    let scaled = amount * one_eth_in_wei();
    if !scaled.is_integer() {
        warn!("Currency amount {input:?} exceeds base unit precision");
        return None;
    }

    let (wei, _) = scaled.with_scale(0).into_bigint_and_exponent();
    Some(wei)
}

/// Renders a base-unit amount in major units with the given number of
/// fractional digits, rounding half-up.
fn format_wei(wei: &BigInt, decimal_places: i64) -> String {
    BigDecimal::new(wei.clone(), ETH_DECIMALS)
        .with_scale_round(decimal_places, RoundingMode::HalfUp)
        .to_plain_string()
}

/// Renders a base-unit decimal-digit string as returned by the backend.
/// Returns `None` when the string is not an integer amount.
pub fn format_wei_amount(wei: &str, decimal_places: i64) -> Option<String> {
    match BigInt::from_str(wei.trim()) {
        Ok(wei) => Some(format_wei(&wei, decimal_places)),
        Err(e) => {
            warn!("Invalid base unit amount {wei:?}: {e}");
            None
        }
    }
}

/// Parses a user-typed amount and formats it back at the default display
/// precision. Returns `None` on malformed input so the call site can leave
/// the field unset.
pub fn parse_currency_input(input: &str) -> Option<String> {
    parse_currency_input_with_scale(input, DISPLAY_DECIMALS)
}

/// Same as [`parse_currency_input`] with an explicit fractional digit count.
pub fn parse_currency_input_with_scale(input: &str, decimal_places: i64) -> Option<String> {
    let wei = eth_to_wei(input)?;
    Some(format_wei(&wei, decimal_places))
}

/// Percentage by which a listed price deviates from its appraisal, positive
/// when listed below the appraisal. Returns `None` when either side is
/// missing or the appraisal is zero.
pub fn compute_appraisal_difference(
    list_price: Option<BigDecimal>,
    appraisal: Option<BigDecimal>,
) -> Option<BigDecimal> {
    let list_price = list_price?;
    let appraisal = appraisal?;

    if appraisal.is_zero() {
        return None;
    }

    let difference = (&appraisal - &list_price) * BigDecimal::from(100) / &appraisal;
    Some(difference.with_scale_round(2, RoundingMode::HalfUp))
}
