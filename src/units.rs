//! Conversions between coin units and the smallest indivisible unit.
//!
//! Amounts are `f64`, as the daemon reports them. Conversions are total:
//! NaN and infinities pass through arithmetically.

use crate::application::json_rpc::core::model::wallet::Balance;

/// Smallest units per coin.
pub const SATS_PER_BTC: f64 = 100_000_000.0;

pub fn btc_to_sat(amount: f64) -> f64 {
    amount * SATS_PER_BTC
}

pub fn sat_to_btc(amount: f64) -> f64 {
    amount / SATS_PER_BTC
}

pub fn btc_array_to_sat(amounts: &[f64]) -> Vec<f64> {
    amounts.iter().copied().map(btc_to_sat).collect()
}

pub fn sat_array_to_btc(amounts: &[f64]) -> Vec<f64> {
    amounts.iter().copied().map(sat_to_btc).collect()
}

/// Converts every entry of a per-asset balance; labels are kept as they are.
pub fn btc_balance_to_sat(balance: &Balance) -> Balance {
    balance
        .iter()
        .map(|(asset, amount)| (asset.clone(), btc_to_sat(*amount)))
        .collect()
}

pub fn sat_balance_to_btc(balance: &Balance) -> Balance {
    balance
        .iter()
        .map(|(asset, amount)| (asset.clone(), sat_to_btc(*amount)))
        .collect()
}
