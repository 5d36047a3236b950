use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use super::common::AmountArg;
use super::common::EstimateMode;
use super::common::SignatureResult;

/// Previous output a wallet may not know about, for `signrawtransactionwithwallet`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SrtwwPrevTx {
    pub txid: String,
    pub vout: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: String,
    /// Required for P2SH.
    #[serde(rename = "redeemScript", default, skip_serializing_if = "Option::is_none")]
    pub redeem_script: Option<String>,
    /// Required for P2WSH or P2SH-P2WSH.
    #[serde(rename = "witnessScript", default, skip_serializing_if = "Option::is_none")]
    pub witness_script: Option<String>,
    /// Required for a non-confidential segwit output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<AmountArg>,
    /// Required for a confidential segwit output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amountcommitment: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrtwwError {
    pub txid: String,
    pub vout: u32,
    #[serde(rename = "scriptSig")]
    pub script_sig: String,
    pub sequence: u32,
    pub error: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRawTransactionWithWalletResult {
    #[serde(flatten)]
    pub signature: SignatureResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<SrtwwError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FundRawTransactionOptions {
    #[serde(rename = "changeAddress", default, skip_serializing_if = "Option::is_none")]
    pub change_address: Option<String>,
    #[serde(rename = "changePosition", default, skip_serializing_if = "Option::is_none")]
    pub change_position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,
    #[serde(rename = "includeWatching", default, skip_serializing_if = "Option::is_none")]
    pub include_watching: Option<bool>,
    #[serde(rename = "lockUnspents", default, skip_serializing_if = "Option::is_none")]
    pub lock_unspents: Option<bool>,
    #[serde(rename = "feeRate", default, skip_serializing_if = "Option::is_none")]
    pub fee_rate: Option<f64>,
    #[serde(
        rename = "subtractFeeFromOutputs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub subtract_fee_from_outputs: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaceable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf_target: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate_mode: Option<EstimateMode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FundRawTransactionResult {
    pub hex: String,
    pub fee: f64,
    pub changepos: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrtInput {
    pub txid: String,
    pub vout: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
}

/// Non-address output of `createrawtransaction`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CrtOtherOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vdata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CrtOutput {
    /// `{address: amount}`.
    Address(BTreeMap<String, f64>),
    Other(CrtOtherOutput),
}

impl CrtOutput {
    pub fn to_address(address: impl Into<String>, amount: f64) -> Self {
        Self::Address(BTreeMap::from([(address.into(), amount)]))
    }

    pub fn fee(amount: f64) -> Self {
        Self::Other(CrtOtherOutput {
            fee: Some(amount),
            ..Default::default()
        })
    }

    pub fn data(hex: impl Into<String>) -> Self {
        Self::Other(CrtOtherOutput {
            data: Some(hex.into()),
            ..Default::default()
        })
    }
}

/// Asset id (or label) per output address of `createrawtransaction`.
pub type CrtOutputAssets = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnblindRawTransactionResult {
    pub hex: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReissueAssetResult {
    pub txid: String,
    pub vin: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueAssetResult {
    pub txid: String,
    pub vin: u32,
    pub entropy: String,
    pub asset: String,
    pub token: String,
}
