use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use super::common::Bip125Replaceable;
use super::common::TxCategory;
use super::common::WalletTxDetails;
use super::common::WalletTxEntry;

/// Amounts keyed by asset label (or asset id for unlabelled assets).
pub type Balance = BTreeMap<String, f64>;

/// Entry of `listsinceblock`.
///
/// Written out rather than flattened: the wallet entry and the detail share
/// `amount`, `fee` and `vout`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LsbTransaction {
    pub txid: String,
    pub vout: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub category: TxCategory,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    pub confirmations: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockhash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockindex: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocktime: Option<u64>,
    pub time: u64,
    pub timereceived: u64,
    #[serde(rename = "bip125-replaceable")]
    pub bip125_replaceable: Bip125Replaceable,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abandoned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListSinceBlockResult {
    pub transactions: Vec<LsbTransaction>,
    #[serde(default)]
    pub removed: Vec<LsbTransaction>,
    pub lastblock: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetTransactionResult {
    #[serde(flatten)]
    pub entry: WalletTxEntry,
    pub txid: String,
    pub details: Vec<WalletTxDetails>,
    pub hex: String,
    #[serde(default)]
    pub walletconflicts: Vec<String>,
}

/// Unspent output as listed by `listunspent`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utxo {
    pub txid: String,
    pub vout: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub script_pub_key: String,
    pub amount: f64,
    #[serde(rename = "amountcommitment", default, skip_serializing_if = "Option::is_none")]
    pub amount_commitment: Option<String>,
    pub asset: String,
    #[serde(rename = "assetcommitment", default, skip_serializing_if = "Option::is_none")]
    pub asset_commitment: Option<String>,
    #[serde(rename = "amountblinder")]
    pub amount_blinder: String,
    #[serde(rename = "assetblinder")]
    pub asset_blinder: String,
    pub confirmations: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeem_script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness_script: Option<String>,
    pub spendable: bool,
    pub solvable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub safe: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUnspentQueryOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_sum_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputScriptType {
    Nonstandard,
    Pubkey,
    Pubkeyhash,
    Scripthash,
    Multisig,
    Nulldata,
    WitnessV0Keyhash,
    WitnessV0Scripthash,
    WitnessUnknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressLabelPurpose {
    Send,
    Receive,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressLabel {
    pub name: String,
    pub purpose: AddressLabelPurpose,
}

/// Result of `getaddressinfo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub address: String,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: String,
    pub ismine: bool,
    pub iswatchonly: bool,
    pub solvable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub isscript: bool,
    pub ischange: bool,
    pub iswitness: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness_program: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<OutputScriptType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkeys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigsrequired: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Box<AddressInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iscompressed: Option<bool>,
    pub confidential_key: String,
    pub unconfidential: String,
    pub confidential: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdkeypath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdseedid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdmasterfingerprint: Option<String>,
    #[serde(default)]
    pub labels: Vec<AddressLabel>,
}

/// `getbalance` answers with a per-asset map, or a bare number when an asset
/// label was given.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum BalanceReply {
    PerAsset(Balance),
    Single(f64),
}

impl BalanceReply {
    pub(crate) fn into_balance(self, assetlabel: Option<&str>) -> Balance {
        match self {
            Self::PerAsset(balance) => balance,
            Self::Single(amount) => {
                let label = assetlabel.unwrap_or(DEFAULT_ASSET_LABEL).to_string();
                Balance::from([(label, amount)])
            }
        }
    }
}

/// Label of the chain's policy asset.
pub const DEFAULT_ASSET_LABEL: &str = "bitcoin";
