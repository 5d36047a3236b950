use serde::Deserialize;
use serde::Serialize;

/// Dynamic federation parameters carried in a block header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicFederationParameters {
    /// Hex-encoded block signing script.
    pub signblockscript: String,
    /// Witness bytes allowed in the block signature of a dynamic federation block.
    pub max_block_witness: u32,
    /// Hex-encoded fedpegscript, interpreted as a v0 segwit witnessScript.
    pub fedpegscript: String,
    /// Extra header fields; only used for PAK enforcement.
    pub extension_space: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicParameters {
    pub current: DynamicFederationParameters,
    pub proposed: DynamicFederationParameters,
}

/// `getblock` with verbosity 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub hash: String,
    pub confirmations: i64,
    pub size: u64,
    pub strippedsize: u64,
    pub weight: u64,
    pub height: u64,
    pub version: u32,
    #[serde(rename = "versionHex")]
    pub version_hex: String,
    pub merkleroot: String,
    pub tx: Vec<String>,
    pub time: u64,
    pub mediantime: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<f64>,
    pub chainwork: String,
    #[serde(rename = "nTx")]
    pub n_tx: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signblock_witness_asm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signblock_witness_hex: Option<String>,
    /// Only present on dynamic federation blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_parameters: Option<DynamicParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previousblockhash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nextblockhash: Option<String>,
}

/// One federation member's signature over a candidate block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSignatureEntry {
    pub pubkey: String,
    pub sig: String,
}

/// `submitblock` answers `null` on acceptance and a reason string otherwise.
pub type SubmitBlockResult = Option<String>;
