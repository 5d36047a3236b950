use serde_json::Value;

use crate::macros::rpc_method_table;

/// Value the dispatcher substitutes for an unset argument that is followed
/// by a set one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamDefault {
    /// The caller must always supply this argument.
    Required,
    /// Optional without a documented default; sent as `null`.
    Null,
    Bool(bool),
    Int(i64),
    Str(&'static str),
    EmptyArray,
}

impl ParamDefault {
    pub fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }

    /// JSON to place at an interior position the caller left unset.
    pub fn to_value(self) -> Value {
        match self {
            Self::Required | Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(b),
            Self::Int(i) => Value::from(i),
            Self::Str(s) => Value::from(s),
            Self::EmptyArray => Value::Array(vec![]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: ParamDefault,
}

/// Wire name and positional parameters of one daemon method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: &'static str,
    pub params: &'static [ParamSpec],
}

impl MethodDescriptor {
    pub fn required_params(&self) -> usize {
        self.params
            .iter()
            .filter(|p| p.default.is_required())
            .count()
    }

    /// Per-position defaults, in parameter order.
    pub fn defaults(&self) -> Vec<ParamDefault> {
        self.params.iter().map(|p| p.default).collect()
    }
}

/// Finds a method by its wire name.
pub fn lookup(name: &str) -> Option<&'static MethodDescriptor> {
    ALL.iter().copied().find(|m| m.name == name)
}

rpc_method_table! {
    LIST_SINCE_BLOCK => "listsinceblock" (
        blockhash,
        target_confirmations = Int(1),
        include_watchonly = Bool(false),
        include_removed = Bool(true),
    );
    GET_RAW_TRANSACTION => "getrawtransaction" (txid, verbose = Bool(false), blockhash = Null);
    RAW_BLIND_RAW_TRANSACTION => "rawblindrawtransaction" (
        hexstring,
        inputamountblinders,
        inputamounts,
        inputassets,
        inputassetblinders,
        totalblinder = Str(""),
        ignoreblindfail = Bool(true),
    );
    SIGN_RAW_TRANSACTION_WITH_WALLET => "signrawtransactionwithwallet" (
        hexstring,
        prevtxs = EmptyArray,
        sighashtype = Str("ALL"),
    );
    SEND_RAW_TRANSACTION => "sendrawtransaction" (hexstring, allowhighfees = Bool(false));
    SEND_TO_ADDRESS => "sendtoaddress" (
        address,
        amount,
        comment = Str(""),
        comment_to = Str(""),
        subtractfeefromamount = Bool(false),
        replaceable = Null,
        conf_target = Null,
        estimate_mode = Str("UNSET"),
        assetlabel = Null,
        ignoreblindfail = Bool(true),
    );
    BLIND_RAW_TRANSACTION => "blindrawtransaction" (
        hexstring,
        ignoreblindfail = Bool(true),
        asset_commitments = EmptyArray,
        blind_issuances = Bool(true),
        totalblinder = Str(""),
    );
    UNBLIND_RAW_TRANSACTION => "unblindrawtransaction" (hex);
    FUND_RAW_TRANSACTION => "fundrawtransaction" (hexstring, options = Null, iswitness = Null);
    CREATE_RAW_TRANSACTION => "createrawtransaction" (
        inputs,
        outputs,
        locktime = Int(0),
        replaceable = Bool(false),
        output_assets = Null,
    );
    DECODE_RAW_TRANSACTION => "decoderawtransaction" (hexstring, iswitness = Null);
    GET_BALANCE => "getbalance" (
        dummy = Str("*"),
        minconf = Int(0),
        include_watchonly = Bool(false),
        assetlabel = Null,
    );
    GET_UNCONFIRMED_BALANCE => "getunconfirmedbalance" ();
    GET_NEW_ADDRESS => "getnewaddress" (label = Str(""), address_type = Null);
    GET_TRANSACTION => "gettransaction" (txid, include_watchonly = Bool(false));
    GET_BLOCK_HASH => "getblockhash" (height);
    GET_BLOCK => "getblock" (blockhash, verbosity = Int(1));
    GET_BLOCK_COUNT => "getblockcount" ();
    LIST_UNSPENT => "listunspent" (
        minconf = Int(1),
        maxconf = Int(9_999_999),
        addresses = EmptyArray,
        include_unsafe = Bool(true),
        query_options = Null,
    );
    GET_ADDRESS_INFO => "getaddressinfo" (address);
    GET_RAW_CHANGE_ADDRESS => "getrawchangeaddress" (address_type = Null);
    LOCK_UNSPENT => "lockunspent" (unlock, transactions = EmptyArray);
    LIST_LOCK_UNSPENT => "listlockunspent" ();
    GET_NEW_BLOCK_HEX => "getnewblockhex" (min_tx_age = Int(0), proposed_parameters = Null);
    TEST_PROPOSED_BLOCK => "testproposedblock" (blockhex, acceptnonstd = Bool(true));
    SIGN_BLOCK => "signblock" (blockhex, witnessScript = Null);
    /// `witnessScript` is documented as required but the daemon accepts its absence.
    COMBINE_BLOCK_SIGS => "combineblocksigs" (blockhex, signatures, witnessScript = Null);
    SUBMIT_BLOCK => "submitblock" (hexdata);
    ISSUE_ASSET => "issueasset" (assetamount, tokenamount, blind = Bool(true));
    REISSUE_ASSET => "reissueasset" (asset, assetamount);
}
