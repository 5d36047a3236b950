use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::application::json_rpc::core::api::args::Arg;
use crate::application::json_rpc::core::api::client::transport::Transport;
use crate::application::json_rpc::core::api::dispatch;
use crate::application::json_rpc::core::api::ops;
use crate::application::json_rpc::core::api::ops::MethodDescriptor;
use crate::application::json_rpc::core::error::RpcResult;
use crate::application::json_rpc::core::model::block::*;
use crate::application::json_rpc::core::model::common::*;
use crate::application::json_rpc::core::model::raw_transaction::*;
use crate::application::json_rpc::core::model::wallet::*;

/// Typed calls to the daemon.
///
/// Optional parameters are `Option`s; `None` means "not provided" and is
/// either left off the end of the call or replaced by the daemon's default
/// when a later argument is given. Implemented for every [`Transport`].
#[async_trait]
pub trait ElementsApi: Sync {
    async fn invoke_method<R>(&self, method: &MethodDescriptor, args: Vec<Arg>) -> RpcResult<R>
    where
        R: DeserializeOwned + Send;

    async fn list_since_block(
        &self,
        blockhash: &str,
        target_confirmations: Option<u32>,
        include_watchonly: Option<bool>,
        include_removed: Option<bool>,
    ) -> RpcResult<ListSinceBlockResult> {
        let args = vec![
            Arg::new(blockhash)?,
            Arg::optional(target_confirmations)?,
            Arg::optional(include_watchonly)?,
            Arg::optional(include_removed)?,
        ];
        self.invoke_method(&ops::LIST_SINCE_BLOCK, args).await
    }

    async fn get_raw_transaction_hex(
        &self,
        txid: &str,
        blockhash: Option<&str>,
    ) -> RpcResult<String> {
        let args = vec![Arg::new(txid)?, Arg::new(&false)?, Arg::optional(blockhash)?];
        self.invoke_method(&ops::GET_RAW_TRANSACTION, args).await
    }

    async fn get_raw_transaction_details(
        &self,
        txid: &str,
        blockhash: Option<&str>,
    ) -> RpcResult<BlockTransaction> {
        let args = vec![Arg::new(txid)?, Arg::new(&true)?, Arg::optional(blockhash)?];
        self.invoke_method(&ops::GET_RAW_TRANSACTION, args).await
    }

    #[allow(clippy::too_many_arguments)]
    async fn raw_blind_raw_transaction(
        &self,
        hexstring: &str,
        inputamountblinders: &[String],
        inputamounts: &[AmountArg],
        inputassets: &[String],
        inputassetblinders: &[String],
        totalblinder: Option<&str>,
        ignoreblindfail: Option<bool>,
    ) -> RpcResult<String> {
        let args = vec![
            Arg::new(hexstring)?,
            Arg::new(inputamountblinders)?,
            Arg::new(inputamounts)?,
            Arg::new(inputassets)?,
            Arg::new(inputassetblinders)?,
            Arg::optional(totalblinder)?,
            Arg::optional(ignoreblindfail)?,
        ];
        self.invoke_method(&ops::RAW_BLIND_RAW_TRANSACTION, args).await
    }

    async fn sign_raw_transaction_with_wallet(
        &self,
        hexstring: &str,
        prevtxs: Option<&[SrtwwPrevTx]>,
        sighashtype: Option<SighashType>,
    ) -> RpcResult<SignRawTransactionWithWalletResult> {
        let args = vec![
            Arg::new(hexstring)?,
            Arg::optional(prevtxs)?,
            Arg::optional(sighashtype)?,
        ];
        self.invoke_method(&ops::SIGN_RAW_TRANSACTION_WITH_WALLET, args)
            .await
    }

    /// Broadcasts a signed transaction and returns its txid.
    async fn send_raw_transaction(
        &self,
        hexstring: &str,
        allowhighfees: Option<bool>,
    ) -> RpcResult<String> {
        let args = vec![Arg::new(hexstring)?, Arg::optional(allowhighfees)?];
        self.invoke_method(&ops::SEND_RAW_TRANSACTION, args).await
    }

    #[allow(clippy::too_many_arguments)]
    async fn send_to_address(
        &self,
        address: &str,
        amount: AmountArg,
        comment: Option<&str>,
        comment_to: Option<&str>,
        subtractfeefromamount: Option<bool>,
        replaceable: Option<bool>,
        conf_target: Option<u32>,
        estimate_mode: Option<EstimateMode>,
        assetlabel: Option<&str>,
        ignoreblindfail: Option<bool>,
    ) -> RpcResult<String> {
        let args = vec![
            Arg::new(address)?,
            Arg::new(&amount)?,
            Arg::optional(comment)?,
            Arg::optional(comment_to)?,
            Arg::optional(subtractfeefromamount)?,
            Arg::optional(replaceable)?,
            Arg::optional(conf_target)?,
            Arg::optional(estimate_mode)?,
            Arg::optional(assetlabel)?,
            Arg::optional(ignoreblindfail)?,
        ];
        self.invoke_method(&ops::SEND_TO_ADDRESS, args).await
    }

    async fn blind_raw_transaction(
        &self,
        hexstring: &str,
        ignoreblindfail: Option<bool>,
        asset_commitments: Option<&[String]>,
        blind_issuances: Option<bool>,
        totalblinder: Option<&str>,
    ) -> RpcResult<String> {
        let args = vec![
            Arg::new(hexstring)?,
            Arg::optional(ignoreblindfail)?,
            Arg::optional(asset_commitments)?,
            Arg::optional(blind_issuances)?,
            Arg::optional(totalblinder)?,
        ];
        self.invoke_method(&ops::BLIND_RAW_TRANSACTION, args).await
    }

    async fn unblind_raw_transaction(&self, hex: &str) -> RpcResult<UnblindRawTransactionResult> {
        self.invoke_method(&ops::UNBLIND_RAW_TRANSACTION, vec![Arg::new(hex)?])
            .await
    }

    async fn fund_raw_transaction(
        &self,
        hexstring: &str,
        options: Option<&FundRawTransactionOptions>,
        iswitness: Option<bool>,
    ) -> RpcResult<FundRawTransactionResult> {
        let args = vec![
            Arg::new(hexstring)?,
            Arg::optional(options)?,
            Arg::optional(iswitness)?,
        ];
        self.invoke_method(&ops::FUND_RAW_TRANSACTION, args).await
    }

    async fn create_raw_transaction(
        &self,
        inputs: &[CrtInput],
        outputs: &[CrtOutput],
        locktime: Option<u32>,
        replaceable: Option<bool>,
        output_assets: Option<&CrtOutputAssets>,
    ) -> RpcResult<String> {
        let args = vec![
            Arg::new(inputs)?,
            Arg::new(outputs)?,
            Arg::optional(locktime)?,
            Arg::optional(replaceable)?,
            Arg::optional(output_assets)?,
        ];
        self.invoke_method(&ops::CREATE_RAW_TRANSACTION, args).await
    }

    async fn decode_raw_transaction(
        &self,
        hexstring: &str,
        iswitness: Option<bool>,
    ) -> RpcResult<Transaction> {
        let args = vec![Arg::new(hexstring)?, Arg::optional(iswitness)?];
        self.invoke_method(&ops::DECODE_RAW_TRANSACTION, args).await
    }

    /// Wallet balance per asset.
    ///
    /// With an `assetlabel` the daemon returns a bare amount; it is reported
    /// as a one-entry map under that label.
    async fn get_balance(
        &self,
        dummy: Option<&str>,
        minconf: Option<u32>,
        include_watchonly: Option<bool>,
        assetlabel: Option<&str>,
    ) -> RpcResult<Balance> {
        let args = vec![
            Arg::optional(dummy)?,
            Arg::optional(minconf)?,
            Arg::optional(include_watchonly)?,
            Arg::optional(assetlabel)?,
        ];
        let reply: BalanceReply = self.invoke_method(&ops::GET_BALANCE, args).await?;
        Ok(reply.into_balance(assetlabel))
    }

    async fn get_unconfirmed_balance(&self) -> RpcResult<Balance> {
        self.invoke_method(&ops::GET_UNCONFIRMED_BALANCE, vec![])
            .await
    }

    async fn get_new_address(
        &self,
        label: Option<&str>,
        address_type: Option<AddressType>,
    ) -> RpcResult<String> {
        let args = vec![Arg::optional(label)?, Arg::optional(address_type)?];
        self.invoke_method(&ops::GET_NEW_ADDRESS, args).await
    }

    async fn get_transaction(
        &self,
        txid: &str,
        include_watchonly: Option<bool>,
    ) -> RpcResult<GetTransactionResult> {
        let args = vec![Arg::new(txid)?, Arg::optional(include_watchonly)?];
        self.invoke_method(&ops::GET_TRANSACTION, args).await
    }

    async fn get_block_hash(&self, height: u64) -> RpcResult<String> {
        self.invoke_method(&ops::GET_BLOCK_HASH, vec![Arg::new(&height)?])
            .await
    }

    /// Serialized block (verbosity 0).
    async fn get_block_hex(&self, blockhash: &str) -> RpcResult<String> {
        let args = vec![Arg::new(blockhash)?, Arg::new(&0)?];
        self.invoke_method(&ops::GET_BLOCK, args).await
    }

    /// Decoded block header and txids (verbosity 1).
    async fn get_block(&self, blockhash: &str) -> RpcResult<BlockInfo> {
        let args = vec![Arg::new(blockhash)?, Arg::new(&1)?];
        self.invoke_method(&ops::GET_BLOCK, args).await
    }

    async fn get_block_count(&self) -> RpcResult<u64> {
        self.invoke_method(&ops::GET_BLOCK_COUNT, vec![]).await
    }

    async fn list_unspent(
        &self,
        minconf: Option<u32>,
        maxconf: Option<u32>,
        addresses: Option<&[String]>,
        include_unsafe: Option<bool>,
        query_options: Option<&ListUnspentQueryOptions>,
    ) -> RpcResult<Vec<Utxo>> {
        let args = vec![
            Arg::optional(minconf)?,
            Arg::optional(maxconf)?,
            Arg::optional(addresses)?,
            Arg::optional(include_unsafe)?,
            Arg::optional(query_options)?,
        ];
        self.invoke_method(&ops::LIST_UNSPENT, args).await
    }

    async fn get_address_info(&self, address: &str) -> RpcResult<AddressInfo> {
        self.invoke_method(&ops::GET_ADDRESS_INFO, vec![Arg::new(address)?])
            .await
    }

    async fn get_raw_change_address(&self, address_type: Option<AddressType>) -> RpcResult<String> {
        self.invoke_method(&ops::GET_RAW_CHANGE_ADDRESS, vec![Arg::optional(address_type)?])
            .await
    }

    /// `unlock == false` locks the given outputs; `true` unlocks them, or
    /// every locked output when `transactions` is `None`.
    async fn lock_unspent(
        &self,
        unlock: bool,
        transactions: Option<&[Outpoint]>,
    ) -> RpcResult<bool> {
        let args = vec![Arg::new(&unlock)?, Arg::optional(transactions)?];
        self.invoke_method(&ops::LOCK_UNSPENT, args).await
    }

    async fn list_lock_unspent(&self) -> RpcResult<Vec<Outpoint>> {
        self.invoke_method(&ops::LIST_LOCK_UNSPENT, vec![]).await
    }

    async fn get_new_block_hex(
        &self,
        min_tx_age: Option<u32>,
        proposed_parameters: Option<&DynamicFederationParameters>,
    ) -> RpcResult<String> {
        let args = vec![
            Arg::optional(min_tx_age)?,
            Arg::optional(proposed_parameters)?,
        ];
        self.invoke_method(&ops::GET_NEW_BLOCK_HEX, args).await
    }

    /// Checks a candidate block; the daemon answers `null` when it is valid.
    async fn test_proposed_block(
        &self,
        blockhex: &str,
        acceptnonstd: Option<bool>,
    ) -> RpcResult<()> {
        let args = vec![Arg::new(blockhex)?, Arg::optional(acceptnonstd)?];
        self.invoke_method(&ops::TEST_PROPOSED_BLOCK, args).await
    }

    async fn sign_block(
        &self,
        blockhex: &str,
        witness_script: Option<&str>,
    ) -> RpcResult<Vec<BlockSignatureEntry>> {
        let args = vec![Arg::new(blockhex)?, Arg::optional(witness_script)?];
        self.invoke_method(&ops::SIGN_BLOCK, args).await
    }

    async fn combine_block_sigs(
        &self,
        blockhex: &str,
        signatures: &[BlockSignatureEntry],
        witness_script: Option<&str>,
    ) -> RpcResult<SignatureResult> {
        let args = vec![
            Arg::new(blockhex)?,
            Arg::new(signatures)?,
            Arg::optional(witness_script)?,
        ];
        self.invoke_method(&ops::COMBINE_BLOCK_SIGS, args).await
    }

    async fn submit_block(&self, hexdata: &str) -> RpcResult<SubmitBlockResult> {
        self.invoke_method(&ops::SUBMIT_BLOCK, vec![Arg::new(hexdata)?])
            .await
    }

    async fn issue_asset(
        &self,
        assetamount: AmountArg,
        tokenamount: AmountArg,
        blind: Option<bool>,
    ) -> RpcResult<IssueAssetResult> {
        let args = vec![
            Arg::new(&assetamount)?,
            Arg::new(&tokenamount)?,
            Arg::optional(blind)?,
        ];
        self.invoke_method(&ops::ISSUE_ASSET, args).await
    }

    async fn reissue_asset(
        &self,
        asset: &str,
        assetamount: AmountArg,
    ) -> RpcResult<ReissueAssetResult> {
        let args = vec![Arg::new(asset)?, Arg::new(&assetamount)?];
        self.invoke_method(&ops::REISSUE_ASSET, args).await
    }
}

#[async_trait]
impl<T> ElementsApi for T
where
    T: Transport + ?Sized,
{
    async fn invoke_method<R>(&self, method: &MethodDescriptor, args: Vec<Arg>) -> RpcResult<R>
    where
        R: DeserializeOwned + Send,
    {
        dispatch::invoke(self, method, args).await
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use macro_rules_attr::apply;
    use serde_json::json;
    use serde_json::Value;

    use super::*;
    use crate::application::json_rpc::core::error::RpcError;
    use crate::tests::shared::mock_transport::MockTransport;
    use crate::tests::shared_tokio_runtime;
    use crate::units::btc_balance_to_sat;

    #[apply(shared_tokio_runtime)]
    async fn list_since_block_sends_only_the_hash() {
        let transport = MockTransport::replying(json!({
            "transactions": [],
            "removed": [],
            "lastblock": "ff"
        }));

        let result = transport
            .list_since_block("abcd", None, None, None)
            .await
            .unwrap();

        assert_eq!(result.lastblock, "ff");
        assert_eq!(
            transport.calls(),
            vec![("listsinceblock".to_string(), vec![json!("abcd")])]
        );
    }

    #[apply(shared_tokio_runtime)]
    async fn list_since_block_fills_skipped_defaults() {
        let transport = MockTransport::replying(json!({"transactions": [], "lastblock": "ff"}));

        transport
            .list_since_block("abcd", None, None, Some(false))
            .await
            .unwrap();

        let (_, params) = transport.last_call().unwrap();
        assert_eq!(params, vec![json!("abcd"), json!(1), json!(false), json!(false)]);
    }

    #[apply(shared_tokio_runtime)]
    async fn get_balance_end_to_end() {
        let transport = MockTransport::replying(json!({"bitcoin": 1.5}));

        let balance = transport.get_balance(None, None, None, None).await.unwrap();

        assert_eq!(balance, Balance::from([("bitcoin".to_string(), 1.5)]));
        assert_eq!(
            btc_balance_to_sat(&balance),
            Balance::from([("bitcoin".to_string(), 150_000_000.0)])
        );
        assert_eq!(transport.last_call().unwrap().1, Vec::<Value>::new());
    }

    #[apply(shared_tokio_runtime)]
    async fn get_balance_with_label_is_normalized() {
        let transport = MockTransport::replying(json!(0.25));

        let balance = transport
            .get_balance(None, Some(1), None, Some("L-BTC"))
            .await
            .unwrap();

        assert_eq!(balance, Balance::from([("L-BTC".to_string(), 0.25)]));
        let (_, params) = transport.last_call().unwrap();
        assert_eq!(params, vec![json!("*"), json!(1), json!(false), json!("L-BTC")]);
    }

    #[apply(shared_tokio_runtime)]
    async fn get_address_info_reports_daemon_error() {
        let transport = MockTransport::replying(json!({"code": -5, "message": "Invalid address"}));

        let err = transport.get_address_info("bad").await.unwrap_err();

        match err {
            RpcError::Application(err) => {
                assert_eq!(err.code, -5);
                assert_eq!(err.message, "Invalid address");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[apply(shared_tokio_runtime)]
    async fn raw_transaction_modes_pin_verbosity() {
        let transport = MockTransport::replying(json!("0200"));

        transport.get_raw_transaction_hex("aa", None).await.unwrap();
        assert_eq!(transport.last_call().unwrap().1, vec![json!("aa"), json!(false)]);

        let _ = transport.get_raw_transaction_details("aa", Some("bb")).await;
        assert_eq!(
            transport.last_call().unwrap().1,
            vec![json!("aa"), json!(true), json!("bb")]
        );
    }

    #[apply(shared_tokio_runtime)]
    async fn block_modes_pin_verbosity() {
        let transport = MockTransport::replying(json!("00"));

        let hex = transport.get_block_hex("hash").await.unwrap();
        assert_eq!(hex, "00");
        assert_eq!(transport.last_call().unwrap().1, vec![json!("hash"), json!(0)]);
    }

    #[apply(shared_tokio_runtime)]
    async fn submit_block_accepts_null() {
        let transport = MockTransport::replying(Value::Null);
        assert_eq!(transport.submit_block("00").await.unwrap(), None);

        let transport = MockTransport::replying(json!("rejected"));
        assert_eq!(
            transport.submit_block("00").await.unwrap(),
            Some("rejected".to_string())
        );
    }

    #[apply(shared_tokio_runtime)]
    async fn federated_signing_flow() {
        let transport = MockTransport::scripted([
            ("getnewblockhex", json!("b10c")),
            ("testproposedblock", Value::Null),
            ("signblock", json!([{"pubkey": "02aa", "sig": "3044"}])),
            ("combineblocksigs", json!({"hex": "b10c5d", "complete": true})),
            ("submitblock", Value::Null),
        ]);

        let block = transport.get_new_block_hex(None, None).await.unwrap();
        transport.test_proposed_block(&block, None).await.unwrap();
        let sigs = transport.sign_block(&block, None).await.unwrap();
        let combined = transport
            .combine_block_sigs(&block, &sigs, None)
            .await
            .unwrap();
        assert!(combined.complete);
        assert_eq!(transport.submit_block(&combined.hex).await.unwrap(), None);

        let methods: Vec<_> = transport.calls().into_iter().map(|(m, _)| m).collect();
        assert_eq!(
            methods,
            vec![
                "getnewblockhex",
                "testproposedblock",
                "signblock",
                "combineblocksigs",
                "submitblock"
            ]
        );
        assert_eq!(
            transport.calls()[3].1,
            vec![json!("b10c"), json!([{"pubkey": "02aa", "sig": "3044"}])]
        );
    }

    #[apply(shared_tokio_runtime)]
    async fn send_to_address_positions_asset_label() {
        let transport = MockTransport::replying(json!("txid"));

        transport
            .send_to_address(
                "ert1q",
                AmountArg::from(0.1),
                None,
                None,
                None,
                None,
                None,
                None,
                Some("bitcoin"),
                None,
            )
            .await
            .unwrap();

        let (_, params) = transport.last_call().unwrap();
        assert_eq!(
            params,
            vec![
                json!("ert1q"),
                json!(0.1),
                json!(""),
                json!(""),
                json!(false),
                Value::Null,
                Value::Null,
                json!("UNSET"),
                json!("bitcoin"),
            ]
        );
    }

    #[apply(shared_tokio_runtime)]
    async fn create_raw_transaction_serializes_outputs() {
        let transport = MockTransport::replying(json!("0200"));
        let inputs = vec![CrtInput {
            txid: "aa".to_string(),
            vout: 1,
            sequence: None,
        }];
        let outputs = vec![CrtOutput::to_address("ert1q", 0.5), CrtOutput::fee(0.001)];

        transport
            .create_raw_transaction(&inputs, &outputs, None, None, None)
            .await
            .unwrap();

        let (method, params) = transport.last_call().unwrap();
        assert_eq!(method, "createrawtransaction");
        assert_eq!(
            params,
            vec![
                json!([{"txid": "aa", "vout": 1}]),
                json!([{"ert1q": 0.5}, {"fee": 0.001}])
            ]
        );
    }

    #[apply(shared_tokio_runtime)]
    async fn lock_unspent_sends_outpoints() {
        let transport = MockTransport::replying(json!(true));
        let outpoints = [Outpoint::new("aa", 0)];

        assert!(transport.lock_unspent(false, Some(&outpoints[..])).await.unwrap());
        assert_eq!(
            transport.last_call().unwrap().1,
            vec![json!(false), json!([{"txid": "aa", "vout": 0}])]
        );
    }
}
