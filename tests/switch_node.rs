mod common;

use std::sync::Arc;

use common::logging;
use common::mock_elementsd::MockElementsd;
use elements_rpc::application::json_rpc::binding::ElementsClient;
use elements_rpc::application::json_rpc::core::api::rpc::ElementsApi;

/// test: switching nodes redirects subsequent calls
///
/// scenario:
/// 1. the client is bound to node A (height 10).
/// 2. the client is switched to node B (height 20).
/// 3. later calls reach only node B.
#[tokio::test(flavor = "multi_thread")]
async fn switch_node_redirects_calls() -> anyhow::Result<()> {
    logging::tracing_logger();
    let node_a = MockElementsd::start(10).await?;
    let node_b = MockElementsd::start(20).await?;
    let client = ElementsClient::connect(&node_a.rpc_host());

    assert_eq!(client.get_block_count().await?, 10);

    client.switch_node(&node_b.configuration()).await;
    assert_eq!(client.endpoint().await, node_b.rpc_host().url());
    assert_eq!(client.get_block_count().await?, 20);

    assert_eq!(node_a.requests().len(), 1);
    assert_eq!(node_b.requests().len(), 1);
    Ok(())
}

/// test: calls racing a switch each reach exactly one node
#[tokio::test(flavor = "multi_thread")]
async fn calls_during_a_switch_reach_one_node() -> anyhow::Result<()> {
    logging::tracing_logger();
    let node_a = MockElementsd::start(10).await?;
    let node_b = MockElementsd::start(20).await?;
    let client = Arc::new(ElementsClient::connect(&node_a.rpc_host()));

    let calls: Vec<_> = (0..32)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_block_count().await })
        })
        .collect();
    client.switch_node(&node_b.configuration()).await;

    for call in calls {
        let height = call.await??;
        assert!(height == 10 || height == 20, "height {height}");
    }
    assert_eq!(node_a.requests().len() + node_b.requests().len(), 32);
    assert_eq!(client.get_block_count().await?, 20);
    Ok(())
}
