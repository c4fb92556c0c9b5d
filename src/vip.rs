//! VIP plan and order endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::protocol::vip as p;

/// Lists the available VIP plans.
pub async fn plans(client: &Client) -> Result<Vec<p::Plan>> {
    client.get("api/vip/plans").await
}

/// Creates an order for the given plan type (e.g. "MONTHLY").
pub async fn create_order(client: &Client, plan_type: &str) -> Result<p::Order> {
    let body = serde_json::json!({ "planType": plan_type });
    client.post("api/vip/create-order", &body).await
}

/// Polls the state of an order.
pub async fn order_status(client: &Client, order_no: &str) -> Result<p::Order> {
    let query = [("orderNo", order_no.to_string())];
    client.get_with_query("api/vip/order-status", &query).await
}

/// Marks an order as paid without going through a payment provider.
/// Available in development deployments only.
pub async fn mock_pay(client: &Client, order_no: &str) -> Result<p::Order> {
    let query = [("orderNo", order_no.to_string())];
    client.post_with_query("api/vip/mock-pay", &query).await
}
