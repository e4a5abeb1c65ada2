use crate::SubgraphError;
use gelato_types::{OrderStatus, StopLimitOrder};
use serde::{Deserialize, Serialize};

/// Fields requested for every order.
const ORDER_FIELDS: &str = "id owner inputToken outputToken minReturn maxReturn \
    adjustedMinReturn module witness secret inputAmount vault bought auxData status \
    isExpired createdTxHash executedTxHash cancelledTxHash blockNumber createdAt updatedAt \
    updatedAtBlock updatedAtBlockHash data inputData handler";

/// Maximum number of orders returned by one query.
pub const PAGE_SIZE: u32 = 1000;

/// Variables of an order query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderVariables {
    /// Lower-cased owner address.
    pub owner: String,
    /// Lower-cased module address.
    pub module: String,
    /// Status filter, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// A GraphQL POST body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphqlRequest<V> {
    /// The query document.
    pub query: String,
    /// The query variables.
    pub variables: V,
}

impl GraphqlRequest<OrderVariables> {
    /// Build the orders query for an owner and module, optionally filtered
    /// by status.
    pub fn orders(owner: String, module: String, status: Option<OrderStatus>) -> Self {
        let query = match status {
            Some(_) => format!(
                "query getOrders($owner: String, $module: String, $status: String) {{ \
                 orders(first: {PAGE_SIZE}, orderBy: updatedAtBlock, orderDirection: desc, \
                 where: {{ owner: $owner, module: $module, status: $status }}) {{ {ORDER_FIELDS} }} }}"
            ),
            None => format!(
                "query getOrders($owner: String, $module: String) {{ \
                 orders(first: {PAGE_SIZE}, orderBy: updatedAtBlock, orderDirection: desc, \
                 where: {{ owner: $owner, module: $module }}) {{ {ORDER_FIELDS} }} }}"
            ),
        };
        Self { query, variables: OrderVariables { owner, module, status } }
    }
}

/// A single GraphQL error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphqlError {
    /// Human-readable message.
    pub message: String,
}

/// A GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    /// Query result, absent on failure.
    pub data: Option<T>,
    /// Errors, if any.
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Unwrap the data, failing if the response carries any error.
    pub fn into_result(self) -> Result<T, SubgraphError> {
        if !self.errors.is_empty() {
            return Err(SubgraphError::Graphql(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(SubgraphError::NoData)
    }
}

/// The `data` of an orders query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrdersData {
    /// The matching orders.
    pub orders: Vec<StopLimitOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_is_optional() {
        let req = GraphqlRequest::orders("0xab".into(), "0xcd".into(), Some(OrderStatus::Open));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["variables"]["status"], "open");
        assert!(req.query.contains("status: $status"));

        let req = GraphqlRequest::orders("0xab".into(), "0xcd".into(), None);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["variables"].get("status").is_none());
        assert!(!req.query.contains("$status"));
    }

    #[test]
    fn errors_take_precedence() {
        let resp: GraphqlResponse<OrdersData> = serde_json::from_str(
            r#"{"data":{"orders":[]},"errors":[{"message":"a"},{"message":"b"}]}"#,
        )
        .unwrap();
        let err = resp.into_result().unwrap_err();
        assert!(matches!(&err, SubgraphError::Graphql(msgs) if msgs.len() == 2));
        assert_eq!(err.to_string(), "subgraph query failed: a; b");

        let resp: GraphqlResponse<OrdersData> = serde_json::from_str("{}").unwrap();
        assert!(matches!(resp.into_result(), Err(SubgraphError::NoData)));
    }
}
