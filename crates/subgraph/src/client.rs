use crate::{
    types::{GraphqlRequest, GraphqlResponse, OrdersData},
    OrderHistory, Result,
};
use alloy::primitives::Address;
use gelato_constants::GelatoConstants;
use gelato_types::{OrderStatus, StopLimitOrder};
use tracing::{debug, instrument, warn};

/// Gelato limit-order subgraph client.
///
/// Sends GraphQL queries for the orders of one module to a subgraph URL.
#[derive(Debug, Clone)]
pub struct SubgraphClient {
    /// The URL of the subgraph.
    url: reqwest::Url,
    /// The reqwest client used to send requests.
    client: reqwest::Client,
    /// The order module whose orders are queried.
    module: Address,
}

impl SubgraphClient {
    /// Create a new client with the given URL and reqwest client.
    pub const fn new_with_client(
        url: reqwest::Url,
        client: reqwest::Client,
        module: Address,
    ) -> Self {
        Self { url, client, module }
    }

    /// Instantiate a new client with the given URL and a new reqwest client.
    pub fn new(url: reqwest::Url, module: Address) -> Self {
        Self::new_with_client(url, reqwest::Client::new(), module)
    }

    /// Create a new client given a string URL.
    pub fn new_from_string(url: &str, module: Address) -> Result<Self> {
        let url = reqwest::Url::parse(url)?;
        Ok(Self::new(url, module))
    }

    /// Create a new client for the subgraph of a chain.
    pub fn from_constants(constants: &GelatoConstants, module: Address) -> Result<Self> {
        Self::new_from_string(constants.subgraph_url(), module)
    }

    /// Get the subgraph URL.
    pub const fn url(&self) -> &reqwest::Url {
        &self.url
    }

    /// Get the client used to send requests.
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Get the queried module.
    pub const fn module(&self) -> Address {
        self.module
    }

    /// Query the orders of `owner`, optionally filtered by status.
    #[instrument(skip(self), fields(module = %self.module))]
    pub async fn orders(
        &self,
        owner: Address,
        status: Option<OrderStatus>,
    ) -> Result<Vec<StopLimitOrder>> {
        let request =
            GraphqlRequest::orders(format!("{owner:#x}"), format!("{:#x}", self.module), status);

        let response: GraphqlResponse<OrdersData> = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .inspect_err(|e| warn!(%e, "Failed to query subgraph"))?
            .error_for_status()?
            .json()
            .await
            .inspect_err(|e| warn!(%e, "Failed to parse response from subgraph"))?;

        let orders = response
            .into_result()
            .inspect_err(|e| warn!(%e, "Subgraph returned errors"))?
            .orders;
        debug!(count = orders.len(), "fetched orders");
        Ok(orders)
    }

    /// Query the open orders of `owner`, including expired ones.
    pub async fn open_orders(&self, owner: Address) -> Result<Vec<StopLimitOrder>> {
        self.orders(owner, Some(OrderStatus::Open)).await
    }

    /// Query the cancelled orders of `owner`.
    pub async fn cancelled_orders(&self, owner: Address) -> Result<Vec<StopLimitOrder>> {
        self.orders(owner, Some(OrderStatus::Cancelled)).await
    }

    /// Query the executed orders of `owner`.
    pub async fn executed_orders(&self, owner: Address) -> Result<Vec<StopLimitOrder>> {
        self.orders(owner, Some(OrderStatus::Executed)).await
    }

    /// Query every order of `owner`.
    pub async fn all_orders(&self, owner: Address) -> Result<Vec<StopLimitOrder>> {
        self.orders(owner, None).await
    }

    /// Query every order of `owner` and classify it.
    pub async fn history(&self, owner: Address) -> Result<OrderHistory> {
        self.all_orders(owner).await.map(OrderHistory::from_orders)
    }
}
