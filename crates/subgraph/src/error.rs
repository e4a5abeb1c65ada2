/// Errors returned by the [`SubgraphClient`].
///
/// [`SubgraphClient`]: crate::SubgraphClient
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SubgraphError {
    /// An error occurred while parsing the URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// An error occurred while contacting the subgraph.
    #[error("error contacting subgraph: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The subgraph answered with GraphQL errors.
    #[error("subgraph query failed: {}", .0.join("; "))]
    Graphql(Vec<String>),

    /// The subgraph answered with neither data nor errors.
    #[error("subgraph returned no data")]
    NoData,
}
