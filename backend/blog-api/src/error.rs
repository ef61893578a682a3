//! Translation of store errors into GraphQL errors.

use async_graphql::{Error as GraphQLError, ErrorExtensions, Result as GraphQLResult};
use blog_store::{StoreError, StoreResult};

/// Build the client-facing error for a store failure.
///
/// The message is the store's own; extensions carry a stable `code` plus the
/// entity kind and id so clients need not parse the message.
pub fn graphql_error(err: &StoreError) -> GraphQLError {
    match err {
        StoreError::NotFound { kind, id } => GraphQLError::new(err.to_string()).extend_with(
            |_, ext| {
                ext.set("code", "NOT_FOUND");
                ext.set("kind", kind.as_str());
                ext.set("id", id.as_str());
            },
        ),
    }
}

pub trait IntoGraphQL<T> {
    fn into_graphql(self) -> GraphQLResult<T>;
}

impl<T> IntoGraphQL<T> for StoreResult<T> {
    fn into_graphql(self) -> GraphQLResult<T> {
        self.map_err(|e| graphql_error(&e))
    }
}
