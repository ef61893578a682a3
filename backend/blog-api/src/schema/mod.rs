//! GraphQL schema over the in-memory store

pub mod comment;
pub mod post;
pub mod user;

use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, MergedObject, Result as GraphQLResult, Schema, SimpleObject,
};
use blog_store::Store;
use tokio::sync::RwLock;

use crate::config::GraphQLConfig;

/// Store handle shared by every worker. Queries take the read lock,
/// mutations the write lock, one store call per acquisition.
pub type SharedStore = Arc<RwLock<Store>>;

pub fn shared(store: Store) -> SharedStore {
    Arc::new(RwLock::new(store))
}

/// Root query object
#[derive(MergedObject, Default)]
pub struct QueryRoot(user::UserQuery, post::PostQuery, comment::CommentQuery);

/// Root mutation object
#[derive(MergedObject, Default)]
pub struct MutationRoot(
    user::UserMutation,
    post::PostMutation,
    comment::CommentMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Result of the `deleteAll*` mutations.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct DeleteAllOutput {
    pub count: i32,
}

impl From<usize> for DeleteAllOutput {
    fn from(count: usize) -> Self {
        Self {
            count: i32::try_from(count).unwrap_or(i32::MAX),
        }
    }
}

pub fn build_schema(store: SharedStore, config: &GraphQLConfig) -> AppSchema {
    let builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(store)
    .limit_depth(config.max_depth)
    .limit_complexity(config.max_complexity);

    if config.introspection {
        builder.finish()
    } else {
        builder.disable_introspection().finish()
    }
}

pub(crate) fn shared_store<'a>(ctx: &Context<'a>) -> GraphQLResult<&'a SharedStore> {
    ctx.data::<SharedStore>()
        .map_err(|_| "Store not available".into())
}
