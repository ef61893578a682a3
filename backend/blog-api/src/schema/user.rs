//! User schema and resolvers

use async_graphql::{Context, InputObject, Object, Result as GraphQLResult, ID};
use blog_store::{NewUser, UserPatch};
use tracing::info;

use super::comment::Comment;
use super::post::Post;
use super::{shared_store, DeleteAllOutput};
use crate::error::IntoGraphQL;

pub struct User(pub blog_store::User);

impl From<blog_store::User> for User {
    fn from(user: blog_store::User) -> Self {
        User(user)
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn full_name(&self) -> &str {
        &self.0.full_name
    }

    async fn age(&self) -> i32 {
        self.0.age
    }

    /// Posts written by this user, oldest first.
    async fn posts(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Post>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store
            .posts_of_user(&self.0.id)
            .into_iter()
            .cloned()
            .map(Post::from)
            .collect())
    }

    /// Comments written by this user, oldest first.
    async fn comments(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Comment>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store
            .comments_of_user(&self.0.id)
            .into_iter()
            .cloned()
            .map(Comment::from)
            .collect())
    }
}

#[derive(InputObject)]
pub struct CreateUserInput {
    pub full_name: String,
    pub age: i32,
}

impl From<CreateUserInput> for NewUser {
    fn from(input: CreateUserInput) -> Self {
        NewUser {
            full_name: input.full_name,
            age: input.age,
        }
    }
}

#[derive(InputObject)]
pub struct UpdateUserInput {
    pub full_name: Option<String>,
    pub age: Option<i32>,
}

impl From<UpdateUserInput> for UserPatch {
    fn from(input: UpdateUserInput) -> Self {
        UserPatch {
            full_name: input.full_name,
            age: input.age,
        }
    }
}

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn users(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<User>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.users().iter().cloned().map(User::from).collect())
    }

    async fn user(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<User> {
        let store = shared_store(ctx)?.read().await;
        let user = store.user(&id).into_graphql()?;
        Ok(User(user.clone()))
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(&self, ctx: &Context<'_>, data: CreateUserInput) -> GraphQLResult<User> {
        let user = shared_store(ctx)?.write().await.create_user(data.into());
        info!(user_id = %user.id, "User created");
        Ok(User(user))
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateUserInput,
    ) -> GraphQLResult<User> {
        let user = shared_store(ctx)?
            .write()
            .await
            .update_user(&id, data.into())
            .into_graphql()?;
        info!(user_id = %user.id, "User updated");
        Ok(User(user))
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<User> {
        let user = shared_store(ctx)?
            .write()
            .await
            .delete_user(&id)
            .into_graphql()?;
        info!(user_id = %user.id, "User deleted");
        Ok(User(user))
    }

    async fn delete_all_users(&self, ctx: &Context<'_>) -> GraphQLResult<DeleteAllOutput> {
        let count = shared_store(ctx)?.write().await.delete_all_users();
        info!(count, "All users deleted");
        Ok(count.into())
    }
}
