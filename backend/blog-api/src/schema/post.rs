//! Post schema and resolvers

use async_graphql::{Context, InputObject, Object, Result as GraphQLResult, ID};
use blog_store::{NewPost, PostPatch};
use tracing::info;

use super::comment::Comment;
use super::user::User;
use super::{shared_store, DeleteAllOutput};
use crate::error::IntoGraphQL;

pub struct Post(pub blog_store::Post);

impl From<blog_store::Post> for Post {
    fn from(post: blog_store::Post) -> Self {
        Post(post)
    }
}

#[Object]
impl Post {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    #[graphql(name = "user_id")]
    async fn user_id(&self) -> ID {
        ID(self.0.user_id.clone())
    }

    /// Author of the post. Errors with NOT_FOUND when the author was deleted.
    async fn user(&self, ctx: &Context<'_>) -> GraphQLResult<User> {
        let store = shared_store(ctx)?.read().await;
        let user = store.user_of_post(&self.0).into_graphql()?;
        Ok(User(user.clone()))
    }

    async fn comments(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Comment>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store
            .comments_of_post(&self.0.id)
            .into_iter()
            .cloned()
            .map(Comment::from)
            .collect())
    }
}

#[derive(InputObject)]
pub struct CreatePostInput {
    pub title: String,
    #[graphql(name = "user_id")]
    pub user_id: ID,
}

impl From<CreatePostInput> for NewPost {
    fn from(input: CreatePostInput) -> Self {
        NewPost {
            title: input.title,
            user_id: input.user_id.0,
        }
    }
}

#[derive(InputObject)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    #[graphql(name = "user_id")]
    pub user_id: Option<ID>,
}

impl From<UpdatePostInput> for PostPatch {
    fn from(input: UpdatePostInput) -> Self {
        PostPatch {
            title: input.title,
            user_id: input.user_id.map(|id| id.0),
        }
    }
}

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    async fn posts(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Post>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.posts().iter().cloned().map(Post::from).collect())
    }

    async fn post(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<Post> {
        let store = shared_store(ctx)?.read().await;
        let post = store.post(&id).into_graphql()?;
        Ok(Post(post.clone()))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn create_post(&self, ctx: &Context<'_>, data: CreatePostInput) -> GraphQLResult<Post> {
        let post = shared_store(ctx)?.write().await.create_post(data.into());
        info!(post_id = %post.id, user_id = %post.user_id, "Post created");
        Ok(Post(post))
    }

    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdatePostInput,
    ) -> GraphQLResult<Post> {
        let post = shared_store(ctx)?
            .write()
            .await
            .update_post(&id, data.into())
            .into_graphql()?;
        info!(post_id = %post.id, "Post updated");
        Ok(Post(post))
    }

    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<Post> {
        let post = shared_store(ctx)?
            .write()
            .await
            .delete_post(&id)
            .into_graphql()?;
        info!(post_id = %post.id, "Post deleted");
        Ok(Post(post))
    }

    async fn delete_all_posts(&self, ctx: &Context<'_>) -> GraphQLResult<DeleteAllOutput> {
        let count = shared_store(ctx)?.write().await.delete_all_posts();
        info!(count, "All posts deleted");
        Ok(count.into())
    }
}
