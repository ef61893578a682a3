//! Comment schema and resolvers

use async_graphql::{Context, InputObject, Object, Result as GraphQLResult, ID};
use blog_store::{CommentPatch, NewComment};
use tracing::info;

use super::post::Post;
use super::user::User;
use super::{shared_store, DeleteAllOutput};
use crate::error::IntoGraphQL;

pub struct Comment(pub blog_store::Comment);

impl From<blog_store::Comment> for Comment {
    fn from(comment: blog_store::Comment) -> Self {
        Comment(comment)
    }
}

#[Object]
impl Comment {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn text(&self) -> &str {
        &self.0.text
    }

    #[graphql(name = "post_id")]
    async fn post_id(&self) -> ID {
        ID(self.0.post_id.clone())
    }

    #[graphql(name = "user_id")]
    async fn user_id(&self) -> ID {
        ID(self.0.user_id.clone())
    }

    async fn user(&self, ctx: &Context<'_>) -> GraphQLResult<User> {
        let store = shared_store(ctx)?.read().await;
        let user = store.user_of_comment(&self.0).into_graphql()?;
        Ok(User(user.clone()))
    }

    async fn post(&self, ctx: &Context<'_>) -> GraphQLResult<Post> {
        let store = shared_store(ctx)?.read().await;
        let post = store.post_of_comment(&self.0).into_graphql()?;
        Ok(Post(post.clone()))
    }
}

#[derive(InputObject)]
pub struct CreateCommentInput {
    pub text: String,
    #[graphql(name = "post_id")]
    pub post_id: ID,
    #[graphql(name = "user_id")]
    pub user_id: ID,
}

impl From<CreateCommentInput> for NewComment {
    fn from(input: CreateCommentInput) -> Self {
        NewComment {
            text: input.text,
            post_id: input.post_id.0,
            user_id: input.user_id.0,
        }
    }
}

#[derive(InputObject)]
pub struct UpdateCommentInput {
    pub text: Option<String>,
    #[graphql(name = "post_id")]
    pub post_id: Option<ID>,
    #[graphql(name = "user_id")]
    pub user_id: Option<ID>,
}

impl From<UpdateCommentInput> for CommentPatch {
    fn from(input: UpdateCommentInput) -> Self {
        CommentPatch {
            text: input.text,
            post_id: input.post_id.map(|id| id.0),
            user_id: input.user_id.map(|id| id.0),
        }
    }
}

#[derive(Default)]
pub struct CommentQuery;

#[Object]
impl CommentQuery {
    async fn comments(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Comment>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.comments().iter().cloned().map(Comment::from).collect())
    }

    async fn comment(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<Comment> {
        let store = shared_store(ctx)?.read().await;
        let comment = store.comment(&id).into_graphql()?;
        Ok(Comment(comment.clone()))
    }
}

#[derive(Default)]
pub struct CommentMutation;

#[Object]
impl CommentMutation {
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        data: CreateCommentInput,
    ) -> GraphQLResult<Comment> {
        let comment = shared_store(ctx)?.write().await.create_comment(data.into());
        info!(
            comment_id = %comment.id,
            post_id = %comment.post_id,
            user_id = %comment.user_id,
            "Comment created"
        );
        Ok(Comment(comment))
    }

    async fn update_comment(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateCommentInput,
    ) -> GraphQLResult<Comment> {
        let comment = shared_store(ctx)?
            .write()
            .await
            .update_comment(&id, data.into())
            .into_graphql()?;
        info!(comment_id = %comment.id, "Comment updated");
        Ok(Comment(comment))
    }

    async fn delete_comment(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<Comment> {
        let comment = shared_store(ctx)?
            .write()
            .await
            .delete_comment(&id)
            .into_graphql()?;
        info!(comment_id = %comment.id, "Comment deleted");
        Ok(Comment(comment))
    }

    async fn delete_all_comments(&self, ctx: &Context<'_>) -> GraphQLResult<DeleteAllOutput> {
        let count = shared_store(ctx)?.write().await.delete_all_comments();
        info!(count, "All comments deleted");
        Ok(count.into())
    }
}
