//! Entity records, creation inputs and partial-update patches.

use crate::error::EntityKind;

/// A record stored in a [`Collection`](crate::Collection).
pub trait Entity: Clone {
    /// Which collection the entity lives in, used for error reporting.
    const KIND: EntityKind;

    /// Every field except the id.
    type New;

    /// Optional-field form of [`Entity::New`]; `None` leaves a field untouched.
    type Patch;

    fn id(&self) -> &str;

    /// Build the entity from a store-assigned id and the caller's fields.
    fn assemble(id: String, new: Self::New) -> Self;

    /// Shallow merge: only fields present in the patch are overwritten.
    fn apply(&mut self, patch: Self::Patch);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: String,
    pub age: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub full_name: Option<String>,
    pub age: Option<i32>,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
    type New = NewUser;
    type Patch = UserPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assemble(id: String, new: NewUser) -> Self {
        User {
            id,
            full_name: new.full_name,
            age: new.age,
        }
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub user_id: Option<String>,
}

impl Entity for Post {
    const KIND: EntityKind = EntityKind::Post;
    type New = NewPost;
    type Patch = PostPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assemble(id: String, new: NewPost) -> Self {
        Post {
            id,
            title: new.title,
            user_id: new.user_id,
        }
    }

    fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub post_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub post_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPatch {
    pub text: Option<String>,
    pub post_id: Option<String>,
    pub user_id: Option<String>,
}

impl Entity for Comment {
    const KIND: EntityKind = EntityKind::Comment;
    type New = NewComment;
    type Patch = CommentPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assemble(id: String, new: NewComment) -> Self {
        Comment {
            id,
            text: new.text,
            post_id: new.post_id,
            user_id: new.user_id,
        }
    }

    fn apply(&mut self, patch: CommentPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(post_id) = patch.post_id {
            self.post_id = post_id;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }
}
