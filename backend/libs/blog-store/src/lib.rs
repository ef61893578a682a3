//! In-memory relational store for users, posts and comments.
//!
//! The store owns three ordered collections and exposes CRUD operations plus
//! read-time relationship scans. It is synchronous and single-owner; hosts
//! that serve concurrent requests wrap it in a lock.

pub mod collection;
pub mod error;
pub mod id;
pub mod model;
pub mod seed;
pub mod store;

pub use collection::Collection;
pub use error::{EntityKind, StoreError, StoreResult};
pub use id::{IdGenerator, SequentialIds, UuidIds};
pub use model::{
    Comment, CommentPatch, Entity, NewComment, NewPost, NewUser, Post, PostPatch, User, UserPatch,
};
pub use store::Store;
