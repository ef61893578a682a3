use std::fmt;

/// The three entity types held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Post,
    Comment,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Post => "Post",
            EntityKind::Comment => "Comment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No entity with the given id exists in the targeted collection.
    #[error("{kind} Not Found: {id}")]
    NotFound { kind: EntityKind, id: String },
}

impl StoreError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            StoreError::NotFound { kind, .. } => *kind,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            StoreError::NotFound { id, .. } => id,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
