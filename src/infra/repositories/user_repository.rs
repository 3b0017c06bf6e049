//! Read-only user repository.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::user::{self, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Escape character for the LIKE clause; needs no quoting on any backend
const LIKE_ESCAPE: char = '!';

/// Escape LIKE metacharacters so `fragment` matches literally.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users whose email contains `fragment`, in database scan order.
    async fn find_by_email_containing(&self, fragment: &str) -> AppResult<Vec<User>>;
}

/// SeaORM implementation of [`UserRepository`]
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email_containing(&self, fragment: &str) -> AppResult<Vec<User>> {
        // SELECT id, username, email FROM users WHERE email LIKE '%<fragment>%' ESCAPE '!'
        let pattern = format!("%{}%", escape_like(fragment));
        let models = UserEntity::find()
            .filter(Expr::col(user::Column::Email).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(fragment, rows = models.len(), "User lookup finished");

        Ok(models.into_iter().map(User::from).collect())
    }
}
