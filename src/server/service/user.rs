//! User service.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::{record::Record, user::UserDto},
    server::{data::user::UserRepository, error::Error, service::RecordService},
};

/// Service for managing shop user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

#[async_trait]
impl<'a> RecordService<'a> for UserService<'a> {
    type Record = UserDto;

    const ENTITY_NAME: &'static str = "user";

    /// Creates a new instance of UserService.
    fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn save(&self, user: UserDto) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let saved = match user.identity() {
            Some(id) => user_repo.upsert(id, user).await?,
            None => user_repo.create(user).await?,
        };

        Ok(saved.into())
    }

    async fn get_all(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves the user with identity `id`.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    async fn get(&self, id: i64) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Deletes the user with identity `id`.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted or did not exist
    /// - `Err(Error::DbErr)` - The user is still referenced by orders or points, or the database
    ///   operation failed
    async fn delete(&self, id: i64) -> Result<(), Error> {
        UserRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
