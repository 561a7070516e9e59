//! Repository for user rows.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::user::UserDto, server::model::db::UserModel};

/// Repository for the `shop_user` table
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, user: UserDto) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(user.name),
            email: ActiveValue::Set(user.email),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Updates the user with identity `id`, inserting a new user when none exists
    pub async fn upsert(&self, id: i64, user: UserDto) -> Result<UserModel, DbErr> {
        let existing = match entity::prelude::User::find_by_id(id).one(self.db).await? {
            Some(existing) => existing,
            None => return self.create(user).await,
        };

        let mut user_am = existing.into_active_model();
        user_am.name = ActiveValue::Set(user.name);
        user_am.email = ActiveValue::Set(user.email);

        user_am.update(self.db).await
    }

    /// Returns the user with identity `id`, `Ok(None)` when there is none
    pub async fn get_by_id(&self, id: i64) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Returns every user ordered by identity
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await
    }
}
