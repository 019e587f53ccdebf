//! User model -> entity mapper

use chatdoor_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}
