use crate::model::{spot::OwnerDto, user::UserDto};

/// Parameters for creating a user account.
///
/// Carries the plaintext password; hashing happens in the service just before
/// the insert so the data layer only ever sees the hash.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl From<crate::model::user::SignupDto> for SignupParams {
    fn from(dto: crate::model::user::SignupDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            username: dto.username,
            password: dto.password,
        }
    }
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            username: user.username,
        }
    }
}

impl From<entity::user::Model> for OwnerDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}
