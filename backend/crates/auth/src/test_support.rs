//! In-memory repository for use-case tests.

use std::sync::Mutex;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, RawPassword, UserId, UserPassword};
use crate::error::{AuthError, AuthResult};

/// In-memory `UserRepository` that mimics the database's unique email
/// index: inserting a duplicate email fails atomically.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.user_id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(AuthError::UserNotFound),
        }
    }

    async fn email_taken(&self, email: &Email, exclude: &UserId) -> AuthResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .any(|u| &u.email == email && &u.user_id != exclude))
    }
}

/// Build a user directly, bypassing the signup use case.
pub fn seeded_user(name: &str, email: &str, password: &str) -> User {
    let raw = RawPassword::new(password.to_string()).unwrap();
    User::new(
        name.to_string(),
        Email::new(email).unwrap(),
        UserPassword::from_raw(&raw).unwrap(),
    )
}
