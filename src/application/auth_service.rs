use std::sync::Arc;

use tracing::{info, instrument};

use crate::data::record_store::{self, RecordStore};
use crate::domain::{error::DomainError, user::User};

/// Explicit session object: owns the identity operations and the currently
/// authenticated user. Created once at application start and handed to
/// whatever needs identity; there is no ambient global state.
///
/// The session survives restarts through the `currentUser` slot in the
/// record store.
pub struct AuthService<S: RecordStore> {
    store: Arc<S>,
    current: Option<User>,
}

impl<S: RecordStore> AuthService<S> {
    /// Builds the session, resuming any persisted `currentUser` slot.
    pub fn new(store: Arc<S>) -> Self {
        let current = store.read_slot(record_store::CURRENT_USER);
        Self { store, current }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Registers a new account and logs it in immediately. Fails with
    /// [`DomainError::UserAlreadyExists`] when the email is taken; the
    /// comparison is case-sensitive exact equality.
    #[instrument(skip(self, password))]
    pub fn register(
        &mut self,
        name: String,
        email: String,
        password: String,
    ) -> Result<User, DomainError> {
        let mut users: Vec<User> = self.store.read_all(record_store::USERS);
        if users.iter().any(|user| user.email == email) {
            return Err(DomainError::UserAlreadyExists(email));
        }

        let user = User::new(name, email, password);
        users.push(user.clone());
        self.store.write_all(record_store::USERS, &users);
        info!(user_id = %user.id, email = %user.email, "user registered");

        self.establish(user.clone());
        Ok(user)
    }

    /// Exact case-sensitive match on email and password. "No such email"
    /// and "wrong password" are deliberately the same failure; on failure
    /// neither the session nor the store changes.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, DomainError> {
        let users: Vec<User> = self.store.read_all(record_store::USERS);
        let user = users
            .into_iter()
            .find(|user| user.email == email && user.password == password)
            .ok_or(DomainError::InvalidCredentials)?;

        info!(user_id = %user.id, "login succeeded");
        self.establish(user.clone());
        Ok(user)
    }

    /// Always succeeds, even when nobody is logged in.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "logged out");
        }
        self.store.clear_slot(record_store::CURRENT_USER);
    }

    fn establish(&mut self, user: User) {
        self.store.write_slot(record_store::CURRENT_USER, &user);
        self.current = Some(user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::memory::MemoryStore;

    fn service() -> AuthService<MemoryStore> {
        AuthService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn register_rejects_duplicate_email_and_keeps_one_record() {
        let mut auth = service();
        auth.register("Ann".into(), "a@x.com".into(), "p".into())
            .unwrap();
        let err = auth
            .register("Bob".into(), "a@x.com".into(), "q".into())
            .unwrap_err();
        assert_eq!(err, DomainError::UserAlreadyExists("a@x.com".into()));

        let users: Vec<User> = auth.store.read_all(record_store::USERS);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ann");
    }

    #[test]
    fn register_logs_the_new_user_in() {
        let mut auth = service();
        let ann = auth
            .register("Ann".into(), "a@x.com".into(), "p".into())
            .unwrap();
        assert_eq!(auth.current_user(), Some(&ann));
    }

    #[test]
    fn login_is_exact_and_all_or_nothing() {
        let mut auth = service();
        let ann = auth
            .register("Ann".into(), "a@x.com".into(), "p".into())
            .unwrap();
        auth.logout();

        assert_eq!(
            auth.login("a@x.com", "wrong").unwrap_err(),
            DomainError::InvalidCredentials
        );
        assert_eq!(auth.current_user(), None);

        // case-sensitive on the email as well
        assert_eq!(
            auth.login("A@x.com", "p").unwrap_err(),
            DomainError::InvalidCredentials
        );

        assert_eq!(auth.login("a@x.com", "p").unwrap(), ann);
        assert_eq!(auth.current_user(), Some(&ann));
    }

    #[test]
    fn session_resumes_from_the_persisted_slot() {
        let store = Arc::new(MemoryStore::new());
        let mut auth = AuthService::new(Arc::clone(&store));
        let ann = auth
            .register("Ann".into(), "a@x.com".into(), "p".into())
            .unwrap();

        let resumed = AuthService::new(Arc::clone(&store));
        assert_eq!(resumed.current_user(), Some(&ann));

        auth.logout();
        let after_logout = AuthService::new(store);
        assert_eq!(after_logout.current_user(), None);
    }
}
