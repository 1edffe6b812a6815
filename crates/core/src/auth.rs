//! Account registration, login and ownership checks

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::models::{Event, User, UserDraft};
use crate::storage::Storage;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Check a password against a stored hash.
///
/// An unparsable stored hash counts as a mismatch, not an error.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(stored_hash) {
        Ok(hash) => hash,
        Err(error) => {
            debug!(%error, "Stored password hash unparsable");
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Authentication gate over a storage backend.
///
/// Holds a cached copy of the logged-in user for cheap reads; the
/// persisted session record remains the durable source of truth and is
/// updated on every transition.
pub struct SessionGate<S: Storage> {
    store: S,
    current: Option<User>,
}

impl<S: Storage> SessionGate<S> {
    /// Wrap a store, restoring any persisted session.
    pub fn new(store: S) -> Result<Self> {
        let current = store.current_user()?;
        Ok(Self { store, current })
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Create an account and log it in.
    ///
    /// Fails with [`Error::DuplicateEmail`] when the email is already
    /// registered; nothing is written in that case.
    #[instrument(skip(self, name, password), fields(email = %email))]
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<User> {
        if self.store.find_user_by_email(email)?.is_some() {
            return Err(Error::DuplicateEmail(email.to_string()));
        }

        let user = self.store.add_user(UserDraft {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
        })?;
        self.store.set_current_user(Some(&user))?;
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Log in with email and password.
    ///
    /// An unknown email and a wrong password both fail with
    /// [`Error::InvalidCredentials`], indistinguishably. The session is
    /// unchanged on failure.
    #[instrument(skip(self, password), fields(email = %email))]
    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let user = self
            .store
            .find_user_by_email(email)?
            .ok_or(Error::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(Error::InvalidCredentials);
        }

        self.store.set_current_user(Some(&user))?;
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Log out, clearing both the cached and persisted session. A no-op
    /// when nobody is logged in.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<()> {
        self.store.set_current_user(None)?;
        self.current = None;
        Ok(())
    }

    /// Whether the logged-in user may edit or delete the event.
    ///
    /// Anonymous visitors are never authorized, and seeded events have
    /// no owner, so nobody is. This gates what the presentation layer
    /// offers; it is not a security boundary, since everything lives in
    /// a local store the user already controls.
    pub fn is_authorized(&self, event: &Event) -> bool {
        match &self.current {
            Some(user) => event.is_owned_by(user.id),
            None => false,
        }
    }

    /// Re-resolve the cached user against the account store.
    ///
    /// Picks up account changes made behind the gate's back, and logs
    /// out when the account no longer exists.
    #[instrument(skip(self))]
    pub fn refresh(&mut self) -> Result<()> {
        let id = match &self.current {
            Some(user) => user.id,
            None => return Ok(()),
        };

        match self.store.find_user_by_id(id)? {
            Some(user) => {
                self.store.set_current_user(Some(&user))?;
                self.current = Some(user);
            }
            None => {
                warn!(%id, "Logged-in account no longer exists, logging out");
                self.store.set_current_user(None)?;
                self.current = None;
            }
        }
        Ok(())
    }
}
