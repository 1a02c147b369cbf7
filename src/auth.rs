//! The login seam.
//!
//! Identity verification is delegated to a managed service; this module
//! owns the parts the app controls: resolving a login identifier (username
//! or email) to the email the service expects, validating usernames at
//! registration, and the fixed error taxonomy the notification layer shows.
//! The taxonomy is finite by design; anything unrecognised collapses to
//! [AuthError::Other].

use crate::store::DocumentStore;

/// The fixed set of login and registration failures shown to the user.
///
/// The display strings are the user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The username or email is not registered.
    #[error("No account matches that username or email.")]
    UserNotFound,

    /// The password did not match.
    #[error("Incorrect password.")]
    WrongPassword,

    /// Registration with an email that already has an account.
    #[error("That email is already registered.")]
    EmailAlreadyInUse,

    /// Registration with a username that is already mapped.
    #[error("That username is already taken.")]
    UsernameAlreadyInUse,

    /// The username does not meet the format rules.
    #[error("Usernames must be 3-15 characters: letters, numbers, or underscores.")]
    InvalidUsername,

    /// The password is below the service's strength floor.
    #[error("That password is too weak. Use at least 6 characters.")]
    WeakPassword,

    /// The email address is malformed.
    #[error("That email address is not valid.")]
    InvalidEmail,

    /// Anything the taxonomy does not name.
    #[error("Something went wrong. Please try again.")]
    Other,
}

/// Check a registration username: 3 to 15 characters, letters, digits, or
/// underscores.
pub fn validate_username(username: &str) -> Result<(), AuthError> {
    let valid_length = (3..=15).contains(&username.len());
    let valid_characters = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid_length && valid_characters {
        Ok(())
    } else {
        Err(AuthError::InvalidUsername)
    }
}

/// Resolve what the user typed at the login prompt to an email address.
///
/// Identifiers containing `@` are taken as emails; anything else is looked
/// up as a username (usernames are stored lowercased). A missing mapping is
/// the specific [AuthError::UserNotFound]; a store failure during the
/// lookup is the generic [AuthError::Other].
pub async fn resolve_login_identifier(
    store: &dyn DocumentStore,
    identifier: &str,
) -> Result<String, AuthError> {
    let identifier = identifier.trim();
    if identifier.contains('@') {
        return Ok(identifier.to_owned());
    }

    let record = store
        .lookup_username(&identifier.to_lowercase())
        .await
        .map_err(|error| {
            tracing::error!("username lookup failed: {error}");
            AuthError::Other
        })?;

    match record {
        Some(record) => Ok(record.email),
        None => Err(AuthError::UserNotFound),
    }
}
