//! The popup notification data model.
//!
//! The front-end shell renders these; this module only decides what they
//! say. The save/delete flows have a small fixed set of messages, and
//! engine errors map onto alerts here so every failure path ends in the
//! same place.

use crate::Error;
use crate::auth::AuthError;

/// Alert flavors for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// The operation completed.
    Success,
    /// The operation failed.
    Error,
    /// The operation is still running.
    Loading,
}

/// One popup notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// How to style the popup.
    pub kind: AlertKind,
    /// Short headline.
    pub title: String,
    /// One or two sentences of detail.
    pub message: String,
    /// Whether the user should be offered a retry. Nothing retries
    /// automatically.
    pub retryable: bool,
}

impl Alert {
    /// Create a success alert.
    pub fn success(title: &str, message: &str) -> Self {
        Self {
            kind: AlertKind::Success,
            title: title.to_owned(),
            message: message.to_owned(),
            retryable: false,
        }
    }

    /// Create an error alert.
    pub fn error(title: &str, message: &str) -> Self {
        Self {
            kind: AlertKind::Error,
            title: title.to_owned(),
            message: message.to_owned(),
            retryable: false,
        }
    }

    /// Create a loading alert.
    pub fn loading(title: &str, message: &str) -> Self {
        Self {
            kind: AlertKind::Loading,
            title: title.to_owned(),
            message: message.to_owned(),
            retryable: false,
        }
    }

    /// Shown while a save is in flight.
    pub fn saving(editing: bool) -> Self {
        if editing {
            Self::loading("Updating...", "Hang on a moment.")
        } else {
            Self::loading("Saving...", "Hang on a moment.")
        }
    }

    /// Shown when a save lands.
    pub fn saved() -> Self {
        Self::success("Saved!", "The transaction has been recorded.")
    }

    /// Shown when a delete lands.
    pub fn deleted() -> Self {
        Self::success("Deleted", "The transaction has been removed.")
    }

    /// Shown when an export finds nothing in the selected period. A normal
    /// empty state, so no retry is offered.
    pub fn nothing_to_export() -> Self {
        Self::error(
            "Nothing to export",
            "There is no data for the selected period.",
        )
    }

    /// Map an engine error onto the alert the shell should show.
    ///
    /// Store and upload failures are retryable by the user; everything else
    /// asks for a corrected input instead.
    pub fn from_error(error: &Error) -> Self {
        let mut alert = match error {
            Error::NegativeAmount(_) | Error::MissingField(_) => {
                Self::error("Check the form", &error.to_string())
            }
            Error::InvalidImage(_) => Self::error(
                "Could not read the photo",
                "The attached file does not look like an image. Try a different photo.",
            ),
            Error::UploadFailed(_) => Self::error(
                "Save failed",
                "The receipt photo could not be uploaded, so nothing was saved. Please try again.",
            ),
            Error::UpdateMissingTransaction | Error::DeleteMissingTransaction => Self::error(
                "Record not found",
                "The transaction is no longer in the wallet. It may have been deleted from another device.",
            ),
            Error::StoreRequest(_) | Error::StoreDecode(_) => Self::error(
                "Something went wrong",
                "The wallet store could not be reached. Please try again.",
            ),
            _ => Self::error("Something went wrong", "Please try again."),
        };
        alert.retryable = error.is_retryable();

        alert
    }

    /// Map a login/registration error onto its popup.
    pub fn from_auth_error(error: &AuthError) -> Self {
        Self::error("Could not sign in", &error.to_string())
    }
}
