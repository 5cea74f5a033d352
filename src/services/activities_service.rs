use indexmap::IndexMap;

use serde::Serialize;
use tracing::info;

use crate::database::catalog_repo::{ActivityCatalog, ParticipantUpdate};
use crate::error::ActivityError;
use crate::models::ActivityRecord;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageView {
    pub message: String,
}

pub fn list_activities(catalog: &ActivityCatalog) -> IndexMap<String, ActivityRecord> {
    catalog.list()
}

pub fn signup(
    catalog: &ActivityCatalog,
    activity: &str,
    email: &str,
) -> Result<MessageView, ActivityError> {
    match catalog.add_participant(activity, email) {
        ParticipantUpdate::ActivityMissing => Err(ActivityError::NotFound),
        ParticipantUpdate::Unchanged => Err(ActivityError::AlreadySignedUp),
        ParticipantUpdate::Applied => {
            info!(activity = %activity, email = %email, "signup_applied");
            Ok(MessageView {
                message: format!("Signed up {} for {}", email, activity),
            })
        }
    }
}

pub fn unregister(
    catalog: &ActivityCatalog,
    activity: &str,
    email: &str,
) -> Result<MessageView, ActivityError> {
    match catalog.remove_participant(activity, email) {
        ParticipantUpdate::ActivityMissing => Err(ActivityError::NotFound),
        ParticipantUpdate::Unchanged => Err(ActivityError::NotSignedUp),
        ParticipantUpdate::Applied => {
            info!(activity = %activity, email = %email, "unregister_applied");
            Ok(MessageView {
                message: format!("Unregistered {} from {}", email, activity),
            })
        }
    }
}
