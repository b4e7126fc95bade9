use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::errors::ActivityResult;
use crate::models::{ActivityDirectoryView, MessageResponse};

pub fn list_activities(store: &ActivityStore) -> ActivityDirectoryView {
    store.list()
}

pub fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> ActivityResult<MessageResponse> {
    match store.signup(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "activity_signup");
            Ok(MessageResponse {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "activity_signup_rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> ActivityResult<MessageResponse> {
    match store.unregister(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "activity_unregister");
            Ok(MessageResponse {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "activity_unregister_rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ActivityError;

    fn participants(store: &ActivityStore, name: &str) -> Vec<String> {
        list_activities(store)
            .activities
            .into_iter()
            .find(|a| a.name == name)
            .map(|a| a.participants)
            .unwrap_or_default()
    }

    #[test]
    fn signup_message_mentions_email_and_activity() {
        let store = ActivityStore::seeded();
        let res = signup(&store, "Tennis Club", "new@x.edu").unwrap();
        assert_eq!(res.message, "Signed up new@x.edu for Tennis Club");
    }

    #[test]
    fn padded_email_is_stored_as_given() {
        let store = ActivityStore::seeded();
        let res = signup(&store, "Basketball Team", " pad@x.edu ").unwrap();
        assert_eq!(res.message, "Signed up  pad@x.edu  for Basketball Team");

        let roster = participants(&store, "Basketball Team");
        assert_eq!(roster, vec!["alex@mergington.edu", " pad@x.edu "]);
        assert_eq!(
            signup(&store, "Basketball Team", "  alex@mergington.edu "),
            Ok(MessageResponse {
                message: "Signed up   alex@mergington.edu  for Basketball Team".to_string(),
            })
        );
    }

    #[test]
    fn empty_email_is_an_ordinary_participant() {
        let store = ActivityStore::seeded();
        signup(&store, "Tennis Club", "").unwrap();
        assert!(participants(&store, "Tennis Club").contains(&String::new()));
        assert_eq!(
            signup(&store, "Tennis Club", ""),
            Err(ActivityError::AlreadySignedUp)
        );

        unregister(&store, "Tennis Club", "").unwrap();
        assert_eq!(
            participants(&store, "Tennis Club"),
            vec!["jessica@mergington.edu"]
        );
        assert_eq!(
            unregister(&store, "Ghost Club", ""),
            Err(ActivityError::NotFound)
        );
    }

    #[test]
    fn student_can_join_several_activities() {
        let store = ActivityStore::seeded();
        signup(&store, "Basketball Team", "multi@x.edu").unwrap();
        signup(&store, "Tennis Club", "multi@x.edu").unwrap();
        unregister(&store, "Basketball Team", "multi@x.edu").unwrap();

        assert!(!participants(&store, "Basketball Team").contains(&"multi@x.edu".to_string()));
        assert!(participants(&store, "Tennis Club").contains(&"multi@x.edu".to_string()));
    }
}
