use tracing::info;

use crate::database::activities_repo::{ActivityDirectory, ActivityMap, DirectoryError};
use crate::models::SignupResult;

pub async fn list_activities(directory: &ActivityDirectory) -> ActivityMap {
    directory.list_activities().await
}

pub async fn signup_for_activity(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<SignupResult, DirectoryError> {
    let count = directory.add_participant(activity_name, email).await?;
    info!(activity = %activity_name, email = %email, participants = count, "participant signed up");
    Ok(SignupResult::signed_up(email, activity_name))
}

pub async fn remove_participant(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<SignupResult, DirectoryError> {
    let count = directory.remove_participant(activity_name, email).await?;
    info!(activity = %activity_name, email = %email, participants = count, "participant removed");
    Ok(SignupResult::removed(email, activity_name))
}
