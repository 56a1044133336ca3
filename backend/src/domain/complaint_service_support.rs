//! Shared helpers for the complaint services: port error mapping and the
//! owner identity join.

use std::collections::BTreeMap;

use tracing::warn;

use crate::domain::ports::{ComplaintRepositoryError, UserDirectory, UserDirectoryError};
use crate::domain::{Complaint, ComplaintView, DirectoryUser, Error, OwnerIdentity, UserId};

pub(crate) fn map_repository_error(error: ComplaintRepositoryError) -> Error {
    match error {
        ComplaintRepositoryError::Connection { message } => {
            warn!(%message, "complaint store unreachable");
            Error::service_unavailable(format!("complaint repository unavailable: {message}"))
        }
        ComplaintRepositoryError::Query { message } => {
            warn!(%message, "complaint store query failed");
            Error::internal(format!("complaint repository error: {message}"))
        }
        ComplaintRepositoryError::RevisionMismatch { expected, actual } => Error::conflict(format!(
            "complaint changed concurrently (expected revision {expected}, found {actual})"
        )),
        ComplaintRepositoryError::Missing { id } => {
            Error::not_found(format!("complaint {id} not found"))
        }
    }
}

pub(crate) fn map_directory_error(error: UserDirectoryError) -> Error {
    match error {
        UserDirectoryError::Connection { message } => {
            warn!(%message, "user directory unreachable");
            Error::service_unavailable(format!("user directory unavailable: {message}"))
        }
        UserDirectoryError::Query { message } => {
            warn!(%message, "user directory query failed");
            Error::internal(format!("user directory error: {message}"))
        }
    }
}

pub(crate) fn complaint_not_found(id: impl std::fmt::Display) -> Error {
    Error::not_found(format!("complaint {id} not found"))
}

/// Directory entries for `owners`, keyed by id. Unknown owners are absent.
pub(crate) async fn directory_entries<U>(
    directory: &U,
    owners: &[UserId],
) -> Result<BTreeMap<UserId, DirectoryUser>, Error>
where
    U: UserDirectory + ?Sized,
{
    if owners.is_empty() {
        return Ok(BTreeMap::new());
    }
    let users = directory
        .find_by_ids(owners)
        .await
        .map_err(map_directory_error)?;
    Ok(users.into_iter().map(|user| (user.id, user)).collect())
}

/// Join each complaint with its owner, in input order.
pub(crate) async fn join_owners<U>(
    directory: &U,
    complaints: &[Complaint],
) -> Result<Vec<ComplaintView>, Error>
where
    U: UserDirectory + ?Sized,
{
    let mut owners: Vec<UserId> = complaints.iter().map(Complaint::user).collect();
    owners.sort_unstable();
    owners.dedup();
    let entries = directory_entries(directory, &owners).await?;
    Ok(complaints
        .iter()
        .map(|complaint| {
            let owner = entries
                .get(&complaint.user())
                .cloned()
                .map_or_else(|| OwnerIdentity::unknown(complaint.user()), Into::into);
            ComplaintView::new(complaint, owner)
        })
        .collect())
}

/// Join one complaint with its owner.
pub(crate) async fn join_owner<U>(
    directory: &U,
    complaint: &Complaint,
) -> Result<ComplaintView, Error>
where
    U: UserDirectory + ?Sized,
{
    let owner = directory
        .find_by_id(&complaint.user())
        .await
        .map_err(map_directory_error)?
        .map_or_else(|| OwnerIdentity::unknown(complaint.user()), Into::into);
    Ok(ComplaintView::new(complaint, owner))
}
