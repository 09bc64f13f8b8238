use super::prelude::*;

pub const DEFAULT_REJECTION_MESSAGE: &str = "No message provided.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    /// The restaurant the rejected request referred to
    pub restaurant_id: Option<Id>,
    /// The message that has been sent to the requester
    pub message_id: Option<Id>,
}

/// Deletes the request and notifies the requester, if known.
///
/// A blank reason is replaced by [`DEFAULT_REJECTION_MESSAGE`].
pub fn reject_restaurant_request<R>(
    repo: &R,
    request_id: Id,
    reason: Option<&str>,
) -> Result<Rejection>
where
    R: RestaurantRequestRepo + RejectionMessageRepo,
{
    let request = repo.get_restaurant_request(request_id)?;
    let message = reason
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_REJECTION_MESSAGE);
    if message.chars().count() > MESSAGE_MAX_LEN {
        return Err(Error::TextTooLong("message", MESSAGE_MAX_LEN));
    }
    let message_id = match request.requester {
        Some(recipient) => {
            let new_message = NewRejectionMessage {
                recipient,
                for_what: request.name.chars().take(FOR_WHAT_MAX_LEN).collect(),
                message: message.to_owned(),
            };
            Some(repo.create_rejection_message(&new_message)?)
        }
        None => None,
    };
    repo.delete_restaurant_request(request.id)?;
    log::info!(
        "Rejected request {} (requester notified: {})",
        request.id,
        message_id.is_some()
    );
    Ok(Rejection {
        restaurant_id: request.corresponding_restaurant,
        message_id,
    })
}
