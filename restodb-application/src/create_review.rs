use super::*;

pub fn create_review(
    connections: &sqlite::Connections,
    submission: usecases::ReviewSubmission,
) -> Result<Id> {
    let restaurant_id = submission.restaurant_id;
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_review(conn, submission).map_err(|err| {
            warn!("Failed to review restaurant {restaurant_id}: {err}");
            err
        })
    })?)
}

pub fn create_report(
    connections: &sqlite::Connections,
    submission: usecases::ReportSubmission,
) -> Result<Id> {
    let restaurant_id = submission.restaurant_id;
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_report(conn, submission).map_err(|err| {
            warn!("Failed to report on restaurant {restaurant_id}: {err}");
            err
        })
    })?)
}
