use super::*;

#[get("/server/version")]
pub fn get_version(version: &State<Version>) -> Json<restodb_boundary::ServerVersion> {
    Json(restodb_boundary::ServerVersion {
        version: version.0.to_owned(),
    })
}
