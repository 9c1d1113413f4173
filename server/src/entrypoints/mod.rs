use rocket::{
    fairing::AdHoc,
    http::Status,
    response::{self, Responder},
    serde::json::Json,
    Request,
};
use trophy_board_server::{error::FetchError, messages::MessageLoader, types::ErrorResponse};

pub mod profile;
pub mod repos;

pub fn stage() -> AdHoc {
    AdHoc::on_ignite("Installing entrypoints", |rocket| async {
        rocket.attach(profile::stage()).attach(repos::stage())
    })
}

/// JSON error answer carrying the toast text the dashboard shows.
pub struct ApiError {
    status: Status,
    body: ErrorResponse,
}

impl ApiError {
    pub fn profile(err: FetchError, messages: &MessageLoader) -> Self {
        Self {
            status: status_of(&err),
            body: ErrorResponse {
                error: err.kind().to_string(),
                message: messages.profile_toast(&err),
            },
        }
    }

    pub fn repos(err: FetchError, messages: &MessageLoader) -> Self {
        Self {
            status: status_of(&err),
            body: ErrorResponse {
                error: err.kind().to_string(),
                message: messages.repos_toast(&err),
            },
        }
    }

    pub fn unknown_sort(value: &str) -> Self {
        Self {
            status: Status::UnprocessableEntity,
            body: ErrorResponse {
                error: "unknown_sort".to_string(),
                message: format!("Unknown sort mode `{value}`, expected updated, stars or name"),
            },
        }
    }
}

fn status_of(err: &FetchError) -> Status {
    match err {
        FetchError::NotFound { .. } => Status::NotFound,
        FetchError::ServerError { .. } => Status::BadGateway,
        FetchError::Network => Status::ServiceUnavailable,
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let mut response = Json(self.body).respond_to(req)?;
        response.set_status(self.status);
        Ok(response)
    }
}
