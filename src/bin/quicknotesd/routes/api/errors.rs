use quicknotes::service::NoteServiceError;
use quicknotes::store::StoreError;
use rocket::http::Status;
use rocket::response::{self, Responder, Response};
use rocket::serde::json::Json;
use rocket::Request;
use thiserror::Error;

use crate::routes::api::model::MessageResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] NoteServiceError),
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let ApiError::Service(NoteServiceError::Store(cause)) = self;
        let status = match cause {
            StoreError::NotFound => Status::NotFound,
            StoreError::Unauthorized => Status::Unauthorized,
        };
        let body = Json(MessageResponse::new(cause.to_string()));
        Response::build_from(body.respond_to(request)?)
            .status(status)
            .ok()
    }
}
