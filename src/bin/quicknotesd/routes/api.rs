use quicknotes::lifecycle::NoteView;
use quicknotes::service::NoteService;
use rocket::response::content::RawText;
use rocket::serde::json::Json;
use rocket::{Route, State, delete, get, post, put, routes};
use uuid::Uuid;

use auth_guard::Authenticated;
use errors::ApiError;
use model::{CreateNoteRequest, MessageResponse, NoteResponse, UpdateNoteRequest};

mod auth_guard;
mod errors;
mod model;

#[get("/version")]
fn version() -> RawText<&'static str> {
    RawText("1")
}

#[get("/notes")]
async fn list_active(
    user: Authenticated,
    service: &State<NoteService>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    list_view(user, service, NoteView::Active).await
}

#[get("/notes/archived")]
async fn list_archived(
    user: Authenticated,
    service: &State<NoteService>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    list_view(user, service, NoteView::Archived).await
}

#[get("/notes/trash")]
async fn list_trash(
    user: Authenticated,
    service: &State<NoteService>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    list_view(user, service, NoteView::Trashed).await
}

#[get("/notes/reminders")]
async fn list_reminders(
    user: Authenticated,
    service: &State<NoteService>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    list_view(user, service, NoteView::Reminders).await
}

async fn list_view(
    user: Authenticated,
    service: &State<NoteService>,
    view: NoteView,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = service.list_notes(&user.0, view).await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

#[post("/notes", data = "<note>")]
async fn create(
    user: Authenticated,
    service: &State<NoteService>,
    note: Json<CreateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = service.create_note(&user.0, note.into_inner().into()).await?;
    Ok(Json(note.into()))
}

#[put("/notes/<id>", data = "<patch>")]
async fn update(
    user: Authenticated,
    service: &State<NoteService>,
    id: Uuid,
    patch: Json<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = service.edit_note(&user.0, id, patch.into_inner().into()).await?;
    Ok(Json(note.into()))
}

#[delete("/notes/<id>")]
async fn trash(
    user: Authenticated,
    service: &State<NoteService>,
    id: Uuid,
) -> Result<Json<MessageResponse>, ApiError> {
    service.trash_note(&user.0, id).await?;
    Ok(Json(MessageResponse::new("note moved to trash")))
}

#[delete("/notes/permanent/<id>")]
async fn destroy(
    user: Authenticated,
    service: &State<NoteService>,
    id: Uuid,
) -> Result<Json<MessageResponse>, ApiError> {
    service.destroy_note(&user.0, id).await?;
    Ok(Json(MessageResponse::new("note permanently deleted")))
}

#[put("/notes/restore/<id>")]
async fn restore(
    user: Authenticated,
    service: &State<NoteService>,
    id: Uuid,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = service.restore_note(&user.0, id).await?;
    Ok(Json(note.into()))
}

pub fn api_routes() -> Vec<Route> {
    routes![
        version,
        list_active,
        list_archived,
        list_trash,
        list_reminders,
        create,
        update,
        trash,
        destroy,
        restore,
    ]
}
