//! Notes REST API: create, list, delete, and summarize in-memory notes.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use notes_types::{CreateNoteRequest, NoteResponse, SummaryResponse};

use crate::error::NoteError;
use crate::notes::{summarize, SUMMARY_MAX_SENTENCES};
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    // Bodies without a Content-Type are still parsed as JSON
    let json_config = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error);

    cfg.app_data(json_config)
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(
            web::resource("/notes")
                .route(web::get().to(list_notes))
                .route(web::post().to(create_note)),
        )
        .service(web::resource("/notes/{id}").route(web::delete().to(delete_note)))
        .service(web::resource("/summary").route(web::get().to(get_summary)));
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected body for {} {}: {}", req.method(), req.path(), err);
    NoteError::InvalidRequest(err.to_string()).into()
}

fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected path {}: {}", req.path(), err);
    NoteError::InvalidRequest(err.to_string()).into()
}

/// POST /notes
async fn create_note(
    state: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let note = state.notes.create(&body.content);
    HttpResponse::Created().json(note.to_response())
}

/// GET /notes - newest first
async fn list_notes(state: web::Data<AppState>) -> impl Responder {
    let notes: Vec<NoteResponse> = state.notes.list().iter().map(|n| n.to_response()).collect();
    HttpResponse::Ok().json(notes)
}

/// DELETE /notes/{id}
async fn delete_note(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, NoteError> {
    state.notes.delete(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /summary - summary over every note, newest first
async fn get_summary(state: web::Data<AppState>) -> impl Responder {
    if state.notes.is_empty() {
        log::debug!("Summary requested with no notes stored");
    }
    let combined = state.notes.combined_content();
    let summary = summarize(&combined, SUMMARY_MAX_SENTENCES);
    HttpResponse::Ok().json(SummaryResponse { summary })
}
