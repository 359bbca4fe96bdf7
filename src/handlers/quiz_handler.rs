use actix_multipart::form::{MultipartForm, MultipartFormConfig};
use actix_web::{post, web, HttpRequest, HttpResponse};
use tokio_util::sync::CancellationToken;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{GenerateQuizForm, GenerationRequest},
};

/// Slack on top of the upload limit for the other form fields and multipart framing.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Multipart limits for the upload endpoint. The exact file size limit is
/// enforced by the service, this only bounds what the transport buffers.
pub fn multipart_config(max_upload_bytes: usize) -> MultipartFormConfig {
    let limit = max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);

    MultipartFormConfig::default()
        .total_limit(limit)
        .memory_limit(limit)
        .error_handler(|err, _req| {
            AppError::ValidationError(format!("Invalid multipart request: {}", err)).into()
        })
}

#[post("/api/quiz/generate")]
async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: MultipartForm<GenerateQuizForm>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    let request = GenerationRequest::try_from(form.into_inner())?;

    log::info!(
        "[{}] Quiz requested for {} ({} bytes)",
        request_id,
        request.file.file_name,
        request.file.len()
    );

    // the service stops at its next suspension point once this fires, including
    // when actix drops the handler because the client went away
    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    let deadline = state.config.request_timeout();
    let quiz = match tokio::time::timeout(
        deadline,
        state.quiz_service.generate_quiz(request, &cancel),
    )
    .await
    {
        Ok(result) => result?,
        Err(_) => {
            cancel.cancel();
            log::warn!(
                "[{}] Quiz generation exceeded {}s",
                request_id,
                deadline.as_secs()
            );
            return Err(AppError::Timeout(format!(
                "Quiz generation exceeded {} seconds",
                deadline.as_secs()
            )));
        }
    };

    log::info!(
        "[{}] Returning quiz {} with {} questions",
        request_id,
        quiz.quiz_id,
        quiz.total_questions
    );

    Ok(HttpResponse::Ok().json(quiz))
}
