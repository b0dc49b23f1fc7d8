// src/handlers.rs
use crate::{AppState, models::FormValues};
use actix_web::{Error, HttpResponse, web};
use log::info;

/// One submission: validate, then dispatch. Validation failures never reach
/// a flow; generation failures come back as a `failure` result, not a 5xx,
/// so the client can always correct and resubmit.
pub async fn generate_post_image(
    body: web::Json<FormValues>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let form = body.into_inner();

    let errors = data.registry.validate(&form.style, &form);
    if !errors.is_empty() {
        info!(
            "submission for style '{}' rejected with {} validation error(s)",
            form.style,
            errors.len()
        );
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors })));
    }

    let result = data.registry.dispatch(&form.style, &form).await;

    Ok(HttpResponse::Ok().json(&result))
}

/// Styles the form can render: id, label, required fields, defaults.
pub async fn list_styles(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "styles": data.registry.summaries() }))
}

/// The style-change reset. The client posts its current form values and
/// gets them back with the old style's fields cleared and the new style's
/// defaults applied.
pub async fn style_defaults(
    path: web::Path<String>,
    body: web::Json<FormValues>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let style_id = path.into_inner();
    let form = data
        .registry
        .apply_style_defaults(&style_id, body.into_inner())?;

    Ok(HttpResponse::Ok().json(&form))
}
