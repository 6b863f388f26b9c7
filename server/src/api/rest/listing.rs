//! Public folder listing page

use crate::api::AppState;
use crate::disk::{extract_public_key, DiskError, FileEntry};
use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::get,
    Form, Router,
};

use super::page::render_listing;
use super::types::LinkForm;

const INVALID_FORM: &str = "Invalid link. Please check the entered data.";

pub fn listing_routes() -> Router<AppState> {
    Router::new().route("/", get(show_form).post(submit_form))
}

async fn show_form(State(state): State<AppState>) -> Html<String> {
    render_listing(&state.config.server_name, "", &[], None)
}

async fn submit_form(
    State(state): State<AppState>,
    form: Result<Form<LinkForm>, FormRejection>,
) -> Html<String> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!("Unreadable form submission: {}", rejection);
            LinkForm::default()
        }
    };

    let (files, error) = match form.cleaned() {
        None => {
            tracing::warn!("Invalid form submitted");
            (Vec::new(), Some(INVALID_FORM.to_string()))
        }
        Some(link) => match list_link(&state, link).await {
            Ok(files) => (files, None),
            Err(e) => {
                tracing::error!("Listing failed for '{}': {}", link, e);
                (Vec::new(), Some(e.to_string()))
            }
        },
    };

    render_listing(
        &state.config.server_name,
        &form.public_key,
        &files,
        error.as_deref(),
    )
}

async fn list_link(state: &AppState, link: &str) -> Result<Vec<FileEntry>, DiskError> {
    let key = extract_public_key(link).ok_or(DiskError::InvalidLink)?;
    state.disk.list_public(&key).await
}
