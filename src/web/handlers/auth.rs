//! Login and registration pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::services::{LoginOutcome, RegistrationOutcome};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{LoginForm, LoginQuery, RegisterForm};

const STORE_UNAVAILABLE: &str =
    "The account store is temporarily unavailable. Please try again later.";

/// Template for the login page.
///
/// `message` carries a failed-login reason, `success_message` the banner
/// shown after a registration.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    message: String,
    success_message: String,
}

impl LoginTemplate {
    fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success_message: String::new(),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
struct RegisterTemplate {
    message: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /`
pub async fn login_page_handler(Query(query): Query<LoginQuery>) -> impl IntoResponse {
    let success_message = match query.registered {
        Some(_) => RegistrationOutcome::Created.message().to_string(),
        None => String::new(),
    };

    LoginTemplate {
        message: String::new(),
        success_message,
    }
}

/// Verifies submitted credentials.
///
/// # Endpoint
///
/// `POST /`
///
/// # Responses
///
/// - `303 See Other` to `/home` on success
/// - `200 OK` login page with the failure reason otherwise
/// - `503 Service Unavailable` if the credential store cannot be read
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.auth_service.verify(&form.number, &form.password).await {
        Ok(LoginOutcome::Success) => Redirect::to("/home").into_response(),
        Ok(outcome) => LoginTemplate::with_message(outcome.message()).into_response(),
        Err(e) => unavailable(e, LoginTemplate::with_message(STORE_UNAVAILABLE)),
    }
}

/// Renders the registration page.
///
/// # Endpoint
///
/// `GET /register`
pub async fn register_page_handler() -> impl IntoResponse {
    RegisterTemplate {
        message: String::new(),
    }
}

/// Creates an account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Responses
///
/// - `303 See Other` to `/?registered=1` when the account is created
/// - `200 OK` registration page with the rejection reason otherwise
/// - `503 Service Unavailable` if the credential store cannot be used
pub async fn register_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Response {
    let result = state
        .auth_service
        .register(&form.number, &form.password, &form.confirm_password)
        .await;

    match result {
        Ok(outcome) if outcome.is_created() => Redirect::to("/?registered=1").into_response(),
        Ok(outcome) => RegisterTemplate {
            message: outcome.message().to_string(),
        }
        .into_response(),
        Err(e) => unavailable(
            e,
            RegisterTemplate {
                message: STORE_UNAVAILABLE.to_string(),
            },
        ),
    }
}

fn unavailable(error: AppError, page: impl IntoResponse) -> Response {
    let status = match error.status() {
        StatusCode::SERVICE_UNAVAILABLE => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, page).into_response()
}
