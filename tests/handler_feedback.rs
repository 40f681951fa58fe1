mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use cutoff_predictor::infrastructure::persistence::{
    CsvCredentialRepository, CsvFeedbackRepository, load_admissions,
};
use cutoff_predictor::routes::app_router;
use cutoff_predictor::state::AppState;

#[tokio::test]
async fn test_feedback_creates_file_with_header() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/submit_feedback")
        .form(&[("seat", "A12"), ("feedback", "great, thanks")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/home");
    assert_eq!(
        ctx.read(&ctx.feedback_path()),
        "SEAT,FEEDBACK\nA12,\"great, thanks\"\n"
    );
}

#[tokio::test]
async fn test_feedback_missing_fields_stored_empty() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    server
        .post("/submit_feedback")
        .form(&[("seat", "B7")])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    assert_eq!(ctx.read(&ctx.feedback_path()), "SEAT,FEEDBACK\nB7,\n");
}

#[tokio::test]
async fn test_feedback_appends_in_order() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    for seat in ["1", "2"] {
        server
            .post("/submit_feedback")
            .form(&[("seat", seat), ("feedback", "ok")])
            .await;
    }

    assert_eq!(
        ctx.read(&ctx.feedback_path()),
        "SEAT,FEEDBACK\n1,ok\n2,ok\n"
    );
}

#[tokio::test]
async fn test_feedback_write_failure_still_redirects() {
    let ctx = common::TestContext::new();
    std::fs::create_dir_all(ctx.feedback_path()).unwrap();

    let credentials = CsvCredentialRepository::new(ctx.credentials_path());
    credentials.ensure_exists().unwrap();
    let state = AppState::from_parts(
        load_admissions(&ctx.dataset_path()).unwrap(),
        credentials,
        CsvFeedbackRepository::new(ctx.feedback_path()),
    );
    let server = TestServer::new(app_router(state, ctx.dir.path())).unwrap();

    let response = server
        .post("/submit_feedback")
        .form(&[("seat", "A1"), ("feedback", "lost")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/home");
}
