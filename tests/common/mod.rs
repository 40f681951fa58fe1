#![allow(dead_code)]

use axum_test::TestServer;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use cutoff_predictor::infrastructure::persistence::{
    CsvCredentialRepository, CsvFeedbackRepository, load_admissions,
};
use cutoff_predictor::routes::app_router;
use cutoff_predictor::state::AppState;

/// Small dataset: IIT ALPHA / CSE / GEN / Male has closing ranks 100 and 120.
pub const DATASET: &str = "\
NAME,COURSE,CATEGORY,GENDER,YEAR,CLOSE RANK
IIT ALPHA,CSE,GEN,Male,2019,100
IIT ALPHA,CSE,GEN,Male,2020,120
IIT ALPHA,CSE,OBC,Male,2020,300
IIT ALPHA,CSE,GEN,Female,2020,200
IIT BETA,ECE,SC,Female,2021,5000
";

/// Temporary directory holding the dataset and both stores.
pub struct TestContext {
    pub dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Data.csv"), DATASET).unwrap();
        Self { dir }
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.dir.path().join("Data.csv")
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.dir.path().join("Login.csv")
    }

    pub fn feedback_path(&self) -> PathBuf {
        self.dir.path().join("Feedback.csv")
    }

    /// Writes the credential file with the given rows under its header.
    pub fn seed_credentials(&self, rows: &[(&str, &str)]) {
        let mut content = String::from("number,password\n");
        for (number, password) in rows {
            content.push_str(&format!("{number},{password}\n"));
        }
        std::fs::write(self.credentials_path(), content).unwrap();
    }

    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    /// Builds the application state the same way the server does.
    pub fn state(&self) -> AppState {
        let table = load_admissions(&self.dataset_path()).unwrap();

        let credentials = CsvCredentialRepository::new(self.credentials_path());
        credentials.ensure_exists().unwrap();

        AppState::from_parts(
            table,
            credentials,
            CsvFeedbackRepository::new(self.feedback_path()),
        )
    }

    /// State whose credential "file" is a directory, so every read fails.
    pub fn state_with_broken_credentials(&self) -> AppState {
        std::fs::create_dir_all(self.credentials_path()).unwrap();
        let table = load_admissions(&self.dataset_path()).unwrap();

        AppState::from_parts(
            table,
            CsvCredentialRepository::new(self.credentials_path()),
            CsvFeedbackRepository::new(self.feedback_path()),
        )
    }

    /// Full application router over [`TestContext::state`].
    pub fn server(&self) -> TestServer {
        TestServer::new(app_router(self.state(), self.dir.path())).unwrap()
    }
}
