//! Form bodies submitted by the HTML pages.
//!
//! Login and registration fields are required but otherwise unconstrained:
//! their rules are business outcomes decided by
//! [`crate::application::services::AuthService`], not request validation.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::ChartQuery;
use crate::domain::query::Selection;

/// `POST /` body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub number: String,
    pub password: String,
}

/// `GET /` query string; `registered` is set after a successful registration.
#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub registered: Option<String>,
}

/// `POST /register` body.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub number: String,
    pub password: String,
    pub confirm_password: String,
}

/// `POST /submit_feedback` body. Missing fields are stored as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    pub seat: String,
    #[serde(default)]
    pub feedback: String,
}

/// `POST /display_graph` body.
///
/// `category` and `gender` accept the `none` sentinel; when omitted they
/// default to it.
#[derive(Debug, Deserialize, Validate)]
pub struct GraphForm {
    #[validate(length(min = 1, message = "College is required"))]
    pub college: String,

    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,

    #[serde(default = "none_sentinel")]
    pub category: String,

    #[serde(default = "none_sentinel")]
    pub gender: String,
}

fn none_sentinel() -> String {
    crate::domain::query::ANY_SENTINEL.to_string()
}

impl GraphForm {
    pub fn to_query(&self) -> ChartQuery {
        ChartQuery {
            college: self.college.clone(),
            course: self.course.clone(),
            category: Selection::parse(&self.category),
            gender: Selection::parse(&self.gender),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_form_defaults_to_sentinel() {
        let form: GraphForm =
            serde_json::from_value(serde_json::json!({"college": "IIT X", "course": "CS"}))
                .unwrap();

        let query = form.to_query();
        assert!(query.category.is_any());
        assert!(query.gender.is_any());
    }

    #[test]
    fn test_graph_form_requires_college() {
        let form = GraphForm {
            college: String::new(),
            course: "CS".to_string(),
            category: "none".to_string(),
            gender: "none".to_string(),
        };

        assert!(form.validate().is_err());
    }
}
