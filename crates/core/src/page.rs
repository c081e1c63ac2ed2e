//! Page model, its list projection, the write payload, and the outcome
//! envelope used for responses that carry no page.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Entity name used in [`CoreError::NotFound`].
pub const PAGE_ENTITY: &str = "Page";

/// Description for a lookup that matched no page.
pub const MSG_NOT_FOUND: &str = "Not found";

/// Description for a write with a missing or empty field.
pub const MSG_EMPTY_PARAMETER: &str = "One or more parameter is empty";

/// Description for a request body that could not be decoded as a form.
pub const MSG_FORM_PARSE: &str = "Error parsing form";

/// A stored page.
///
/// `id` and `date` are fixed at creation; only `name`, `img` and `text`
/// change on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: DbId,
    pub name: String,
    pub img: String,
    pub text: String,
    /// Creation time.
    pub date: Timestamp,
}

/// List projection of a [`Page`]. Leaves out `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: DbId,
    pub name: String,
    pub img: String,
    pub date: Timestamp,
}

impl From<&Page> for PageSummary {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id,
            name: page.name.clone(),
            img: page.img.clone(),
            date: page.date,
        }
    }
}

/// Fields supplied by a create or update request.
///
/// Missing form fields deserialize to empty strings so they fail
/// [`PageInput::validate`] rather than form decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "image")]
    pub img: String,
    #[serde(default)]
    pub text: String,
}

impl PageInput {
    pub fn new(name: impl Into<String>, img: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            img: img.into(),
            text: text.into(),
        }
    }

    /// Reject the input if any field is empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() || self.img.is_empty() || self.text.is_empty() {
            return Err(CoreError::Validation(MSG_EMPTY_PARAMETER.to_string()));
        }
        Ok(())
    }
}

/// Outcome envelope for responses that are not a page or a page list.
///
/// Serializes as `{"result": "...", "errorDesc": "..."}`, with `errorDesc`
/// omitted when there is no description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub result: String,
    #[serde(
        rename = "errorDesc",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub error_desc: Option<String>,
}

impl OperationResult {
    pub const ERROR: &'static str = "Error";

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            result: Self::ERROR.to_string(),
            error_desc: Some(description.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn sample_page() -> Page {
        Page {
            id: 7,
            name: "Home".to_string(),
            img: "home.png".to_string(),
            text: "welcome".to_string(),
            date: chrono::Utc::now(),
        }
    }

    #[test]
    fn validate_accepts_complete_input() {
        assert!(PageInput::new("n", "i", "t").validate().is_ok());
    }

    #[test]
    fn validate_rejects_each_empty_field() {
        for input in [
            PageInput::new("", "img", "txt"),
            PageInput::new("n", "", "t"),
            PageInput::new("n", "i", ""),
        ] {
            assert_matches!(
                input.validate(),
                Err(CoreError::Validation(msg)) if msg == MSG_EMPTY_PARAMETER
            );
        }
    }

    #[test]
    fn summary_json_has_no_text() {
        let page = sample_page();
        let json = serde_json::to_value(PageSummary::from(&page)).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Home");
        assert_eq!(json["img"], "home.png");
        assert!(json.get("text").is_none());
        assert!(json["date"].is_string());
    }

    #[test]
    fn page_json_field_names() {
        let json = serde_json::to_value(sample_page()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["date", "id", "img", "name", "text"]);
    }

    #[test]
    fn operation_result_omits_missing_description() {
        let bare = OperationResult {
            result: "Deleted".to_string(),
            error_desc: None,
        };
        let json = serde_json::to_value(bare).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "Deleted" }));

        let json = serde_json::to_value(OperationResult::error(MSG_NOT_FOUND)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "result": "Error", "errorDesc": "Not found" })
        );
    }

    #[test]
    fn input_accepts_image_alias_and_missing_fields() {
        let input: PageInput =
            serde_json::from_value(serde_json::json!({ "name": "a", "image": "b" })).unwrap();
        assert_eq!(input, PageInput::new("a", "b", ""));
    }
}
