//! Live strength scoring for `#password`.

use web_sys::{Document, Event, HtmlInputElement};

use super::dom;
use crate::config::UiConfig;
use crate::consts::PASSWORD_FIELD_ID;
use crate::error::UiError;
use crate::password::{MAX_SCORE, score};

pub fn install(document: &Document, _config: &UiConfig) -> Result<(), UiError> {
    let Some(field) = dom::by_id::<HtmlInputElement>(document, PASSWORD_FIELD_ID) else {
        return Ok(());
    };
    let target = field.clone();
    dom::listen(&field, "input", move |_: Event| {
        let strength = score(&target.value());
        log::debug!("password: strength {strength}/{MAX_SCORE}");
    })
}
