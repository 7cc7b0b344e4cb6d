use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::server::error::{validation::ValidationError, Error};

/// `axum::Json` whose rejections are answered as a 400 `{field: message}` map.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ValidatedJson<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        let field = match &rejection {
            JsonRejection::JsonDataError(_) => rejected_field(&message).unwrap_or("body"),
            _ => "body",
        };

        ValidationError::field(field, &message).into()
    }
}

/// Field name quoted by serde in messages such as ``missing field `name` ``.
fn rejected_field(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once("field `")?;
    let (field, _) = rest.split_once('`')?;

    Some(field)
}
