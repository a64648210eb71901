//! Request body decoding for `POST /generate-pdf`.
//!
//! The booking form posts the quotation JSON as a `data` field, either
//! url-encoded or as multipart. API clients may post the JSON directly.
//! A `theme` may come as a form field or a query parameter; the form field
//! wins.

use axum::extract::{FromRequest, Multipart, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use serde::Deserialize;

use flightquote_core::models::quotation::Quotation;
use flightquote_export::styles::ThemeName;

use crate::error::ApiError;

const DATA_FIELD: &str = "data";
const THEME_FIELD: &str = "theme";

#[derive(Debug)]
pub struct QuotationRequest {
    pub quotation: Quotation,
    pub theme: Option<ThemeName>,
}

#[derive(Debug, Default, Deserialize)]
struct FormFields {
    data: Option<String>,
    theme: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ThemeQuery {
    theme: Option<String>,
}

impl<S> FromRequest<S> for QuotationRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ThemeQuery>::try_from_uri(req.uri())
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let fields = if content_type.starts_with("application/json") {
            let body = String::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            FormFields {
                data: Some(body),
                theme: None,
            }
        } else if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            multipart_fields(multipart).await?
        } else {
            let Form(fields) = Form::<FormFields>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            fields
        };

        let data = fields
            .data
            .filter(|data| !data.trim().is_empty())
            .ok_or_else(|| ApiError::BadRequest(format!("missing `{DATA_FIELD}` field")))?;
        let quotation = Quotation::from_json(&data)?;

        let theme = fields
            .theme
            .or(query.theme)
            .filter(|theme| !theme.trim().is_empty())
            .map(|theme| theme.parse::<ThemeName>())
            .transpose()?;

        Ok(Self { quotation, theme })
    }
}

async fn multipart_fields(mut multipart: Multipart) -> Result<FormFields, ApiError> {
    let mut fields = FormFields::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        let target = match field.name() {
            Some(DATA_FIELD) => &mut fields.data,
            Some(THEME_FIELD) => &mut fields.theme,
            _ => continue,
        };
        let text = field
            .text()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        *target = Some(text);
    }
    Ok(fields)
}
