// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submitted form bodies and their conversion into API requests.

use axum::{body::Bytes, extract::Multipart};
use folio_api::{
    ApiError, ContactRequest, HeroImageRequest, HeroPhraseRequest, LoginRequest, NamedRequest,
    NewsRequest, parse_checkbox, parse_sort_order,
};
use serde::Deserialize;

use crate::error::HttpError;

/// Login form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl From<LoginForm> for LoginRequest {
    fn from(form: LoginForm) -> Self {
        Self {
            email: form.email,
            password: form.password,
        }
    }
}

/// Public contact form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(rename = "phone-number")]
    pub phone_number: String,
    pub message: String,
}

impl From<ContactForm> for ContactRequest {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone_number: Some(form.phone_number),
            message: form.message,
        }
    }
}

/// Category and tag create form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamedForm {
    pub name: String,
    pub sort_order: String,
}

impl TryFrom<NamedForm> for NamedRequest {
    type Error = ApiError;

    fn try_from(form: NamedForm) -> Result<Self, Self::Error> {
        Ok(Self {
            sort_order: parse_sort_order(Some(&form.sort_order))?,
            name: form.name,
        })
    }
}

/// Hero phrase create form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeroPhraseForm {
    pub text: String,
    pub is_published: Option<String>,
    pub sort_order: String,
}

impl TryFrom<HeroPhraseForm> for HeroPhraseRequest {
    type Error = ApiError;

    fn try_from(form: HeroPhraseForm) -> Result<Self, Self::Error> {
        Ok(Self {
            is_published: parse_checkbox(form.is_published.as_deref()),
            sort_order: parse_sort_order(Some(&form.sort_order))?,
            text: form.text,
        })
    }
}

/// News create form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewsForm {
    pub title: String,
    pub subtitle: String,
    pub url: String,
    pub interview_date: String,
}

impl From<NewsForm> for NewsRequest {
    fn from(form: NewsForm) -> Self {
        Self {
            title: form.title,
            subtitle: Some(form.subtitle),
            url: form.url,
            interview_date: form.interview_date,
        }
    }
}

/// Search box on the topic and contact lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub q: String,
}

/// An image chosen in a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// File name as sent by the browser.
    pub file_name: String,
    pub bytes: Bytes,
}

/// A multipart form: its text fields in order plus the `image` file.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub image: Option<UploadedImage>,
}

impl MultipartForm {
    /// Returns the first value submitted for `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Reads the hero image create fields.
    pub fn hero_image_request(&self) -> Result<HeroImageRequest, ApiError> {
        Ok(HeroImageRequest {
            alt_text: self.value("alt_text").map(str::to_string),
            is_published: parse_checkbox(self.value("is_published")),
            sort_order: parse_sort_order(self.value("sort_order"))?,
        })
    }
}

/// Reads a multipart body.
///
/// A file input left empty arrives with a blank file name and is treated
/// as no file.
///
/// # Errors
///
/// Returns a 400 error if the body is not valid multipart data.
pub async fn read_multipart(mut multipart: Multipart) -> Result<MultipartForm, HttpError> {
    let mut form: MultipartForm = MultipartForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::bad_request(e.body_text()))?
    {
        let name: String = field.name().unwrap_or_default().to_string();
        let file_name: Option<String> = field.file_name().map(str::to_string);

        match file_name {
            Some(file_name) => {
                let bytes: Bytes = field
                    .bytes()
                    .await
                    .map_err(|e| HttpError::bad_request(e.body_text()))?;
                if name == "image" && !file_name.is_empty() {
                    form.image = Some(UploadedImage { file_name, bytes });
                }
            }
            None => {
                let value: String = field
                    .text()
                    .await
                    .map_err(|e| HttpError::bad_request(e.body_text()))?;
                form.fields.push((name, value));
            }
        }
    }

    Ok(form)
}
