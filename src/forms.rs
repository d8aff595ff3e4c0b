//! Request body reading for the content endpoints.
//!
//! Create and update routes accept either a JSON document or a
//! `multipart/form-data` submission carrying an image alongside the text
//! fields. Both shapes funnel into the same input struct: multipart text
//! parts are coerced into JSON values (so `"3"` becomes a number and a
//! serialized object becomes an object), image parts are written to disk
//! and replaced by their public path.

use actix_multipart::Multipart;
use actix_web::{web, HttpRequest};
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{AppError, ValidationErrors};
use crate::storage::{Storage, MAX_UPLOAD_BYTES};

/// A multipart part that is an uploaded image rather than a text field.
pub struct FileField {
    pub name: &'static str,
    pub category: &'static str,
}

impl FileField {
    pub const fn new(name: &'static str, category: &'static str) -> Self {
        Self { name, category }
    }
}

pub async fn read_input<T: DeserializeOwned>(
    req: &HttpRequest,
    payload: web::Payload,
    files: &[FileField],
    storage: &Storage,
) -> Result<T, AppError> {
    let content_type = req
        .headers()
        .get("Content-Type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("multipart/form-data") {
        read_multipart(req, payload, files, storage).await
    } else {
        read_json(payload).await
    }
}

async fn read_json<T: DeserializeOwned>(mut payload: web::Payload) -> Result<T, AppError> {
    let mut body = Vec::new();
    while let Some(chunk) = payload.next().await {
        let chunk =
            chunk.map_err(|_| AppError::BadRequest("Invalid request body".to_string()))?;
        if body.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::BadRequest("Request body too large".to_string()));
        }
        body.extend_from_slice(&chunk);
    }

    serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("Invalid request body".to_string()))
}

async fn read_multipart<T: DeserializeOwned>(
    req: &HttpRequest,
    payload: web::Payload,
    files: &[FileField],
    storage: &Storage,
) -> Result<T, AppError> {
    let mut multipart = Multipart::new(req.headers(), payload);
    let mut document = Map::new();

    while let Some(field) = multipart.next().await {
        let mut field =
            field.map_err(|_| AppError::BadRequest("Invalid multipart body".to_string()))?;

        let name = match field.name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        if let Some(file) = files.iter().find(|f| f.name == name) {
            let is_image = field
                .content_type()
                .map(|mime| mime.type_().as_str() == "image")
                .unwrap_or(false);
            if !is_image {
                return Err(ValidationErrors::single(
                    &name,
                    format!("The {} must be an image.", name),
                ));
            }

            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .unwrap_or("upload.bin")
                .to_string();

            let mut bytes = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk
                    .map_err(|_| AppError::BadRequest("Invalid multipart body".to_string()))?;
                if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                    return Err(ValidationErrors::single(
                        &name,
                        format!("The {} may not be greater than 2048 kilobytes.", name),
                    ));
                }
                bytes.extend_from_slice(&chunk);
            }

            // An empty part means the client kept the existing image.
            if bytes.is_empty() {
                continue;
            }

            let path = storage.store(file.category, &filename, &bytes)?;
            document.insert(name, Value::String(path));
        } else {
            let mut bytes = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk
                    .map_err(|_| AppError::BadRequest("Invalid multipart body".to_string()))?;
                if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                    return Err(AppError::BadRequest("Request body too large".to_string()));
                }
                bytes.extend_from_slice(&chunk);
            }

            let text = String::from_utf8(bytes)
                .map_err(|_| AppError::BadRequest("Invalid multipart body".to_string()))?;

            // Numbers and embedded JSON objects arrive as strings over
            // multipart; parse them back into structure when possible.
            let value = serde_json::from_str::<Value>(&text)
                .unwrap_or_else(|_| Value::String(text));
            document.insert(name, value);
        }
    }

    serde_json::from_value(Value::Object(document))
        .map_err(|_| AppError::BadRequest("Invalid request body".to_string()))
}
