//! AI service stand-in: deterministic text and image URLs from keywords.

use axum::{http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
pub struct Keywords {
    pub keywords: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/api/generate-description", post(generate_description))
        .route("/api/generate-image", post(generate_image))
}

/// Lowercase words joined by `-`, other characters dropped.
pub fn slug(keywords: &str) -> String {
    keywords
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

async fn generate_description(Json(input): Json<Keywords>) -> Result<String, StatusCode> {
    let keywords = input.keywords.trim();
    if keywords.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(format!(
        "Introducing the {keywords}: thoughtfully designed for everyday use and built to last."
    ))
}

async fn generate_image(Json(input): Json<Keywords>) -> Result<Json<Value>, StatusCode> {
    let slug = slug(&input.keywords);
    if slug.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(Json(json!({
        "imageUrl": format!("https://images.example.com/generated/{slug}.png")
    })))
}
