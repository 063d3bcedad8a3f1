//! AI generation client.

use serde::{Deserialize, Serialize};

use super::{check_status, decode, json_request, trim_base, APPLICATION_JSON, TEXT_PLAIN};
use crate::error::{ApiError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[derive(Serialize)]
struct Keywords<'a> {
    keywords: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedImage {
    image_url: String,
}

/// Builds and parses requests for the keyword-driven generators.
///
/// Description generation answers with a plain-text body; image generation
/// answers `{"imageUrl": "..."}`.
#[derive(Debug, Clone)]
pub struct AiClient {
    base_url: String,
}

impl AiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: trim_base(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_generate_description(&self, keywords: &str) -> Result<HttpRequest, ApiError> {
        json_request(
            Operation::GenerateDescription,
            HttpMethod::Post,
            format!("{}/api/generate-description", self.base_url),
            TEXT_PLAIN,
            &Keywords { keywords },
        )
    }

    pub fn build_generate_image(&self, keywords: &str) -> Result<HttpRequest, ApiError> {
        json_request(
            Operation::GenerateImage,
            HttpMethod::Post,
            format!("{}/api/generate-image", self.base_url),
            APPLICATION_JSON,
            &Keywords { keywords },
        )
    }

    /// The response body, verbatim.
    pub fn parse_generate_description(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(Operation::GenerateDescription, &response)?;
        Ok(response.body)
    }

    pub fn parse_generate_image(&self, response: HttpResponse) -> Result<String, ApiError> {
        let generated: GeneratedImage = decode(Operation::GenerateImage, response)?;
        Ok(generated.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AiClient {
        AiClient::new("http://localhost:3080")
    }

    #[test]
    fn build_generate_description_produces_correct_request() {
        let req = client().build_generate_description("ceramic mug").unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3080/api/generate-description");
        assert!(req
            .headers
            .contains(&("accept".to_string(), "text/plain".to_string())));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"keywords": "ceramic mug"}));
    }

    #[test]
    fn build_generate_image_produces_correct_request() {
        let req = client().build_generate_image("ceramic mug").unwrap();
        assert_eq!(req.url, "http://localhost:3080/api/generate-image");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["keywords"], "ceramic mug");
    }

    #[test]
    fn description_is_returned_verbatim() {
        let text = "A sturdy mug.\nDishwasher safe.";
        let description = client()
            .parse_generate_description(HttpResponse::new(200, text))
            .unwrap();
        assert_eq!(description, text);
    }

    #[test]
    fn image_url_is_extracted() {
        let url = client()
            .parse_generate_image(HttpResponse::new(200, r#"{"imageUrl":"https://cdn/img.png"}"#))
            .unwrap();
        assert_eq!(url, "https://cdn/img.png");
    }

    #[test]
    fn image_response_without_url_is_a_decode_error() {
        let err = client()
            .parse_generate_image(HttpResponse::new(200, r#"{"url":"x"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(err.to_string(), "Failed to generate image");
    }

    #[test]
    fn generation_failures_are_generic() {
        let err = client()
            .parse_generate_description(HttpResponse::new(500, "model offline"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate description");
        let err = client()
            .parse_generate_image(HttpResponse::new(429, ""))
            .unwrap_err();
        assert_eq!(err.status(), Some(429));
    }
}
