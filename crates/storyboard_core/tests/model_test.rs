//! Tests for request, outcome and asset types.

use storyboard_core::{
    BatchProgress, GenerationRequest, ImageFormat, ImageOutcome, SvgAsset,
};
use storyboard_error::GenerationErrorKind;

#[test]
fn test_new_request_clamps_temperature() {
    let request = GenerationRequest::new("prompt", 3.0);
    assert_eq!(*request.temperature(), 1.0);

    let request = GenerationRequest::new("prompt", -1.0);
    assert_eq!(*request.temperature(), 0.0);
}

#[test]
fn test_builder_rejects_out_of_range_temperature() {
    let result = GenerationRequest::builder()
        .prompt("prompt")
        .temperature(1.2)
        .build();

    assert!(result.is_err());
}

#[test]
fn test_builder_defaults() {
    let request = GenerationRequest::builder().prompt("prompt").build().unwrap();

    assert_eq!(request.model_hint(), &None);
    assert_eq!(*request.temperature(), 0.7);
}

#[test]
fn test_model_hint_setter() {
    let request = GenerationRequest::new("prompt", 0.3).with_model_hint(Some("gemini-2.5-pro"));
    assert_eq!(request.model_hint().as_deref(), Some("gemini-2.5-pro"));
}

#[test]
fn test_failure_outcome_displays_placeholder() {
    let placeholder = SvgAsset::new("<svg></svg>");
    let outcome = ImageOutcome::Failure {
        kind: GenerationErrorKind::Timeout,
        user_message: "Image generation took too long.".to_string(),
        placeholder: placeholder.clone(),
    };

    assert!(!outcome.is_success());
    assert_eq!(outcome.displayable(), &placeholder);
    assert_eq!(outcome.format(), ImageFormat::Svg);
    assert_eq!(outcome.user_message(), Some("Image generation took too long."));
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let outcome = ImageOutcome::Success {
        asset: SvgAsset::new("<svg></svg>"),
        model_used: "gemini-2.5-flash".to_string(),
    };

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["asset"], "<svg></svg>");
}

#[test]
fn test_data_uri_is_base64() {
    let asset = SvgAsset::new("<svg/>");
    assert_eq!(asset.to_data_uri(), "data:image/svg+xml;base64,PHN2Zy8+");
}

#[test]
fn test_progress_processed() {
    let progress = BatchProgress {
        total: 3,
        completed: 2,
        failed: 1,
        current_shot: None,
    };
    assert_eq!(progress.processed(), 3);
}
