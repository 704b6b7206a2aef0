use super::*;

#[test]
fn test_compilation_error_display() {
    let error = TemplateError::Compilation {
        message: "unclosed block".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Template compilation failed: unclosed block"
    );
}

#[test]
fn test_error_debug_format() {
    let error = TemplateError::NotRegistered("style.css".to_string());
    let debug_output = format!("{error:?}");
    assert!(debug_output.contains("NotRegistered"));
    assert!(debug_output.contains("style.css"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TemplateError>();
}

#[test]
fn test_missing_variable_error_display() {
    let error = TemplateError::MissingVariable {
        variable: "text_domain".to_string(),
    };
    assert_eq!(error.to_string(), "Template variable missing: text_domain");
}

#[test]
fn test_too_large_error_display() {
    let error = TemplateError::TooLarge {
        size: 2048,
        limit: 1024,
    };
    assert_eq!(
        error.to_string(),
        "Template size 2048 bytes exceeds limit of 1024 bytes"
    );
}
