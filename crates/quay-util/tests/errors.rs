use quay_util::errors::QuayError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = QuayError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_manifest_error_display() {
    let err = QuayError::Manifest {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: bad syntax");
}

#[test]
fn test_configuration_error_display() {
    let err = QuayError::configuration("repository 'acme' has an empty url");
    assert_eq!(
        err.to_string(),
        "Configuration error: repository 'acme' has an empty url"
    );
}

#[test]
fn test_missing_credential_names_slot() {
    let err = QuayError::MissingCredential {
        slot: "MAVEN_PASSWORD".to_string(),
    };
    assert_eq!(err.to_string(), "Missing MAVEN_PASSWORD environment variable");
}

#[test]
fn test_upload_error_display() {
    let err = QuayError::Upload {
        target: "acmeReleases".to_string(),
        message: "HTTP 401 Unauthorized".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Upload to acmeReleases failed: HTTP 401 Unauthorized"
    );
}

#[test]
fn test_generic_error_display() {
    let err = QuayError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let quay_err: QuayError = io_err.into();
    assert!(matches!(quay_err, QuayError::Io(_)));
}
