use accessibility_widget::types::errors::*;
use accessibility_widget::types::notice::{Notice, NoticeKind};

// === StorageError Tests ===

#[test]
fn storage_error_display_variants() {
    assert_eq!(
        StorageError::Unavailable("disabled".to_string()).to_string(),
        "Storage unavailable: disabled"
    );
    assert_eq!(
        StorageError::ReadFailed("locked".to_string()).to_string(),
        "Storage read failed: locked"
    );
    assert_eq!(
        StorageError::WriteFailed("quota".to_string()).to_string(),
        "Storage write failed: quota"
    );
}

#[test]
fn storage_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StorageError::Unavailable("x".to_string()));
    assert!(err.source().is_none());
}

// === SpeechError / PlaybackError Tests ===

#[test]
fn speech_error_maps_to_playback_error() {
    assert_eq!(PlaybackError::from(SpeechError::Unavailable), PlaybackError::SpeechUnavailable);
    assert_eq!(
        PlaybackError::from(SpeechError::SpeakFailed("busy".to_string())),
        PlaybackError::EngineFailed("busy".to_string())
    );
}

#[test]
fn playback_error_display_variants() {
    assert_eq!(
        PlaybackError::NoReadableContent.to_string(),
        "No readable text was found on this page"
    );
    assert_eq!(
        PlaybackError::EngineFailed("network".to_string()).to_string(),
        "Reading stopped because of a speech error: network"
    );
}

#[test]
fn notices_only_for_user_facing_failures() {
    let notice = Notice::from_playback_error(&PlaybackError::NoReadableContent).unwrap();
    assert_eq!(notice.kind, NoticeKind::NoReadableContent);
    assert_eq!(notice.message, "No readable text was found on this page");

    let notice = Notice::from_playback_error(&PlaybackError::EngineFailed("x".to_string())).unwrap();
    assert_eq!(notice.kind, NoticeKind::SpeechFailed);

    assert!(Notice::from_playback_error(&PlaybackError::SpeechUnavailable).is_none());
}

// === ConfigError Tests ===

#[test]
fn config_error_display_variants() {
    assert_eq!(
        ConfigError::IoError("denied".to_string()).to_string(),
        "Config I/O error: denied"
    );
    assert_eq!(
        ConfigError::SerializationError("eof".to_string()).to_string(),
        "Config serialization error: eof"
    );
    assert_eq!(
        ConfigError::InvalidValue("pitch".to_string()).to_string(),
        "Invalid config value: pitch"
    );
}
