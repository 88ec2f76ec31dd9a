//! The process-wide set is installed once; this file owns that one installation.

use colorlog::{ColorLog, SharedBuffer};

#[test]
fn macros_write_to_installed_set() {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let installed = colorlog::init(
        ColorLog::builder()
            .stdout(out.clone())
            .stderr(err.clone())
            .build(),
    );
    assert!(installed.is_ok());
    assert!(colorlog::is_initialized());

    colorlog::info!("started {}", "ok");
    colorlog::warning!("careful");
    colorlog::debug!("n = {}", 42);
    colorlog::error!("failed");

    let out = out.contents();
    assert!(out.contains("INFO:"));
    assert!(out.contains("started ok"));
    assert!(out.contains("careful"));
    assert!(out.contains("n = 42"));

    let err = err.contents();
    assert!(err.contains("global.rs:"), "{err:?}");
    assert!(err.ends_with("failed\n"));

    assert!(colorlog::init(ColorLog::new()).is_err());
}
