//! Plain-text resume download.
use adventure_game::ResumeProfile;
use thiserror::Error;

use crate::dom;

pub const SUCCESS_NOTICE: &str = "📋 Resume downloaded successfully! Thank you for playing!";
pub const FAILURE_NOTICE: &str = "Sorry, there was an error downloading the resume.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DownloadError {
    #[error("Download error: {0}")]
    Browser(String),
}

/// Hand the rendered resume to the browser as a `.txt` download.
///
/// # Errors
/// Returns [`DownloadError::Browser`] when any DOM step fails.
pub fn save_resume(profile: &ResumeProfile) -> Result<(), DownloadError> {
    dom::download_text(&profile.download_file_name(), &profile.render_text())
        .map_err(|err| DownloadError::Browser(dom::js_error_message(&err)))
}

/// Download, then confirm with an alert after `notice_ms`.
#[cfg(target_arch = "wasm32")]
pub fn download_with_notice(profile: &ResumeProfile, notice_ms: u32) {
    match save_resume(profile) {
        Ok(()) => {
            log::info!("Resume saved as {}", profile.download_file_name());
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = dom::sleep_ms(notice_ms).await {
                    log::warn!("Download notice skipped: {}", dom::js_error_message(&err));
                    return;
                }
                dom::alert(SUCCESS_NOTICE);
            });
        }
        Err(err) => {
            log::error!("{err}");
            dom::alert(FAILURE_NOTICE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_names_the_failure() {
        let err = DownloadError::Browser(String::from("blocked"));
        assert_eq!(err.to_string(), "Download error: blocked");
    }
}
