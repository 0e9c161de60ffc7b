//! Opening URLs and applications on the host.

use std::io;
use tracing::info;

/// Opens a URL or program name with the platform's default handler.
///
/// Launching is fire-and-forget: success only means the handler was
/// started.
#[cfg_attr(test, mockall::automock)]
pub trait UrlLauncher: Send + Sync {
    fn launch(&self, target: &str) -> io::Result<()>;
}

/// Launcher backed by the desktop's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl UrlLauncher for SystemLauncher {
    fn launch(&self, target: &str) -> io::Result<()> {
        info!(target = %target, "Opening");
        open::that_detached(target)
    }
}

/// Launcher for headless hosts: records the request in the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlyLauncher;

impl UrlLauncher for LogOnlyLauncher {
    fn launch(&self, target: &str) -> io::Result<()> {
        info!(target = %target, "Launch requested (launcher disabled)");
        Ok(())
    }
}

/// Google web search URL for `term`.
pub fn google_search_url(term: &str) -> String {
    format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(term)
    )
}

/// YouTube search URL for `term`.
pub fn youtube_search_url(term: &str) -> String {
    format!(
        "https://www.youtube.com/results?search_query={}",
        urlencoding::encode(term)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_urls_are_encoded() {
        assert_eq!(
            google_search_url("rust async book"),
            "https://www.google.com/search?q=rust%20async%20book"
        );
        assert_eq!(
            youtube_search_url("lofi & chill"),
            "https://www.youtube.com/results?search_query=lofi%20%26%20chill"
        );
    }

    #[test]
    fn test_log_only_launcher_succeeds() {
        assert!(LogOnlyLauncher.launch("https://example.com").is_ok());
    }
}
