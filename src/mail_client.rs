//! Hand-off of composed messages to the system mail client.
//!
//! The webview refuses `mailto:` navigations, so the URI goes to the OS
//! from the host process.

use std::io;

use portfolio_core::MailtoRequest;

/// Open `request` with `opener`. Failures are logged, never surfaced.
///
/// Returns whether the opener accepted the URI.
pub fn hand_off<F>(request: &MailtoRequest, opener: F) -> bool
where
    F: FnOnce(&str) -> io::Result<()>,
{
    let uri = request.to_uri();
    match opener(&uri) {
        Ok(()) => {
            tracing::info!(recipient = %request.recipient, "Handed contact form to mail client");
            true
        }
        Err(e) => {
            tracing::warn!("Failed to open mail client: {}", e);
            false
        }
    }
}

/// Open `request` in the user's default mail client
pub fn open_mail_client(request: &MailtoRequest) -> bool {
    hand_off(request, webbrowser::open)
}
