//! Blocking HTTP GET into memory.
//!
//! Uses the curl crate (libcurl). The whole body is buffered so callers can
//! decide whether to touch the disk only after the status is known.

use crate::config::FetchOptions;
use crate::error::FetchError;

/// Performs one GET and returns the response body. Non-2xx statuses are
/// returned as `FetchError::Http` and their body is discarded.
/// Runs in the current thread.
pub fn get(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.useragent(&opts.user_agent)?;
    if opts.follow_redirects {
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
    }
    if let Some(d) = opts.connect_timeout() {
        easy.connect_timeout(d)?;
    }
    if let Some(d) = opts.timeout() {
        easy.timeout(d)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        tracing::debug!("GET {} returned HTTP {}", url, code);
        return Err(FetchError::Http(code));
    }
    Ok(body)
}
