use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::error::CompatError;

/// Raw-wikitext endpoint for the compatibility list.
pub const COMPAT_LIST_URL: &str =
    "https://www.psdevwiki.com/ps3/index.php?title=PS2_Classics_Emulator_Compatibility_List&action=raw";

/// The wiki rejects requests carrying a default library User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn fetch_client() -> Result<Client, CompatError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

/// Download the raw document as text, failing on any non-2xx status.
pub fn fetch_document(client: &Client, url: &str) -> Result<String, CompatError> {
    tracing::debug!(url, "fetching compatibility list");
    let response = client
        .get(url)
        .header(ACCEPT, "text/plain")
        .send()?
        .error_for_status()?;
    Ok(response.text()?)
}
