//! Input validators for CLI arguments.

/// Maximum accepted ticket ID length.
const MAX_TICKET_ID_LENGTH: usize = 64;

/// Validate a ticket ID argument.
///
/// Ticket IDs come from the feed, so the format is not ours to police;
/// this only rejects inputs that cannot possibly match anything.
pub fn validate_ticket_id(id: &str) -> Result<String, String> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err("Ticket ID cannot be empty".to_string());
    }
    if trimmed.len() > MAX_TICKET_ID_LENGTH {
        return Err(format!(
            "Ticket ID cannot exceed {MAX_TICKET_ID_LENGTH} characters"
        ));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err("Ticket ID cannot contain whitespace".to_string());
    }
    Ok(trimmed.to_string())
}

/// Validate an endpoint argument.
///
/// Only the scheme is checked; everything else is left to the HTTP client.
pub fn validate_endpoint(endpoint: &str) -> Result<String, String> {
    let trimmed = endpoint.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err("Endpoint must start with http:// or https://".to_string())
    }
}
