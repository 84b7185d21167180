/// Status reported by the validation endpoint when the token is accepted
const ACCEPTED_STATUS: &str = "200";
/// Number of trailing characters carrying the HTTP status
const STATUS_WIDTH: usize = 3;

/// ValidationResponse - body and status split out of the combined stream
///
/// The validation transport yields the response body with the three-digit
/// status appended, so the status is always the trailing three characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResponse {
    status: String,
    body: String,
}

impl ValidationResponse {
    pub fn parse(combined: &str) -> Self {
        let char_count = combined.chars().count();
        let split_at = combined
            .char_indices()
            .nth(char_count.saturating_sub(STATUS_WIDTH))
            .map(|(index, _)| index)
            .unwrap_or(combined.len());

        let (body, status) = combined.split_at(split_at);
        Self {
            status: status.to_string(),
            body: body.to_string(),
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_accepted(&self) -> bool {
        self.status == ACCEPTED_STATUS
    }
}
