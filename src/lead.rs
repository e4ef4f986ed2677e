use chrono::{DateTime, Utc};
use serde::Serialize;

/// Contact details captured by the opt-in form.
///
/// Built transiently at submit time and handed off to the mailing-list
/// backend as a form-encoded POST; nothing is kept locally once the request
/// is dispatched.
#[derive(Debug, Clone, Serialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub timestamp: DateTime<Utc>,
}

impl Lead {
    /// Stamps the lead with the client clock.
    pub fn new(name: String, email: String) -> Self {
        Self {
            name,
            email,
            timestamp: Utc::now(),
        }
    }

    /// Encodes the `application/x-www-form-urlencoded` body for the outbound
    /// POST. The backend script reads exactly these three fields.
    pub fn to_form_body(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

/// Lifecycle of one form instance. There is deliberately no failure state:
/// the response is opaque, so a dispatched request counts as delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
}

impl SubmissionStatus {
    /// The submit control is disabled exactly while a request is in flight,
    /// which is also what keeps each instance to one submission at a time.
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use claims::assert_ok;

    use super::*;

    fn decode(body: &str) -> Vec<(String, String)> {
        serde_urlencoded::from_str(body).unwrap()
    }

    #[test]
    fn body_carries_exactly_name_email_timestamp() {
        let lead = Lead::new("Robert T.".to_string(), "robert@example.com".to_string());
        let body = assert_ok!(lead.to_form_body());
        let keys: Vec<String> = decode(&body).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["name", "email", "timestamp"]);
    }

    #[test]
    fn body_timestamp_parses_as_a_datetime() {
        let lead = Lead::new("Susan M.".to_string(), "susan@example.com".to_string());
        let body = lead.to_form_body().unwrap();
        let pairs = decode(&body);
        let (_, stamp) = pairs.iter().find(|(k, _)| k == "timestamp").unwrap();
        assert_ok!(DateTime::parse_from_rfc3339(stamp));
    }

    #[test]
    fn reserved_characters_survive_encoding() {
        let lead = Lead::new("Bob & Sue".to_string(), "bob+sue@example.com".to_string());
        let pairs = decode(&lead.to_form_body().unwrap());
        assert_eq!(pairs[0].1, "Bob & Sue");
        assert_eq!(pairs[1].1, "bob+sue@example.com");
    }

    #[test]
    fn only_submitting_disables_the_submit_control() {
        assert!(SubmissionStatus::Submitting.is_submitting());
        assert!(!SubmissionStatus::Idle.is_submitting());
        assert!(!SubmissionStatus::Success.is_submitting());
    }
}
