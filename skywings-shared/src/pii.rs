use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wrapper for passenger contact details that keeps them out of log output.
///
/// `Debug` and `Display` never print the wrapped value in full. Email-shaped
/// values keep their first character and domain (`j*******@example.com`) so
/// support logs can still be correlated; anything else is fully starred.
/// Serialization is transparent because API responses need the real value.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> Masked<T> {
    fn redacted(&self) -> String {
        let value = self.0.as_ref();
        match value.split_once('@') {
            Some((local, domain)) if !local.is_empty() => {
                let first = local.chars().next().unwrap_or('*');
                format!("{}{}@{}", first, "*".repeat(7), domain)
            }
            _ => "********".to_string(),
        }
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Masked({})", self.redacted())
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_keeps_domain() {
        let email = Masked("jane.doe@example.com");
        assert_eq!(email.to_string(), "j*******@example.com");
        assert_eq!(format!("{:?}", email), "Masked(j*******@example.com)");
    }

    #[test]
    fn test_phone_fully_masked() {
        let phone = Masked(String::from("+1 555 0100"));
        assert_eq!(phone.to_string(), "********");
    }

    #[test]
    fn test_serialization_is_transparent() {
        let email = Masked("jane.doe@example.com".to_string());
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"jane.doe@example.com\"");
    }
}
