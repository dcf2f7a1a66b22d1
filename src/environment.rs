use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the deployments of the feedback service the CLI can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development server.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { base_url: String },
}

impl Environment {
    /// Returns the base URL of the feedback service for this environment.
    pub fn base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:3000".to_string(),
            Environment::Custom { base_url } => base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Public link where anonymous senders can leave feedback for `username`.
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/u/{}", self.base_url(), urlencoding::encode(username))
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            lower if lower.starts_with("http://") || lower.starts_with("https://") => {
                Ok(Environment::Custom {
                    base_url: trimmed.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_and_urls() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "https://feedback.example.com/".parse::<Environment>(),
            Ok(Environment::Custom {
                base_url: "https://feedback.example.com".to_string()
            })
        );
        assert!("staging".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }

    #[test]
    // The profile link is the base URL followed by /u/<username>.
    fn builds_profile_url() {
        let env = Environment::Custom {
            base_url: "https://feedback.example.com".to_string(),
        };
        assert_eq!(
            env.profile_url("alice"),
            "https://feedback.example.com/u/alice"
        );
        assert_eq!(
            Environment::Local.profile_url("bob smith"),
            "http://localhost:3000/u/bob%20smith"
        );
    }
}
