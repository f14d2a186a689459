// src/application/logging.rs
use std::{fmt, str::FromStr};

/// How email addresses are rendered into log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailLogPolicy {
    Plain,
    /// Keeps the first character of the local part and the domain.
    #[default]
    Masked,
    Omitted,
}

impl EmailLogPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailLogPolicy::Plain => "plain",
            EmailLogPolicy::Masked => "masked",
            EmailLogPolicy::Omitted => "omitted",
        }
    }

    pub fn render(&self, email: &str) -> String {
        match self {
            EmailLogPolicy::Plain => email.to_string(),
            EmailLogPolicy::Masked => mask(email),
            EmailLogPolicy::Omitted => "<redacted>".to_string(),
        }
    }
}

fn mask(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}

impl fmt::Display for EmailLogPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmailLogPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(EmailLogPolicy::Plain),
            "masked" => Ok(EmailLogPolicy::Masked),
            "omitted" | "none" => Ok(EmailLogPolicy::Omitted),
            other => Err(format!("unknown email log policy '{other}'")),
        }
    }
}
