use auth0_management::ManagementError;
use auth0_provider::Diagnostic;
use colored::Colorize;
use config::Setting;
use std::str::FromStr;

#[derive(Debug)]
pub struct UxError {
    pub what: String,
    pub why: Option<String>,
    pub how_to_fix: Vec<String>,
    pub suggested_command: Option<String>,
}

impl UxError {
    pub fn new(what: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            why: None,
            how_to_fix: Vec::new(),
            suggested_command: None,
        }
    }

    pub fn why(mut self, reason: impl Into<String>) -> Self {
        self.why = Some(reason.into());
        self
    }

    pub fn fix(mut self, suggestion: impl Into<String>) -> Self {
        self.how_to_fix.push(suggestion.into());
        self
    }

    pub fn suggest(mut self, cmd: impl Into<String>) -> Self {
        self.suggested_command = Some(cmd.into());
        self
    }

    pub fn display(&self) {
        eprintln!();
        eprintln!("{} {}", "error:".red().bold(), self.what.white().bold());

        if let Some(why) = &self.why {
            eprintln!("       {}", why.dimmed());
        }

        if !self.how_to_fix.is_empty() {
            eprintln!();
            eprintln!("{}", "How to fix:".yellow().bold());
            for (i, fix) in self.how_to_fix.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, fix);
            }
        }

        if let Some(cmd) = &self.suggested_command {
            eprintln!();
            eprintln!("{}", "Try this:".green().bold());
            eprintln!("  $ {}", cmd.cyan());
        }
        eprintln!();
    }
}

impl std::fmt::Display for UxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.what)
    }
}

impl std::error::Error for UxError {}

/// Turns a configure diagnostic into an actionable message.
pub fn from_diagnostic(diagnostic: &Diagnostic) -> UxError {
    let err = UxError::new(diagnostic.summary.clone()).why(diagnostic.detail.clone());

    let Some(setting) = diagnostic
        .attribute
        .as_deref()
        .and_then(|a| Setting::from_str(a).ok())
    else {
        return err.fix("Check that the tenant domain is reachable and well formed");
    };

    let flag = setting.as_ref().replace('_', "-");
    err.fix(format!("Pass --{flag} <value>"))
        .fix(format!("Or export {}", setting.env_key()))
        .suggest(format!(
            "{}=... terraform-provider-auth0 check",
            setting.env_key()
        ))
}

pub fn token_request_failed(error: &ManagementError) -> UxError {
    let err = UxError::new("Could not obtain a Management API access token").why(error.to_string());
    match error {
        ManagementError::OAuthError(_) | ManagementError::AuthenticationError(_) => err
            .fix("Verify the client ID and secret of the machine-to-machine application")
            .fix("Make sure the application is authorized for the Auth0 Management API"),
        ManagementError::RateLimited {
            retry_after_seconds,
        } => err.fix(format!("Wait {retry_after_seconds} seconds and retry")),
        _ => err.fix("Check network access to the tenant domain"),
    }
}
