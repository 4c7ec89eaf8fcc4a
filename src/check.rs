//! Pre-submit check of a contact submission, run the way the site's form
//! does it before posting: validate with the shared schema, then prefix the
//! phone number.

use std::{io::Write, path::Path};

use anyhow::Context;
use counsel_contact::ContactSubmission;
use counsel_shared::{Issue, IssueCode, Issues};

pub fn check_submission(
    raw: &str,
    country_code: &str,
) -> counsel_shared::Result<ContactSubmission> {
    let input: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        Issues::from_iter([Issue::root(
            IssueCode::InvalidJson,
            format!("Invalid JSON body: {e}"),
        )])
    })?;

    let submission = ContactSubmission::parse(&input)?;

    Ok(submission.with_country_code(country_code))
}

pub fn check_file(path: &Path, country_code: &str) -> counsel_shared::Result<ContactSubmission> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    check_submission(&raw, country_code)
}

/// Checks `path` and writes the outcome the way `counsel check` prints it:
/// the normalized submission as JSON to `out`, or one issue per line to `err`.
pub fn report(
    path: &Path,
    country_code: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    match check_file(path, country_code) {
        Ok(submission) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&submission)?)?;
            Ok(())
        }
        Err(counsel_shared::Error::Validate(issues)) => {
            for issue in &issues {
                writeln!(err, "{issue}")?;
            }
            anyhow::bail!("{} issue(s) found in {}", issues.len(), path.display())
        }
        Err(e) => Err(e.into()),
    }
}
