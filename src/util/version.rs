use dioxus::logger::tracing::warn;
use semver::Version;
use thiserror::Error;

pub const APP_NAME: &str = "Dividend Discount Model Calculator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

fn parse_version_str(input: &str) -> Result<Version, VersionError> {
    let trimmed = input.trim_start_matches(|ch| ch == 'v' || ch == 'V');
    Version::parse(trimmed).map_err(|err| VersionError::InvalidVersion(err.to_string()))
}

/// Version of the running build, preferring the git tag it was built from.
pub fn current_version() -> Result<Version, VersionError> {
    resolve_version(GIT_TAG, APP_VERSION)
}

fn resolve_version(tag: Option<&str>, package: &str) -> Result<Version, VersionError> {
    match tag {
        Some(tag) => parse_version_str(tag),
        None => parse_version_str(package),
    }
}

pub fn version_label() -> String {
    label_for(current_version())
}

fn label_for(version: Result<Version, VersionError>) -> String {
    match version {
        Ok(version) => format!("v{version}"),
        Err(err) => {
            warn!(%err, tag = ?GIT_TAG, "git tag is not semver; using package version");
            format!("v{APP_VERSION}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_with_v_prefix() {
        assert_eq!(parse_version_str("v1.2.3"), Ok(Version::new(1, 2, 3)));
        assert_eq!(parse_version_str("V0.4.0"), Ok(Version::new(0, 4, 0)));
    }

    #[test]
    fn rejects_non_semver_tags() {
        assert!(matches!(
            parse_version_str("nightly"),
            Err(VersionError::InvalidVersion(_))
        ));
    }

    #[test]
    fn package_version_is_used_without_a_tag() {
        assert_eq!(resolve_version(None, "1.0.0"), Ok(Version::new(1, 0, 0)));
        assert_eq!(resolve_version(Some("v2.1.0"), "1.0.0"), Ok(Version::new(2, 1, 0)));
    }

    #[test]
    fn label_shows_parsed_semver() {
        assert_eq!(label_for(Ok(Version::new(1, 4, 2))), "v1.4.2");
        assert_eq!(
            label_for(resolve_version(Some("V3.0.0"), APP_VERSION)),
            "v3.0.0"
        );
    }

    #[test]
    fn label_falls_back_to_package_version_for_bad_tags() {
        let label = label_for(resolve_version(Some("nightly"), APP_VERSION));
        assert_eq!(label, format!("v{APP_VERSION}"));
    }
}
