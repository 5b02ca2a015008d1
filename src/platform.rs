//! Platform and environment detection.

/// Variables set by common CI providers.
const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    ci_detected(|name| std::env::var_os(name).is_some())
}

fn ci_detected(is_set: impl Fn(&str) -> bool) -> bool {
    CI_ENV_VARS.iter().any(|&name| is_set(name))
}
