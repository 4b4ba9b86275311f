//! CI environment detection and shallow-clone advisories.

/// Below this many commits a GitLab checkout is assumed to be truncated.
const GITLAB_MIN_COMMITS: u64 = 50;

/// Which CI systems the process appears to run under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CiEnvironment {
    /// `GITLAB_CI` is set.
    pub gitlab_ci: bool,
    /// `GITHUB_ACTIONS` is set.
    pub github_actions: bool,
}

impl CiEnvironment {
    /// Reads the CI markers from the process environment (presence only).
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            gitlab_ci: std::env::var_os("GITLAB_CI").is_some(),
            github_actions: std::env::var_os("GITHUB_ACTIONS").is_some(),
        }
    }

    /// Picks the advisory to emit for a shallow clone with `n_commits` visible.
    ///
    /// GitLab is checked first; at most one advisory applies.
    #[must_use]
    pub fn shallow_clone_advisory(self, n_commits: u64) -> Option<ShallowCloneAdvisory> {
        if self.gitlab_ci && n_commits < GITLAB_MIN_COMMITS {
            Some(ShallowCloneAdvisory::GitLab)
        } else if self.github_actions && n_commits == 1 {
            Some(ShallowCloneAdvisory::GitHubActions)
        } else {
            None
        }
    }
}

/// A fetch-depth misconfiguration warning for a specific CI system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShallowCloneAdvisory {
    /// GitLab runner with a shallow `GIT_DEPTH`.
    GitLab,
    /// GitHub Actions checkout with the default `fetch-depth: 1`.
    GitHubActions,
}

impl ShallowCloneAdvisory {
    /// Operator-facing text of the advisory.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::GitLab => {
                "Running on a GitLab runner might lead to wrong git revision dates due to a \
                 shallow git fetch depth. Make sure to set GIT_DEPTH to 1000 in your \
                 .gitlab-ci.yml file (see \
                 https://docs.gitlab.com/ee/user/project/pipelines/settings.html#git-shallow-clone)."
            }
            Self::GitHubActions => {
                "Running on GitHub Actions might lead to wrong git revision dates due to a \
                 shallow git fetch depth. Try setting fetch-depth to 0 in your GitHub action \
                 (see https://github.com/actions/checkout)."
            }
        }
    }
}
