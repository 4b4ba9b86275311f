//! `revdate check` command.

use crate::context::ServiceContext;
use crate::inspector::{RepositoryInspector, ShallowCloneCheck};

/// Execute the `check` command.
///
/// Advisories themselves are emitted through the context's diagnostic sink;
/// this prints a one-line summary.
///
/// # Errors
///
/// Never fails once the context exists; the signature matches the other handlers.
#[allow(clippy::unnecessary_wraps)]
pub fn run(ctx: ServiceContext) -> Result<(), String> {
    let inspector = RepositoryInspector::new(ctx);
    println!("{}", summary(inspector.shallow_clone_check()));
    Ok(())
}

fn summary(check: ShallowCloneCheck) -> String {
    match (check.shallow, check.n_commits) {
        (false, _) => "complete clone".to_string(),
        (true, Some(n)) => format!("shallow clone, {n} commit(s) visible"),
        (true, None) => "shallow clone, commit count unavailable".to_string(),
    }
}
