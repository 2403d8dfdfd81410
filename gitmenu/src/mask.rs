use gitmenu_actions::exec::{self, ExecMode};
use gitmenu_actions::workdir::{relative_name, wd_from_context};
use gitmenu_types::{Context, MenuFlags};
use tracing::debug;

/// Outcome of one repository state query. A non-zero exit is a meaningful
/// classification signal, not an error; only a failed launch is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    Success,
    Failure,
    Unavailable,
}

/// Folds the selection kind and the two query outcomes into the eligibility
/// mask. `head_query` is the `rev-parse --verify` outcome and only applies
/// when the prefix query succeeded.
pub fn compose_mask(
    is_dir: bool,
    prefix_query: QueryOutcome,
    head_query: Option<QueryOutcome>,
) -> MenuFlags {
    let mut mask = MenuFlags::ALWAYS
        | if is_dir {
            MenuFlags::DIR
        } else {
            MenuFlags::FILE
        };

    match prefix_query {
        QueryOutcome::Unavailable => return MenuFlags::UNAVAILABLE,
        QueryOutcome::Failure => mask |= MenuFlags::NOREPO,
        QueryOutcome::Success => match head_query {
            Some(QueryOutcome::Success) => mask |= MenuFlags::REPO | MenuFlags::TRACKED,
            Some(QueryOutcome::Failure) => mask |= MenuFlags::REPO | MenuFlags::UNTRACKED,
            Some(QueryOutcome::Unavailable) | None => return MenuFlags::UNAVAILABLE,
        },
    }

    mask
}

/// Classifies the selection by querying repository state. Computed fresh on
/// every menu-open event; nothing is cached.
///
/// `git rev-parse --show-prefix` failing means the working directory is not
/// inside a repository. Inside one, `git rev-parse --verify` against `HEAD`
/// (or `HEAD:<prefix><name>` for a file) decides tracked versus untracked.
pub fn menu_mask(ctx: &Context) -> MenuFlags {
    let wd = wd_from_context(ctx);

    let prefix_out = match exec::run_git(&wd, ExecMode::Wait, &["rev-parse", "--show-prefix"]) {
        Ok(out) => out,
        Err(err) => {
            debug!("mask: prefix query failed to launch: {err}");
            return compose_mask(ctx.is_dir, QueryOutcome::Unavailable, None);
        }
    };
    if !prefix_out.success() {
        return compose_mask(ctx.is_dir, QueryOutcome::Failure, None);
    }

    let prefix = prefix_out.stdout.lines().next().unwrap_or("");
    let head_ref = if ctx.is_dir {
        "HEAD".to_string()
    } else {
        format!("HEAD:{}{}", prefix, relative_name(ctx))
    };

    let head_query = match exec::run_git(&wd, ExecMode::Wait, &["rev-parse", "--verify", &head_ref])
    {
        Ok(out) if out.success() => QueryOutcome::Success,
        Ok(_) => QueryOutcome::Failure,
        Err(err) => {
            debug!("mask: HEAD query failed to launch: {err}");
            QueryOutcome::Unavailable
        }
    };

    compose_mask(ctx.is_dir, QueryOutcome::Success, Some(head_query))
}

/// Human-readable classification, for the CLI.
pub fn describe(mask: MenuFlags) -> String {
    if mask.is_unavailable() {
        return "unavailable".to_string();
    }

    let mut parts = Vec::new();
    if mask.contains(MenuFlags::DIR) {
        parts.push("directory");
    }
    if mask.contains(MenuFlags::FILE) {
        parts.push("file");
    }
    if mask.contains(MenuFlags::NOREPO) {
        parts.push("no repository");
    }
    if mask.contains(MenuFlags::REPO) {
        parts.push("repository");
    }
    if mask.contains(MenuFlags::TRACKED) {
        parts.push("tracked");
    }
    if mask.contains(MenuFlags::UNTRACKED) {
        parts.push("untracked");
    }
    parts.join(", ")
}
