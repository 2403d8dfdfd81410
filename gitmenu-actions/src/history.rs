use super::MenuHost;
use crate::exec::{self, ExecMode};
use crate::workdir::{relative_name, wd_from_context};
use gitmenu_types::{Context, ExitStatus};
use tracing::debug;

pub fn description() -> &'static str {
    "Show git history of the chosen file or directory"
}

/// History runs gitk over the selection. A directory selection passes an
/// empty pathspec, which gitk reads as the whole tree.
pub fn command(ctx: &Context, _argv: Vec<String>, host: &mut dyn MenuHost) -> ExitStatus {
    let wd = wd_from_context(ctx);
    let name = relative_name(ctx);

    let argv = host.platform_argv("history", Some(&name)).unwrap_or_else(|| {
        vec![
            "gitk".to_string(),
            "HEAD".to_string(),
            "--".to_string(),
            name.clone(),
        ]
    });

    match exec::run_argv(&wd, ExecMode::Hidden, &argv) {
        Ok(_) => ExitStatus::Detached,
        Err(err) => {
            debug!("history: launch failed: {err}");
            ExitStatus::NoOp
        }
    }
}
