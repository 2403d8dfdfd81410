use super::MenuHost;
use crate::exec::{self, ExecMode};
use crate::workdir::wd_from_context;
use gitmenu_types::{Context, ExitStatus};
use tracing::debug;

pub fn description() -> &'static str {
    "Launch the git gui in the local or chosen directory"
}

pub fn command(ctx: &Context, _argv: Vec<String>, host: &mut dyn MenuHost) -> ExitStatus {
    let wd = wd_from_context(ctx);
    let argv = host
        .platform_argv("gui", None)
        .unwrap_or_else(|| vec!["git".to_string(), "gui".to_string()]);

    match exec::run_argv(&wd, ExecMode::Hidden, &argv) {
        Ok(_) => ExitStatus::Detached,
        Err(err) => {
            debug!("gui: launch failed: {err}");
            ExitStatus::NoOp
        }
    }
}
