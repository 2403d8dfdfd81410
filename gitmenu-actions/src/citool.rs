use super::MenuHost;
use crate::exec::{self, ExecMode};
use crate::workdir::wd_from_context;
use gitmenu_types::{Context, ExitStatus};
use tracing::debug;

pub fn description() -> &'static str {
    "Launch the git commit tool in the local or chosen directory"
}

pub fn command(ctx: &Context, _argv: Vec<String>, host: &mut dyn MenuHost) -> ExitStatus {
    let wd = wd_from_context(ctx);
    let argv = host
        .platform_argv("citool", None)
        .unwrap_or_else(|| vec!["git".to_string(), "citool".to_string()]);

    match exec::run_argv(&wd, ExecMode::Hidden, &argv) {
        Ok(_) => ExitStatus::Detached,
        Err(err) => {
            debug!("citool: launch failed: {err}");
            ExitStatus::NoOp
        }
    }
}
