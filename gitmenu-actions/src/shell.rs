use super::MenuHost;
use crate::exec::{self, ExecMode};
use crate::workdir::wd_from_context;
use gitmenu_types::{Context, ExitStatus};
use tracing::debug;

pub fn description() -> &'static str {
    "Start a git shell in the local or chosen directory"
}

/// There is no generic command line for an interactive shell; without a
/// platform or config override the item performs nothing.
pub fn command(ctx: &Context, _argv: Vec<String>, host: &mut dyn MenuHost) -> ExitStatus {
    let wd = wd_from_context(ctx);

    let Some(argv) = host.platform_argv("shell", wd.to_str()) else {
        debug!("shell: no override configured, nothing to launch");
        return ExitStatus::NoOp;
    };

    match exec::run_argv(&wd, ExecMode::Normal, &argv) {
        Ok(_) => ExitStatus::Detached,
        Err(err) => {
            debug!("shell: launch failed: {err}");
            ExitStatus::NoOp
        }
    }
}
