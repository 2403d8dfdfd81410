use super::MenuHost;
use crate::exec::{self, ExecMode};
use crate::workdir::wd_from_context;
use gitmenu_types::{Context, ExitStatus};
use tracing::{debug, warn};

pub fn description() -> &'static str {
    "Checkout the chosen branch"
}

/// Checks out the branch named in `argv[0]` and reports the result through
/// the host's message box. git prints even the success message on stderr,
/// so that is what gets shown.
pub fn command(ctx: &Context, argv: Vec<String>, host: &mut dyn MenuHost) -> ExitStatus {
    let Some(branch) = argv.first() else {
        warn!("checkout: no branch name given");
        return ExitStatus::NoOp;
    };

    let wd = wd_from_context(ctx);
    let cmdline = host
        .platform_argv("checkout", Some(branch))
        .unwrap_or_else(|| {
            vec![
                "git".to_string(),
                "checkout".to_string(),
                branch.clone(),
            ]
        });

    match exec::run_argv(&wd, ExecMode::Wait, &cmdline) {
        Ok(output) => {
            host.message_box(output.stderr.trim());
            ExitStatus::ExitedWith(output.code)
        }
        Err(err) => {
            // Launch failure means there is nothing meaningful to show.
            debug!("checkout: launch failed: {err}");
            ExitStatus::NoOp
        }
    }
}
