use super::MenuHost;
use crate::exec::{self, ExecMode};
use crate::workdir::{relative_name, wd_from_context};
use gitmenu_types::{Context, ExitStatus};
use tracing::debug;

pub fn description() -> &'static str {
    "Start a blame viewer on the specified file"
}

/// Blame only makes sense for a file; a directory selection performs
/// nothing.
pub fn command(ctx: &Context, _argv: Vec<String>, host: &mut dyn MenuHost) -> ExitStatus {
    if ctx.is_dir {
        return ExitStatus::NoOp;
    }

    let wd = wd_from_context(ctx);
    let name = relative_name(ctx);

    let argv = host.platform_argv("blame", Some(&name)).unwrap_or_else(|| {
        vec![
            "git".to_string(),
            "gui".to_string(),
            "blame".to_string(),
            name.clone(),
        ]
    });

    match exec::run_argv(&wd, ExecMode::Hidden, &argv) {
        Ok(_) => ExitStatus::Detached,
        Err(err) => {
            debug!("blame: launch failed: {err}");
            ExitStatus::NoOp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingHost;

    #[test]
    fn test_directory_selection_performs_nothing() {
        let ctx = Context::with_kind("/no/such/gitmenu/dir", true);
        let mut host = RecordingHost::default();

        assert_eq!(command(&ctx, Vec::new(), &mut host), ExitStatus::NoOp);
        // Bailed out before even assembling a command line.
        assert!(host.argv_queries.borrow().is_empty());
        assert!(host.messages.is_empty());
    }
}
