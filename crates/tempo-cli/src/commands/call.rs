//! `tempo call` command.
//!
//! Runs a single invocation through the same dispatcher the server uses,
//! including the requirement that an arguments object be supplied.

use clap::Args;

use tempo_protocol::mcp::{ToolContent, ToolsCallParams, ToolsCallResult};
use tempo_registry::ToolDispatcher;

use crate::{input, output, shared};

/// Invoke a tool once and print its result.
#[derive(Debug, Args)]
pub struct CallArgs {
    /// Tool name (e.g. get_time_and_date).
    pub tool: String,
    /// Arguments as an inline JSON object, e.g. '{}'.
    #[arg(short, long)]
    pub args: Option<String>,
    /// Read the arguments object from a file (use "-" for stdin).
    #[arg(short = 'f', long)]
    pub args_file: Option<String>,
    /// Print the raw `tools/call` result instead of the text content.
    #[arg(long)]
    pub json: bool,
}

/// Executes the call command.
pub async fn execute(args: &CallArgs) -> anyhow::Result<()> {
    let dispatcher = shared::create_dispatcher()?;
    let result = run(args, &dispatcher).await?;

    if args.json {
        output::print_json(&result)?;
    } else if result.is_error {
        output::print_error(&render(&result));
    } else {
        println!("{}", render(&result));
    }

    if result.is_error {
        anyhow::bail!("tool '{}' reported an error", args.tool);
    }
    Ok(())
}

/// Resolves the arguments and dispatches the call.
///
/// Dispatch failures are reported on stderr with their diagnostic and
/// come back as a `TempoError`.
async fn run(args: &CallArgs, dispatcher: &ToolDispatcher) -> anyhow::Result<ToolsCallResult> {
    let arguments = input::resolve_arguments(args.args.as_deref(), args.args_file.as_deref())?;
    tracing::debug!(tool = %args.tool, has_arguments = arguments.is_some(), "calling tool");

    dispatcher
        .call_tool(&ToolsCallParams::new(&args.tool, arguments))
        .await
        .map_err(|e| output::fatal(e, format!("tempo call {}", args.tool)))
}

/// Text blocks of a result, one per line.
fn render(result: &ToolsCallResult) -> String {
    result
        .content
        .iter()
        .map(|block| match block {
            ToolContent::Text { text } => text.as_str(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use tempo_registry::{DispatchError, FixedClock, ToolRegistry};
    use tempo_types::{ErrorKind, TempoError};

    fn dispatcher() -> ToolDispatcher {
        let t = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 34, 56)
            .single()
            .expect("valid");
        let registry = ToolRegistry::builtin(Arc::new(FixedClock(t))).expect("registry");
        ToolDispatcher::new(Arc::new(registry))
    }

    fn call_args(tool: &str, args: Option<&str>) -> CallArgs {
        CallArgs {
            tool: tool.into(),
            args: args.map(str::to_string),
            args_file: None,
            json: false,
        }
    }

    #[tokio::test]
    async fn empty_object_prints_pretty_time() {
        let result = run(&call_args("get_time_and_date", Some("{}")), &dispatcher())
            .await
            .expect("call");
        assert!(!result.is_error);
        assert_eq!(
            render(&result),
            "{\n  \"time\": \"2024-05-01T12:34:56.000Z\"\n}"
        );
    }

    #[tokio::test]
    async fn omitted_args_fail_as_missing_arguments() {
        let err = run(&call_args("get_time_and_date", None), &dispatcher())
            .await
            .expect_err("no arguments");
        let tempo = err.downcast_ref::<TempoError>().expect("domain error");
        assert_eq!(tempo.kind, ErrorKind::InvalidInput);
        assert_eq!(
            tempo.message,
            "No arguments provided for tool: get_time_and_date"
        );
        assert_eq!(tempo.context.as_deref(), Some("tempo call get_time_and_date"));
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let err = run(&call_args("nope", Some("{}")), &dispatcher())
            .await
            .expect_err("unknown");
        let tempo = err.downcast_ref::<TempoError>().expect("domain error");
        assert_eq!(tempo.kind, ErrorKind::NotFound);
    }

    #[test]
    fn missing_arguments_diagnostic_suggests_empty_object() {
        let text = output::format_diagnostic(&DispatchError::MissingArguments {
            tool: "get_time_and_date".into(),
        });
        assert!(text.contains("Cause:"));
        assert!(text.contains("tempo call get_time_and_date --args '{}'"));
    }
}
