//! `tempo list` command.

use clap::Args;

use tempo_mcp::to_definition;
use tempo_protocol::mcp::ToolsListResult;

use crate::{output, shared};

/// List the tools the server exposes, as `tools/list` would.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print names only, one per line.
    #[arg(long)]
    pub names: bool,
}

/// Executes the list command.
pub fn execute(args: &ListArgs) -> anyhow::Result<()> {
    let tools = shared::create_dispatcher()?.list_tools();

    if args.names {
        for tool in &tools {
            println!("{}", tool.name);
        }
        return Ok(());
    }

    output::print_json(&ToolsListResult {
        tools: tools.iter().map(to_definition).collect(),
        next_cursor: None,
    })
}
