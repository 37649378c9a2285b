use clap::{Parser, Subcommand};

use crate::commands::{self, PayloadArgs};
use crate::context::CliContext;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Override the API endpoint (defaults to SAGE_API_ENDPOINT or the sandbox).
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Talk to the production API instead of the sandbox.
    #[arg(long, global = true, conflicts_with = "endpoint")]
    pub production: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the details of a charge.
    Get { reference: String },
    /// Create a charge of type Auth, Force or Sale.
    Create {
        charge_type: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Capture or amend an existing charge.
    Update {
        reference: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Void a charge that has not been settled yet.
    Delete { reference: String },
}

pub fn cli_main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let context = CliContext::from_args(args.endpoint.as_deref(), args.production)?;

    handle_command(args.command, &context)
}

fn handle_command(command: Commands, context: &CliContext) -> anyhow::Result<()> {
    let charges = context.client().charges();

    let response = match command {
        Commands::Get { reference } => commands::get(&charges, &reference)?,
        Commands::Create {
            charge_type,
            payload,
        } => commands::create(&charges, &charge_type, &payload)?,
        Commands::Update { reference, payload } => {
            commands::update(&charges, &reference, &payload)?
        }
        Commands::Delete { reference } => commands::delete(&charges, &reference)?,
    };

    println!("{}", commands::render(response.as_ref())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_with_inline_json() {
        let args = CliArgs::try_parse_from([
            "sage-charges",
            "create",
            "Sale",
            "--json",
            r#"{"amount":10}"#,
        ])
        .unwrap();

        match args.command {
            Commands::Create {
                charge_type,
                payload,
            } => {
                assert_eq!(charge_type, "Sale");
                assert_eq!(payload.json.as_deref(), Some(r#"{"amount":10}"#));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn endpoint_and_production_are_exclusive() {
        let result = CliArgs::try_parse_from([
            "sage-charges",
            "--endpoint",
            "http://localhost",
            "--production",
            "get",
            "ABC123",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn payload_sources_are_exclusive() {
        let result = CliArgs::try_parse_from([
            "sage-charges",
            "update",
            "ABC123",
            "--json",
            "{}",
            "--file",
            "charge.json",
        ]);
        assert!(result.is_err());
    }
}
