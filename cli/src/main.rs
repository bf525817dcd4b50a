//! multisend: send tokens to many accounts in one transaction.
//!
//! Reads free-form `recipient amount` text, aggregates it, and previews,
//! prints or submits the resulting batch.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use multisend_ledger::{parse_recipients, ParsedRecipients};
use multisend_transactions::{BatchBuilder, BatchRequest};
use multisend_types::{to_on_chain_units, AccountId, NetworkId};
use multisend_utils::LogFormat;
use multisend_wallet_core::{RelayerClient, Sender, SenderConfig, StaticSession};

#[derive(Parser)]
#[command(name = "multisend", about = "Send tokens to multiple accounts in one transaction")]
struct Cli {
    /// Network the contract lives on: "testnet" or "mainnet".
    #[arg(long, env = "MULTISEND_NETWORK")]
    network: Option<NetworkId>,

    /// Multisend contract account.
    #[arg(long, env = "MULTISEND_CONTRACT")]
    contract: Option<AccountId>,

    /// Contract method to call.
    #[arg(long, env = "MULTISEND_METHOD")]
    method: Option<String>,

    /// Gas attached to the call.
    #[arg(long, env = "MULTISEND_GAS")]
    gas: Option<u64>,

    /// Relayer JSON-RPC endpoint.
    #[arg(long, env = "MULTISEND_RELAYER_URL")]
    relayer_url: Option<String>,

    /// Account that signs the call.
    #[arg(long, env = "MULTISEND_SIGNER")]
    signer: Option<AccountId>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "MULTISEND_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, env = "MULTISEND_LOG_JSON")]
    log_json: bool,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "MULTISEND_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the aggregated recipients and total parsed from the input.
    Preview {
        #[command(flatten)]
        input: InputArgs,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the contract call payload without sending it.
    Build {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Submit the batch through the relayer.
    Send {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// File with one "recipient amount" pair per line ("-" or absent reads stdin).
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Explicit recipient=amount pair; repeatable. Replaces text input and
    /// fails on the first invalid entry.
    #[arg(long = "pair", value_name = "RECIPIENT=AMOUNT")]
    pairs: Vec<String>,
}

impl InputArgs {
    fn read_text(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            _ => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                Ok(text)
            }
        }
    }

    fn parse(&self) -> anyhow::Result<ParsedRecipients> {
        Ok(parse_recipients(&self.read_text()?))
    }

    fn batch(&self, builder: &BatchBuilder) -> anyhow::Result<BatchRequest> {
        if self.pairs.is_empty() {
            return Ok(builder.build(&self.parse()?)?);
        }
        let mut entries = Vec::with_capacity(self.pairs.len());
        for pair in &self.pairs {
            let Some((recipient, amount)) = pair.split_once('=') else {
                bail!("expected RECIPIENT=AMOUNT, got {pair:?}");
            };
            entries.push((recipient.trim(), amount.trim()));
        }
        Ok(builder.build_strict(entries)?)
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<SenderConfig> {
    let mut config = match &cli.config {
        Some(path) => SenderConfig::from_toml_file(path)?,
        None => SenderConfig::default(),
    };

    if let Some(network) = cli.network {
        config.network = network;
    }
    if let Some(contract) = &cli.contract {
        config.contract_id = contract.clone();
    }
    if let Some(method) = &cli.method {
        config.method_name = method.clone();
    }
    if let Some(gas) = cli.gas {
        config.gas = gas;
    }
    if let Some(url) = &cli.relayer_url {
        config.relayer_url = url.clone();
    }
    if let Some(signer) = &cli.signer {
        config.signer_account = Some(signer.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if cli.log_json {
        config.log_format = LogFormat::Json;
    }
    Ok(config)
}

fn print_preview(parsed: &ParsedRecipients) {
    if parsed.is_empty() {
        println!("no valid recipient/amount pairs found");
        return;
    }
    let width = parsed
        .ledger()
        .iter()
        .map(|(id, _)| id.as_str().len())
        .max()
        .unwrap_or(0);
    for (recipient, amount) in parsed.ledger() {
        println!("{:<width$}  {}", recipient.as_str(), amount);
    }
    println!("{:<width$}  {}", "total", parsed.total());
    println!(
        "{} recipients, deposit {} on-chain units",
        parsed.ledger().len(),
        to_on_chain_units(parsed.total())
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    multisend_utils::init_tracing(config.log_format, &config.log_level);

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let builder = BatchBuilder::new().with_gas(config.gas);

    match &cli.command {
        Command::Preview { input, json } => {
            let parsed = input.parse()?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                print_preview(&parsed);
            }
        }
        Command::Build { input } => {
            let batch = input.batch(&builder)?;
            let (args, gas, deposit) = batch.into_parts();
            let payload = serde_json::json!({
                "contract_id": config.contract_id,
                "method_name": config.method_name,
                "args": args,
                "gas": gas.to_string(),
                "deposit": deposit,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Command::Send { input } => {
            let batch = input.batch(&builder)?;
            let session = StaticSession::new(config.signer_account.clone());
            let relayer = RelayerClient::new(config.relayer_url.clone())?;
            let sender = Sender::new(&config, session, relayer);

            match sender.submit_batch(batch).await {
                Ok(receipt) => {
                    println!(
                        "Succeeded: {} transfers, deposit {}",
                        receipt.operations, receipt.deposit
                    );
                    if let Some(hash) = &receipt.transaction_hash {
                        println!("transaction {hash}");
                    }
                    println!("signer   {}", receipt.signer_url);
                    println!("contract {}", receipt.contract_url);
                }
                Err(e) => {
                    eprintln!("{}", e.user_notice());
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}
