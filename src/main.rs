use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use scm_hooks::{
    config::HooksConfig,
    webhooks::{
        decode,
        signing::{EnvelopeParser, SignedPayload, WebhookParser},
        Webhook, WebhookKind,
    },
};

#[derive(Parser)]
#[clap(version = "0.1")]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Wrap a bare webhook payload into a typed envelope
    Wrap {
        /// Type of the payload, eg `pushHook`
        #[clap(short, long)]
        kind: String,
        #[clap(parse(from_os_str))]
        payload: PathBuf,
    },
    /// Print the type and repository of an envelope
    Inspect {
        #[clap(parse(from_os_str))]
        envelope: PathBuf,
    },
    /// Check the signature of an envelope against the configured secrets
    Verify {
        /// Configuration file holding the webhook secrets
        #[clap(short, long, parse(from_os_str))]
        config: PathBuf,
        /// Signature of the envelope, as `sha256=<hex>`
        #[clap(short, long)]
        signature: String,
        #[clap(parse(from_os_str))]
        envelope: PathBuf,
    },
}

fn read(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("couldn't read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let opts = Opts::parse();
    match opts.command {
        Command::Wrap { kind, payload } => {
            let kind: WebhookKind = kind.parse()?;
            let payload = read(&payload)?;
            let payload = std::str::from_utf8(&payload).context("payload isn't valid UTF-8")?;

            let webhook = Webhook::from_payload(kind, payload)?;
            let envelope = webhook.to_json()?;
            println!("{}", String::from_utf8_lossy(&envelope));
        }
        Command::Inspect { envelope } => {
            let webhook = decode(&read(&envelope)?)
                .with_context(|| format!("couldn't decode {}", envelope.display()))?;
            println!("{} {}", webhook.kind(), webhook.repository());
        }
        Command::Verify {
            config,
            signature,
            envelope,
        } => {
            let config_file = File::open(&config)
                .with_context(|| format!("couldn't open {}:", config.display()))?;
            let config: HooksConfig = serde_yaml::from_reader(BufReader::new(config_file))
                .context("couldn't parse config file")?;

            let request = SignedPayload {
                signature,
                body: read(&envelope)?,
            };
            let secret = |webhook: &Webhook| config.secret_for(webhook.repository());

            let webhook = EnvelopeParser
                .parse(&request, &secret)
                .with_context(|| format!("couldn't verify {}", envelope.display()))?;
            debug!("verified webhook: {:?}", webhook);
            println!("{} {}", webhook.kind(), webhook.repository());
        }
    }

    Ok(())
}
