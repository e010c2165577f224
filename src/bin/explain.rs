//! explain — command-line front end for the explanation engine.
//!
//! Usage:
//!   explain [--provider openai|gemini] [--mode explain|direct] <text>...
//!
//! The selection text is everything after the flags. Configuration comes from
//! the environment; flags override the stored provider and mode for one run.

use std::process::ExitCode;

use explainer_core::{
    ExplainRequest, Explainer, ExplainerConfig, Panel, PanelState, ResponseMode,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut provider_flag: Option<String> = None;
    let mut mode_flag: Option<String> = None;
    let mut words: Vec<String> = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--provider" => provider_flag = iter.next(),
            "--mode" => mode_flag = iter.next(),
            "--help" | "-h" => {
                print_usage();
                return Ok(ExitCode::SUCCESS);
            }
            _ => words.push(arg),
        }
    }

    let text = words.join(" ");
    if text.trim().is_empty() {
        print_usage();
        return Ok(ExitCode::FAILURE);
    }

    let mut config = ExplainerConfig::from_env()?;
    if let Some(name) = provider_flag {
        config.provider = name.parse()?;
    }
    if let Some(name) = mode_flag {
        config.mode = ResponseMode::parse(&name)
            .ok_or_else(|| anyhow::anyhow!("unknown response mode: {name}"))?;
    }

    let explainer = Explainer::new()?;
    let request = ExplainRequest::new(text, config.api_key, config.provider, config.mode);

    let mut panel = Panel::new();
    panel.begin_loading(request.text.as_str());
    eprintln!("Asking {}...", config.provider);

    match explainer.explain(&request).await {
        Ok(explanation) => panel.succeed(explanation),
        Err(err) => panel.fail(err.to_string()),
    }

    match panel.state() {
        PanelState::Success { explanation, .. } => {
            println!("{explanation}");
            Ok(ExitCode::SUCCESS)
        }
        PanelState::Error { message } => {
            eprintln!("Error: {message}");
            Ok(ExitCode::FAILURE)
        }
        PanelState::Hidden | PanelState::Loading { .. } => Ok(ExitCode::FAILURE),
    }
}

fn print_usage() {
    println!(
        r#"explain — AI explanation for a piece of text

USAGE:
    explain [OPTIONS] <text>...

OPTIONS:
    --provider <openai|gemini>    Override the configured provider
    --mode <explain|direct>       Override the configured response mode
    -h, --help                    Show this help message

ENVIRONMENT:
    EXPLAINER_API_KEY             API key for the selected provider (required)
    EXPLAINER_PROVIDER            Provider name, default "openai"
    EXPLAINER_MODE                Response mode, default "direct"
    EXPLAINER_HTTP_TIMEOUT_SECS   Request timeout, default 30"#
    );
}
