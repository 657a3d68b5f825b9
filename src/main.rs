use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use model_value_binding::{bind_decimal_str, parse_decimal, Locale, NumberStyles};

/// Repro runner: feed a formatted numeric string through the decimal binding
/// pipeline under a chosen locale and report what happened.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Raw value stored in the value provider
    #[arg(long, default_value = "32 000,1")]
    value: String,
    /// Locale tag used for stringification and parsing
    #[arg(long, default_value = "fr-FR")]
    locale: Locale,
    /// Model name looked up by the binder
    #[arg(long, default_value = "theModelName")]
    key: String,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    locale: String,
    direct_parse: Result<f64, String>,
    model: Option<f64>,
    is_model_set: bool,
    state_contains_key: bool,
    errors: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // First probe: the bare conversion, outside the pipeline.
    let styles = NumberStyles::FLOAT.with_thousands();
    let direct = parse_decimal(&args.value, styles, &args.locale);

    // Second probe: the full provider -> binder -> model-state pipeline.
    let ctx = bind_decimal_str(&args.key, &args.value, args.locale.clone());
    let errors: Vec<String> = ctx
        .model_state
        .errors_for(&args.key)
        .iter()
        .map(|e| match &e.source {
            Some(source) => format!("{} ({source})", e.message),
            None => e.message.clone(),
        })
        .collect();

    if args.json {
        let report = Report {
            locale: args.locale.tag().to_string(),
            direct_parse: direct.map_err(|e| e.to_string()),
            model: ctx.result.model(),
            is_model_set: ctx.result.is_model_set(),
            state_contains_key: ctx.model_state.contains_key(&args.key),
            errors,
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return;
    }

    println!("{}", args.locale.display_name());
    match direct {
        Ok(v) => println!("Parsed: {v}"),
        Err(e) => println!("{e}"),
    }

    match ctx.result.model() {
        Some(m) => println!("Model: {}", args.locale.format_decimal(m)),
        None => println!("Model: <unset>"),
    }
    println!("IsModelSet: {}", ctx.result.is_model_set());
    println!("Contains: {}", ctx.model_state.contains_key(&args.key));

    if errors.is_empty() {
        println!("No errors");
    } else {
        println!("has errors");
        for error in &errors {
            println!("{error}");
        }
    }
}
