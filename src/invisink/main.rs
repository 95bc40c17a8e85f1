use clap::Parser;
use directories::ProjectDirs;
use invisink::api::{ConfigAction, InvisinkApi, MessageLevel};
use invisink::codec::Codec;
use invisink::config::InvisinkConfig;
use invisink::error::{InvisinkError, Result};
use invisink::logging::init_logging;
use std::io::{self, Read};
use std::path::PathBuf;

mod cli;
use cli::args::{Cli, Commands};
use cli::print::{print_config, print_messages, print_output, print_payload, print_report};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = init_api(&cli)?;

    match cli.command {
        Commands::Encode { text } => handle_encode(&api, text),
        Commands::Decode { text } => handle_decode(&api, text),
        Commands::Wrap { entries, details } => handle_wrap(&api, entries, details),
        Commands::Unwrap { note, json } => handle_unwrap(&api, note, json),
        Commands::Inspect { note } => handle_inspect(&api, note),
        Commands::Config { key, value } => handle_config(&api, key, value),
    }
}

fn init_api(cli: &Cli) -> Result<InvisinkApi> {
    let config_dir = match &cli.config {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "invisink", "invisink")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| {
                InvisinkError::Config("Could not determine config dir".to_string())
            })?,
    };

    let config = match InvisinkConfig::load(&config_dir) {
        Ok(config) => config,
        // `config` has to stay usable to repair an invalid file
        Err(InvisinkError::Config(_)) if matches!(cli.command, Commands::Config { .. }) => {
            InvisinkConfig::default()
        }
        Err(e) => return Err(e),
    };
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_logging(level)?;

    Ok(InvisinkApi::new(Codec::from_config(&config), config_dir))
}

/// Use the argument if given, otherwise all of stdin.
fn input_or_stdin(arg: Option<String>, strip_newline: bool) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    if strip_newline {
        if let Some(stripped) = buf.strip_suffix('\n') {
            let len = stripped.strip_suffix('\r').unwrap_or(stripped).len();
            buf.truncate(len);
        }
    }
    Ok(buf)
}

fn handle_encode(api: &InvisinkApi, text: Option<String>) -> Result<()> {
    let text = input_or_stdin(text, false)?;
    let result = api.encode(&text)?;
    print_output(result.output.as_deref());
    print_messages(&result.messages);
    Ok(())
}

fn handle_decode(api: &InvisinkApi, text: Option<String>) -> Result<()> {
    let text = input_or_stdin(text, true)?;
    let result = api.decode(&text)?;
    print_output(result.output.as_deref());
    Ok(())
}

fn handle_wrap(api: &InvisinkApi, entries: Vec<String>, details: Option<PathBuf>) -> Result<()> {
    let details_json = match details {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };
    let result = api.wrap(entries.as_slice(), details_json.as_deref())?;
    print_output(result.output.as_deref());
    print_messages(&result.messages);
    Ok(())
}

fn handle_unwrap(api: &InvisinkApi, note: Option<String>, json: bool) -> Result<()> {
    let note = input_or_stdin(note, true)?;
    let result = api.unwrap_note(&note)?;
    let payload = result.payload().unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_payload(&payload);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_inspect(api: &InvisinkApi, note: Option<String>) -> Result<()> {
    let note = input_or_stdin(note, true)?;
    let result = api.inspect(&note)?;
    if let Some(report) = &result.report {
        print_report(report);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &InvisinkApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_key = matches!(action, ConfigAction::ShowKey(_));

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }

    if show_key {
        for message in &result.messages {
            if message.level == MessageLevel::Info {
                println!("{}", message.content);
            }
        }
        let notices: Vec<_> = result
            .messages
            .iter()
            .filter(|m| m.level != MessageLevel::Info)
            .cloned()
            .collect();
        print_messages(&notices);
    } else {
        print_messages(&result.messages);
    }

    if result
        .messages
        .iter()
        .any(|m| m.level == MessageLevel::Error)
    {
        return Err(InvisinkError::Api("config command failed".to_string()));
    }
    Ok(())
}
