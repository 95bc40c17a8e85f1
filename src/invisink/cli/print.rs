use colored::Colorize;
use invisink::api::{CmdMessage, InspectReport, MessageLevel};
use invisink::config::InvisinkConfig;
use invisink::model::SessionPayload;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// Raw command output goes to stdout untouched so it can be piped.
pub(crate) fn print_output(output: Option<&str>) {
    if let Some(output) = output {
        println!("{}", output);
    }
}

pub(crate) fn print_payload(payload: &SessionPayload) {
    if payload.exercises.is_empty() {
        println!("{}", "No exercises.".dimmed());
    }
    for (id, duration) in &payload.exercises {
        println!("{:>8}  {}", id.to_string().yellow(), duration);
    }

    if let Some(details) = &payload.details {
        println!();
        println!("{}", "Detail log".bold());
        for entry in &details.entries {
            println!("  {} ({} sets)", entry.exercise_id.to_string().yellow(), entry.sets.len());
            for (i, set) in entry.sets.iter().enumerate() {
                let mut parts = Vec::new();
                if let Some(reps) = set.reps {
                    parts.push(format!("{} reps", reps));
                }
                if let Some(weight) = set.weight {
                    parts.push(format!("{} kg", weight));
                }
                if let Some(duration) = set.duration {
                    parts.push(format!("{} s", duration));
                }
                println!("    {}. {}", i + 1, parts.join(", "));
            }
        }
        if let Some(comment) = &details.comment {
            println!("  {}", comment.dimmed());
        }
    }
}

pub(crate) fn print_report(report: &InspectReport) {
    let yes_no = |b: bool| if b { "yes".green() } else { "no".red() };
    println!("marker:            {}", yes_no(report.has_marker));
    println!("characters:        {}", report.total_chars);
    println!("bytes (UTF-8):     {}", report.total_bytes);
    println!("visible:           {}", report.visible_chars);
    println!("hidden symbols:    {}", report.hidden_symbols);
    match report.hidden_bytes() {
        Some(bytes) => println!("hidden bytes:      {}", bytes),
        None => println!("hidden bytes:      {}", "unpaired".red()),
    }
    println!("foreign invisible: {}", report.foreign_invisible);
    println!("display width:     {}", report.display_width);
}

pub(crate) fn print_config(config: &InvisinkConfig) {
    for key in InvisinkConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key.bold(), value);
        }
    }
}
