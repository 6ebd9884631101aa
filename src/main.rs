//! Line-driven host for the visibility picker.
//!
//! Reads the post's current status and password from the command line, then
//! relays one gesture per stdin line into a [`VisibilityFlow`]. After every
//! gesture the view model is printed to stderr; the committed choice is printed
//! to stdout as JSON.
//!
//! # Usage
//!
//! ```text
//! post-visibility [--status <status>] [--password <password>] [--config <file.toml>]
//! ```
//!
//! # Commands
//!
//! - `public` / `private` / `protected`: Select a visibility
//! - `edit`: Focus the existing password
//! - `type <text>`: Replace the password draft
//! - `clear`: Clear the password draft
//! - `reveal`: Toggle password masking
//! - `cancel`: Cancel password entry
//! - `save`: Save the password
//! - `quit`: Dismiss without committing

use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use post_visibility::ui::SelectorViewModel;
use post_visibility::{
    Config, Event, Post, PostStatus, PostVisibility, Result, VisibilityChoice, VisibilityError,
    VisibilityFlow,
};

/// Parsed command-line flags.
struct Args {
    status: Option<PostStatus>,
    password: Option<String>,
    config: Option<String>,
}

fn parse_args() -> std::result::Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Args {
        status: args.opt_value_from_str("--status")?,
        password: args.opt_value_from_str("--password")?,
        config: args.opt_value_from_str("--config")?,
    })
}

/// What a stdin line asks for.
enum Command {
    Gesture(Event),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let event = match word.trim() {
        "public" => Event::Select(PostVisibility::Public),
        "private" => Event::Select(PostVisibility::Private),
        "protected" => Event::Select(PostVisibility::Protected),
        "edit" => Event::EditPassword,
        "type" => Event::PasswordChanged(rest.to_string()),
        "clear" => Event::ClearPassword,
        "reveal" => Event::ToggleSecureEntry,
        "cancel" => Event::CancelPasswordEntry,
        "save" => Event::SavePassword,
        "quit" | "exit" => return Some(Command::Quit),
        _ => return None,
    };
    Some(Command::Gesture(event))
}

fn print_viewmodel(vm: &SelectorViewModel) {
    eprintln!("── {} ──", vm.title);
    for row in &vm.rows {
        let mark = if row.is_checked { "✓" } else { " " };
        let dim = if row.is_dimmed { " (unavailable)" } else { "" };
        eprintln!(" [{mark}] {} - {}{dim}", row.title, row.details);
    }
    if let Some(entry) = &vm.password_entry {
        eprintln!("     password: {}", entry.display_text);
        if let Some(controls) = entry.controls {
            let save = if controls.save_enabled { "save" } else { "save (disabled)" };
            eprintln!("     [cancel] [{save}]");
        }
    }
}

fn print_choice(choice: &VisibilityChoice) -> Result<()> {
    let json = serde_json::to_string(choice)
        .map_err(|e| VisibilityError::Config(format!("cannot encode choice: {e}")))?;
    println!("{json}");
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    post_visibility::observability::init_tracing(&config);

    let post = Post::new(args.status, args.password);
    tracing::debug!(status = ?post.status, has_password = post.password().is_some(), "starting picker");

    let (mut flow, mut receiver) = VisibilityFlow::new(&post, &config)?;
    print_viewmodel(&flow.viewmodel());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            biased;

            committed = &mut receiver => return print_choice(&committed?),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // Input ended; a saved password still gets its commit.
                    if flow.state().is_committing() {
                        let committed = (&mut receiver).await;
                        return print_choice(&committed?);
                    }
                    flow.dismiss();
                    return Err(VisibilityError::Dismissed);
                };
                match parse_command(&line) {
                    Some(Command::Gesture(event)) => {
                        if flow.dispatch(&event) {
                            print_viewmodel(&flow.viewmodel());
                        }
                    }
                    Some(Command::Quit) => {
                        flow.dismiss();
                        return Err(VisibilityError::Dismissed);
                    }
                    None => eprintln!("unknown command: {line}"),
                }
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(VisibilityError::Dismissed) => {
            eprintln!("dismissed without a choice");
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::error!(error = %e, "picker failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
