//! Interactive demo: each stdin line is typed into the free-text cell and
//! followed by Enter. Lines starting with `:` are commands:
//!
//! - `:rm TAGS` remove tags through the API
//! - `:lock TAGS` add tags as readonly
//! - `:backspace N` / `:delete N` press the key on chip N
//! - `:close N` click chip N's close affordance
//! - `:back` press Backspace in the empty free-text cell
//! - `:set VALUE` change the host value from outside
//! - `:blur` blur the free-text cell
//! - `:quit`

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use tagfield::cli::CliArgs;
use tagfield::config::TagConfigFile;
use tagfield::messages::{ChipMsg, DraftMsg, Key, Msg};
use tagfield::{TagField, TextHost};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    tagfield::tracing::init(&args.log_level);

    let file = match &args.config {
        Some(path) => TagConfigFile::from_file(path)?,
        None => TagConfigFile::load(),
    };

    let host = TextHost::new(&args.value)
        .with_placeholder(&args.placeholder)
        .with_dataset(args.into_dataset(file));
    let mut field = TagField::attach(host)?;
    field.dispatch(Msg::Draft(DraftMsg::Focus));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_view(&mut stdout, &mut field, args.json)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        match line.strip_prefix(':') {
            Some(command) => {
                if !run_command(&mut field, command) {
                    break;
                }
            }
            None => {
                field.dispatch(Msg::Draft(DraftMsg::Input(line)));
                field.dispatch(Msg::Draft(DraftMsg::KeyDown(Key::Enter)));
            }
        }
        print_view(&mut stdout, &mut field, args.json)?;
    }

    writeln!(stdout, "{}", field.get_value())?;
    Ok(())
}

/// Returns false when the session should end
fn run_command(field: &mut TagField<TextHost>, command: &str) -> bool {
    let (name, arg) = command.split_once(' ').unwrap_or((command, ""));
    let index = arg.trim().parse::<usize>();
    match (name, index) {
        ("rm", _) => field.remove_value(arg),
        ("lock", _) => field.add_readonly_value(arg),
        ("set", _) => field.set_host_value(arg),
        ("backspace", Ok(index)) => field.dispatch(Msg::Chip(ChipMsg::KeyDown {
            index,
            key: Key::Backspace,
        })),
        ("delete", Ok(index)) => field.dispatch(Msg::Chip(ChipMsg::KeyDown {
            index,
            key: Key::Delete,
        })),
        ("close", Ok(index)) => field.dispatch(Msg::Chip(ChipMsg::CloseClicked(index))),
        ("back", _) => field.dispatch(Msg::Draft(DraftMsg::KeyDown(Key::Backspace))),
        ("blur", _) => field.dispatch(Msg::Draft(DraftMsg::Blur)),
        ("quit", _) => return false,
        _ => eprintln!("Unknown command: {}", command),
    }
    true
}

fn print_view(out: &mut impl Write, field: &mut TagField<TextHost>, json: bool) -> Result<()> {
    let effects = field.take_effects();
    if json {
        let line = serde_json::json!({
            "value": field.get_value(),
            "view": field.view(),
            "effects": effects,
        });
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", field.view())?;
        for effect in effects {
            writeln!(
                out,
                "  ~ chip {}: {:?} ({} ms)",
                effect.index(),
                effect,
                effect.duration().as_millis()
            )?;
        }
    }
    out.flush()?;
    Ok(())
}
