use std::fmt::Write as _;
use std::io::{BufRead, Write};

use fliplearn_config::ui::UiConfig;
use fliplearn_types::{AppEvent, CardFace, UiCommand};
use kanal::{AsyncReceiver, AsyncSender, Sender};
use tokio_util::sync::CancellationToken;

pub const HELP: &str = "\
Sets:    sets | new | edit <n> | study <n> | delete <n>
Editor:  add | set <n> <word> | meaning <n> <text> | remove <n>
         translate <n> | save [name] | learn
Review:  flip | next
Always:  show | help | quit";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command '{0}', type `help`")]
    Unknown(String),

    #[error("`{0}` needs a number")]
    MissingIndex(&'static str),

    #[error("'{0}' is not a number from 1 up")]
    BadIndex(String),

    #[error("`{0}` needs some text")]
    MissingText(&'static str),
}

/// Parse one terminal line. Blank lines yield `None`.
/// Numbers are typed 1-based and come out 0-based.
pub fn parse_command(line: &str) -> Result<Option<UiCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "sets" | "list" => UiCommand::ListSets,
        "new" => UiCommand::NewSet,
        "edit" => UiCommand::EditSet(index_arg("edit", rest)?),
        "study" => UiCommand::StudySet(index_arg("study", rest)?),
        "delete" => UiCommand::DeleteSet(index_arg("delete", rest)?),
        "add" => UiCommand::AddEntry,
        "set" => {
            let (index, text) = index_and_text("set", rest)?;
            UiCommand::SetWord { index, text }
        }
        "meaning" => {
            let (index, text) = index_and_text("meaning", rest)?;
            UiCommand::SetMeaning { index, text }
        }
        "remove" => UiCommand::RemoveEntry(index_arg("remove", rest)?),
        "translate" => UiCommand::Translate(index_arg("translate", rest)?),
        // Blank names are rejected by the editor, not here
        "save" => UiCommand::Save(rest.to_string()),
        "learn" => UiCommand::LearnCurrent,
        "flip" => UiCommand::Flip,
        "next" => UiCommand::Next,
        "show" => UiCommand::Show,
        "help" | "?" => UiCommand::Help,
        "quit" | "exit" => UiCommand::Quit,
        _ => return Err(ParseError::Unknown(verb.to_string())),
    };

    Ok(Some(command))
}

fn index_arg(verb: &'static str, arg: &str) -> Result<usize, ParseError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(ParseError::MissingIndex(verb));
    }
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ParseError::BadIndex(arg.to_string())),
    }
}

fn index_and_text(verb: &'static str, rest: &str) -> Result<(usize, String), ParseError> {
    let (index, text) = match rest.split_once(char::is_whitespace) {
        Some((index, text)) => (index, text.trim()),
        None => (rest, ""),
    };
    let index = index_arg(verb, index)?;
    if text.is_empty() {
        return Err(ParseError::MissingText(verb));
    }
    Ok((index, text.to_string()))
}

/// Text for an app -> UI event, `None` for events with nothing to show
pub fn render(event: &AppEvent) -> Option<String> {
    let text = match event {
        AppEvent::ShowSets(sets) => {
            if sets.is_empty() {
                "Saved Sets\n  (none yet, build one with `new`)".to_string()
            } else {
                let mut out = String::from("Saved Sets");
                for (i, set) in sets.iter().enumerate() {
                    let _ = write!(out, "\n  {}. {} ({} words)", i + 1, set.name, set.word_count);
                }
                out
            }
        }
        AppEvent::ShowEditor(snapshot) => {
            let mut out = match &snapshot.editing {
                Some(name) => format!("Editing '{}'", name),
                None => "Create a New Study Set".to_string(),
            };
            if snapshot.entries.is_empty() {
                out.push_str("\n  (no words, `add` one)");
            }
            for (i, pair) in snapshot.entries.iter().enumerate() {
                let word = blank_or(&pair.turkish_word, "...");
                let meaning = blank_or(&pair.translated_word, "...");
                let _ = write!(out, "\n  {}. {} = {}", i + 1, word, meaning);
            }
            out
        }
        AppEvent::ShowCard(card) => {
            let side = match card.face {
                CardFace::Front => "front",
                CardFace::Back => "back",
            };
            format!(
                "[{}/{}] ({})  {}",
                card.position,
                card.total,
                side,
                blank_or(&card.text, "(blank)")
            )
        }
        AppEvent::ShowHelp => HELP.to_string(),
        AppEvent::Notice(notice) => match notice.kind {
            Some(kind) => format!("! {} ({})", notice.message, kind),
            None => format!("* {}", notice.message),
        },
        AppEvent::Ui(_)
        | AppEvent::Navigate(_)
        | AppEvent::TranslationReady { .. }
        | AppEvent::Quit => return None,
    };
    Some(text)
}

fn blank_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.trim().is_empty() { fallback } else { text }
}

fn prompt(config: &UiConfig) {
    print!("{}", config.prompt);
    let _ = std::io::stdout().flush();
}

/// Parse terminal lines and hand each command to the app.
/// Blocks on a full command channel; end of input sends `Quit`.
pub fn forward_lines<R: BufRead>(reader: R, ui_to_app_tx: &Sender<AppEvent>, config: &UiConfig) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("[UI] Failed to read stdin: {}", e);
                break;
            }
        };
        match parse_command(&line) {
            Ok(Some(command)) => {
                let quit = matches!(command, UiCommand::Quit);
                if ui_to_app_tx.send(AppEvent::Ui(command)).is_err() || quit {
                    return;
                }
            }
            Ok(None) => prompt(config),
            Err(e) => {
                println!("! {}", e);
                prompt(config);
            }
        }
    }

    tracing::info!("[UI] stdin closed");
    let _ = ui_to_app_tx.send(AppEvent::Ui(UiCommand::Quit));
}

/// Read stdin on a plain thread; a blocked read must not hold up shutdown
fn spawn_stdin_reader(ui_to_app_tx: Sender<AppEvent>, config: UiConfig) {
    std::thread::spawn(move || {
        forward_lines(std::io::stdin().lock(), &ui_to_app_tx, &config);
    });
}

/// Terminal front end. Commands go straight from the stdin thread to the
/// app, so the UI side only renders and never waits on the command channel.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    spawn_stdin_reader(ui_to_app_tx.clone_sync(), config.clone());
    render_loop(app_to_ui_rx, config, cancel).await
}

/// Print app events until the app says `Quit` or the token is cancelled
pub async fn render_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                let event = event?;
                if matches!(event, AppEvent::Quit) {
                    break;
                }
                if let Some(text) = render(&event) {
                    println!("{}", text);
                    prompt(&config);
                }
            }
            _ = cancel.cancelled() => break,
        }
    }

    println!();
    Ok(())
}
