//! Interactive prompt.
//!
//! Stdin lines and job completions are multiplexed on this one task, so
//! the prompt stays usable while a summary or sync is running.

use crate::cli::commands::report;
use crate::context::AppContext;
use crate::core::placeholder::quote_for;
use crate::core::session::Session;
use crate::core::worker::{Completion, JobKind};
use crate::errors::AppResult;
use crate::models::entry::Section;
use crate::ui::form::{Form, FormStep, quick_fields};
use crate::ui::messages::{error, info, warning};
use crate::ui::render::{print_log, print_summary};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Commands:
  save      write a new entry (each field ends with an empty line)
  save did|blocked|til <text>
            one-line entry in a single section
  show      print today's log
  summary   summarize today's log in the background
  sync      commit & push the log repository in the background
  last      print the last summary again
  help      show this help
  quit      leave (waits for running jobs)";

fn prompt() {
    print!("dwlog> ");
    std::io::stdout().flush().ok();
}

fn ask(section: Section) {
    println!("{} (empty line to finish):", section.label());
}

fn on_completion(ctx: &AppContext, session: &mut Session, c: Completion) {
    session.apply(&c);
    println!();
    match c {
        Completion::Summary(Ok(text)) => report::summary(ctx, &text),
        Completion::Summary(Err(e)) => {
            report::failed(ctx, "summary", &e);
            error(e);
        }
        Completion::Sync(Ok(outcome)) => report::synced(ctx, outcome),
        Completion::Sync(Err(e)) => {
            report::failed(ctx, "sync", &e);
            error(e);
        }
    }
}

/// Run one command line. Returns `false` when the user asked to quit.
fn on_command(ctx: &AppContext, session: &mut Session, form: &mut Option<Form>, line: &str) -> bool {
    let line = line.trim();
    if let Some(args) = line.strip_prefix("save ") {
        match quick_fields(args) {
            Some([p, b, l]) => match session.save(&p, &b, &l, ctx.now()) {
                Ok(outcome) => report::saved(ctx, &outcome),
                Err(e) => error(e),
            },
            None => warning("Usage: save <did|blocked|til> <text>"),
        }
        return true;
    }

    match line {
        "" => {}
        "save" => {
            let f = Form::new();
            ask(f.current());
            *form = Some(f);
            return true;
        }
        "show" => match session.today(ctx.now()) {
            Ok(Some(content)) => print_log(&content),
            Ok(None) => info("No log for today yet."),
            Err(e) => error(e),
        },
        "summary" => match session.start_summary(ctx.now()) {
            Ok(()) => info("Summary requested, keep working…"),
            Err(e) => error(e),
        },
        "sync" => match session.start_sync(ctx.now()) {
            Ok(()) => info("Sync started…"),
            Err(e) => error(e),
        },
        "last" => match session.summary() {
            Some(text) => print_summary(text),
            None => info("No summary yet, run 'summary' first."),
        },
        "help" | "?" => println!("{HELP}"),
        "quit" | "exit" | "q" => return false,
        other => warning(format!("Unknown command '{other}', type 'help'")),
    }
    true
}

pub async fn handle(ctx: &AppContext) -> AppResult<()> {
    let (mut session, mut rx) = ctx.session()?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut form: Option<Form> = None;

    info(format!("“{}”", quote_for(ctx.now().date())));
    println!("{HELP}");
    prompt();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        error(format!("Could not read input: {e}"));
                        prompt();
                        continue;
                    }
                };

                if let Some(f) = form.as_mut() {
                    match f.feed(&line) {
                        FormStep::Ask(section) => {
                            if line.trim().is_empty() {
                                ask(section);
                            }
                            continue;
                        }
                        FormStep::Done([p, b, l]) => {
                            form = None;
                            match session.save(&p, &b, &l, ctx.now()) {
                                Ok(outcome) => report::saved(ctx, &outcome),
                                Err(e) => error(e),
                            }
                        }
                    }
                } else if !on_command(ctx, &mut session, &mut form, &line) {
                    break;
                } else if form.is_some() {
                    continue;
                }
                prompt();
            }
            Some(c) = rx.recv() => {
                on_completion(ctx, &mut session, c);
                prompt();
            }
        }
    }

    // no cancellation: let running jobs finish before leaving
    for kind in [JobKind::Summary, JobKind::Sync] {
        if session.is_busy(kind) {
            info(format!("Waiting for {kind} to finish…"));
            while session.is_busy(kind) {
                match rx.recv().await {
                    Some(c) => on_completion(ctx, &mut session, c),
                    None => break,
                }
            }
        }
    }

    Ok(())
}
