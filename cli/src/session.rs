//! Driving a `Page` from the terminal.
//!
//! Interactive mode runs one event loop on the main thread. Stdin lines,
//! finished requests and timer ticks all arrive on a single channel, so the
//! page is only ever touched from this thread while requests run on their own
//! worker threads. Completions are applied in the order they finish; the page
//! drops the stale ones.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use posts_core::render::{render_feed_section, render_page};
use posts_core::{ApiError, Field, HttpResponse, Outgoing, Page, PostsClient, Ticket};

use crate::args::Commands;
use crate::command::{self, Command, HELP};
use crate::transport::Transport;

const TICK: Duration = Duration::from_millis(250);

enum Event {
    Line(String),
    InputClosed,
    Completed {
        ticket: Ticket,
        result: Result<HttpResponse, ApiError>,
    },
}

pub fn run_interactive(client: PostsClient, transport: Transport) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    spawn_input_reader(tx.clone());

    println!("{HELP}\n");
    event_loop(Page::new(client), &transport, tx, rx)?;
    Ok(())
}

/// Run the page until input ends and every issued request has come back.
///
/// `quit` and end of input both stop reading commands; requests already in
/// flight, and the reload a finished create triggers, still complete.
fn event_loop(
    mut page: Page,
    transport: &Transport,
    tx: Sender<Event>,
    rx: Receiver<Event>,
) -> Result<Page> {
    dispatch(page.mount(), transport, &tx);
    print_page(&page)?;

    let mut reading = true;
    while reading || page.busy() {
        match rx.recv_timeout(TICK) {
            Ok(Event::Line(_)) if !reading => {}
            Ok(Event::Line(line)) => match line.parse::<Command>() {
                Ok(Command::Quit) => reading = false,
                Ok(Command::Help) => println!("{HELP}"),
                Ok(cmd) => {
                    let outgoing = command::apply(&mut page, cmd);
                    dispatch(outgoing, transport, &tx);
                    print_page(&page)?;
                }
                Err(message) => println!("{message}"),
            },
            Ok(Event::Completed { ticket, result }) => {
                let follow_up = page.complete(ticket, result, Instant::now());
                dispatch(follow_up, transport, &tx);
                print_page(&page)?;
            }
            Ok(Event::InputClosed) => reading = false,
            Err(RecvTimeoutError::Timeout) => {
                if page.tick(Instant::now()) {
                    print_page(&page)?;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    if page.busy() {
        tracing::warn!("event loop ended with requests in flight");
    }
    Ok(page)
}

/// Run one subcommand to completion and print the outcome.
pub fn run_once(client: PostsClient, transport: Transport, command: Commands) -> Result<()> {
    let mut page = Page::new(client);

    let first = match command {
        Commands::List => page.mount(),
        Commands::Search { text } => {
            page.set_query(text.join(" "));
            match page.submit_search() {
                Some(outgoing) => Some(outgoing),
                None => bail!("search text must not be blank"),
            }
        }
        Commands::Create {
            profile,
            desc,
            exp,
            techs,
        } => {
            page.set_field(Field::Profile, profile);
            page.set_field(Field::Desc, desc);
            page.set_field(Field::Exp, exp);
            page.set_field(Field::Techs, techs);
            page.submit_post()
        }
    };

    let mut next = first;
    while let Some(Outgoing { ticket, request }) = next {
        next = page.complete(ticket, transport.execute(&request), Instant::now());
    }

    report(&page, &mut io::stdout().lock())
}

/// Print the success notice, if any, then fail with the first error or print
/// the feed.
fn report(page: &Page, out: &mut impl Write) -> Result<()> {
    let view = page.view();
    if let Some(success) = view.form.success {
        writeln!(out, "{success}").context("writing to stdout")?;
    }

    let failure = page
        .form()
        .error_message()
        .or_else(|| page.search().error_message())
        .or_else(|| page.feed().error_message())
        .map(str::to_string);
    if let Some(message) = failure {
        out.flush().context("writing to stdout")?;
        bail!(message);
    }

    write!(out, "{}", render_feed_section(&view.feed)).context("writing to stdout")?;
    out.flush().context("writing to stdout")
}

fn dispatch(outgoing: Option<Outgoing>, transport: &Transport, tx: &Sender<Event>) {
    let Some(Outgoing { ticket, request }) = outgoing else {
        return;
    };
    let transport = transport.clone();
    let tx = tx.clone();
    thread::spawn(move || {
        let result = transport.execute(&request);
        // The loop may already be gone on quit.
        let _ = tx.send(Event::Completed { ticket, result });
    });
}

fn spawn_input_reader(tx: Sender<Event>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(Event::Line(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "reading stdin");
                    break;
                }
            }
        }
        let _ = tx.send(Event::InputClosed);
    });
}

fn print_page(page: &Page) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render_page(&page.view())).context("writing to stdout")?;
    write!(stdout, "> ").context("writing to stdout")?;
    stdout.flush().context("writing to stdout")
}
