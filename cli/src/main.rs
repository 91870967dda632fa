//! Interactive terminal frontend for the todo API.
//!
//! Network and terminal plumbing only: all behavior lives in
//! `todolist-core`. The loop renders the store through the view layer,
//! parses one command per line, and feeds the resulting intents back into
//! the store.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use todolist_core::{
    input_key, render, HttpMethod, HttpRequest, HttpResponse, Intent, Key, RowEditor, TodoService,
    TodoStore, Transport, TransportError,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "todolist: terminal frontend for the todo API",
    long_about = None
)]
struct Cli {
    /// Base URL of the todo API.
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Executes requests with ureq. Status-code-as-error is disabled so the
/// core decides what a non-2xx status means.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.url).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.url).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.url).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.url).send_empty(),
        };
        let mut response = result.map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Add(String),
    Edit(u64),
    Type(String),
    Save,
    Cancel,
    Remove(u64),
    Reload,
    Help,
    Quit,
    Noop,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Noop;
    }
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word {
        "add" => Command::Add(rest.to_string()),
        "edit" => match rest.parse() {
            Ok(id) => Command::Edit(id),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "type" => Command::Type(rest.to_string()),
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "rm" | "delete" => match rest.parse() {
            Ok(id) => Command::Remove(id),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "reload" => Command::Reload,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn apply(intent: Intent, store: &mut TodoStore<UreqTransport>) {
    match intent {
        Intent::Add => store.add(),
        Intent::Delete(id) => store.remove(id),
        Intent::Save { id, title } => store.edit(id, &title),
    }
}

const HELP: &str = "commands:
  add <title>    create a todo
  edit <id>      start editing a row
  type <text>    replace the working title of the row being edited
  save           confirm the edit
  cancel         discard the edit
  rm <id>        delete a todo
  reload         refetch the list
  help           show this help
  quit           exit";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!(base_url = %cli.base_url, "starting todolist");

    let transport = UreqTransport::new();
    let mut store = TodoStore::new(TodoService::new(&cli.base_url, transport));
    let mut editor = RowEditor::default();

    store.load();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        for line in render(store.snapshot(), &editor) {
            println!("{line}");
        }
        print!("todo> ");
        stdout.flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading command")?;

        match parse_command(&line) {
            Command::Add(title) => {
                store.set_draft(title);
                if let Some(intent) = input_key(Key::Enter) {
                    apply(intent, &mut store);
                }
            }
            Command::Edit(id) => match store.todos().iter().find(|todo| todo.id == id).cloned() {
                Some(todo) => editor.begin(&todo),
                None => println!("no todo with id {id}"),
            },
            Command::Type(text) => {
                if editor.editing().is_some() {
                    editor.set_text(text);
                } else {
                    println!("nothing is being edited");
                }
            }
            Command::Save => match editor.key(Key::Enter) {
                Some(intent) => apply(intent, &mut store),
                None => println!("nothing is being edited"),
            },
            Command::Cancel => {
                editor.key(Key::Esc);
            }
            Command::Remove(id) => apply(Intent::Delete(id), &mut store),
            Command::Reload => store.reload(),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Noop => {}
            Command::Unknown(input) => println!("unrecognized command: {input} (try `help`)"),
        }
    }

    Ok(())
}
