//! yoga-qa: terminal client for the Yoga RAG backend.
//! Reads config, POSTs questions to the backend, prints the rendered answer,
//! sources, and safety warning. One-shot with a positional question, or a
//! line-oriented loop over stdin.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use yoga_qa_client::{config, App, Client};

struct Args {
    config_path: Option<PathBuf>,
    question: Option<String>,
}

fn parse_args() -> Args {
    let mut config_path = None;
    let mut question = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = args.next().map(PathBuf::from);
        } else if question.is_none() {
            question = Some(arg);
        }
    }
    Args {
        config_path,
        question,
    }
}

fn resolve_config_path(flag: Option<PathBuf>) -> PathBuf {
    // 1. --config <path> flag
    if let Some(path) = flag {
        return path;
    }
    // 2. YOGA_QA_CONFIG env var
    if let Ok(val) = std::env::var("YOGA_QA_CONFIG") {
        return PathBuf::from(val);
    }
    // 3. Default path (~/.yoga-qa/config.yaml)
    config::default_config_path().unwrap_or_else(|| {
        eprintln!("Error: unable to determine config path (set --config or YOGA_QA_CONFIG)");
        process::exit(1);
    })
}

/// Load the config, treating a missing file as defaults. A present but
/// unparsable file is a hard error.
fn load_config(path: &Path) -> config::Config {
    if !path.exists() {
        return config::Config::default();
    }
    match config::load(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "Error: failed to load config from {}: {}",
                path.display(),
                e
            );
            process::exit(1);
        }
    }
}

/// Run one submit through the view state machine. Returns false on transport
/// failure.
async fn ask_once(app: &mut App, client: &Client, input: &str, out: &mut impl Write) -> bool {
    let query = match app.submit(input) {
        Some(q) => q,
        None => return true,
    };
    let _ = write!(out, "{}", app.render());
    let _ = out.flush();

    match client.ask(&query).await {
        Ok(response) => {
            app.resolve(response);
            let _ = write!(out, "{}", app.render());
            let _ = out.flush();
            true
        }
        Err(_) => {
            app.fail();
            let _ = write!(out, "{}", app.render());
            let _ = out.flush();
            false
        }
    }
}

fn main() {
    let args = parse_args();
    let config_path = resolve_config_path(args.config_path);
    let cfg = load_config(&config_path);
    let client = Client::new(cfg.base_url());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to create runtime: {}", e);
            process::exit(1);
        });

    rt.block_on(async {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut app = App::new();

        // One-shot: question given as a positional argument.
        if let Some(question) = args.question {
            if !ask_once(&mut app, &client, &question, &mut out).await {
                process::exit(1);
            }
            return;
        }

        // Interactive: one submit per non-empty stdin line.
        let _ = writeln!(out, "🧘 Ask Me Anything About Yoga");
        let _ = out.flush();
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            ask_once(&mut app, &client, &line, &mut out).await;
        }
    });
}
