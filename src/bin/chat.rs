use std::sync::Arc;

use chat_relay::client::{Author, ChatController, Completion, HttpRelay, RelayTransport};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Terminal chat against a running relay. Type a line and press Enter to send.
#[derive(Debug, Parser)]
#[command(name = "chat", version)]
struct Args {
    /// Base URL of the relay server.
    #[arg(long, default_value = "http://localhost:5000")]
    server: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let transport: Arc<dyn RelayTransport> = Arc::new(HttpRelay::new(&args.server));

    let mut controller = ChatController::new();
    let mut rendered = 0usize;
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => {
                        controller.set_input(line);
                        if let Some(pending) = controller.submit() {
                            let transport = transport.clone();
                            let tx = tx.clone();
                            tokio::spawn(async move {
                                let completion = pending.dispatch(transport.as_ref()).await;
                                let _ = tx.send(completion);
                            });
                        }
                    }
                    None => stdin_open = false,
                }
            }
            Some(completion) = rx.recv() => {
                controller.resolve(completion);
            }
        }

        rendered = render_ready(&controller, rendered);

        if !stdin_open && controller.transcript().pending() == 0 {
            break;
        }
    }

    Ok(())
}

/// Print entries from `from` onward until the first unresolved reply.
fn render_ready(controller: &ChatController, from: usize) -> usize {
    let mut next = from;
    for entry in &controller.transcript().entries()[from..] {
        let Some(text) = entry.text() else { break };
        let who = match entry.author {
            Author::User => "you",
            Author::Relay => "bot",
        };
        println!("{who}> {text}");
        next += 1;
    }
    next
}
