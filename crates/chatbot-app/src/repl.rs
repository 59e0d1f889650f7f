//! Read-eval-print loop: the interactive presentation surface.
//!
//! Each line read is one submission, handled to completion before the
//! next line is read. The session lives exactly as long as one `run` call.

use chatbot_ai::{Session, TurnPipeline};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::render;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplOptions {
    pub json: bool,
    pub recommendations: bool,
}

enum Command {
    History,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "/history" => Some(Command::History),
        "/quit" | "/exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Run one interactive session until `/quit` or end of input, returning
/// the finished session.
pub async fn run<R, W>(
    pipeline: &TurnPipeline,
    input: R,
    mut output: W,
    options: ReplOptions,
) -> std::io::Result<Session>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new();
    info!(session = %session.id(), "session opened");

    if !options.json {
        output.write_all(render::banner().as_bytes()).await?;
    }

    let mut lines = input.lines();
    loop {
        if !options.json {
            output.write_all(b"\n> ").await?;
            output.flush().await?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::History) => {
                let text = if options.json {
                    let mut json = serde_json::to_string(session.turns())
                        .map_err(std::io::Error::other)?;
                    json.push('\n');
                    json
                } else {
                    render::render_transcript(session.turns())
                };
                output.write_all(text.as_bytes()).await?;
            }
            None => {
                let Some(outcome) = pipeline.handle_user_input(&mut session, &line).await else {
                    continue;
                };
                let text = if options.json {
                    let mut json =
                        serde_json::to_string(&outcome).map_err(std::io::Error::other)?;
                    json.push('\n');
                    json
                } else {
                    render::render_outcome(&outcome, options.recommendations)
                };
                output.write_all(text.as_bytes()).await?;
            }
        }
        output.flush().await?;
    }

    output.flush().await?;
    info!(session = %session.id(), turns = session.len(), "session closed");
    Ok(session)
}
