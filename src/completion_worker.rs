use crate::db::{self, profile, quiz_result};
use crate::logger;
use crate::models::OutcomeKind;
use crossbeam_channel::{Receiver, Sender};
use rusqlite::Connection;
use std::path::PathBuf;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionRequest {
    Report {
        generation: u64,
        user_id: String,
        quiz_id: String,
        tags: Vec<String>,
        outcome: OutcomeKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResponse {
    Saved { generation: u64, result_id: u64 },
    Error { generation: u64, error: String },
}

impl CompletionResponse {
    pub fn generation(&self) -> u64 {
        match self {
            CompletionResponse::Saved { generation, .. }
            | CompletionResponse::Error { generation, .. } => *generation,
        }
    }
}

fn store_report(
    conn: &Connection,
    user_id: &str,
    quiz_id: &str,
    tags: &[String],
    outcome: OutcomeKind,
) -> rusqlite::Result<u64> {
    let result_id = quiz_result::create_quiz_result(conn, user_id, quiz_id, tags, outcome)?;
    profile::set_quiz_completed(conn, user_id, true)?;
    Ok(result_id)
}

pub fn handle_request(conn: &Connection, request: CompletionRequest) -> CompletionResponse {
    match request {
        CompletionRequest::Report {
            generation,
            user_id,
            quiz_id,
            tags,
            outcome,
        } => {
            logger::info(&format!(
                "Worker storing quiz result (generation {}) for {}",
                generation, user_id
            ));
            match store_report(conn, &user_id, &quiz_id, &tags, outcome) {
                Ok(result_id) => CompletionResponse::Saved {
                    generation,
                    result_id,
                },
                Err(e) => {
                    logger::error(&format!("Worker failed to store quiz result: {}", e));
                    CompletionResponse::Error {
                        generation,
                        error: e.to_string(),
                    }
                }
            }
        }
    }
}

pub fn spawn_completion_worker(
    db_path: PathBuf,
    response_tx: Sender<CompletionResponse>,
    request_rx: Receiver<CompletionRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("emobalance::completion_worker".to_string())
        .spawn(move || {
            let conn = match db::init_db(&db_path) {
                Ok(conn) => Some(conn),
                Err(e) => {
                    logger::error(&format!("Worker could not open database: {}", e));
                    None
                }
            };

            while let Ok(request) = request_rx.recv() {
                let response = match &conn {
                    Some(conn) => handle_request(conn, request),
                    None => {
                        let CompletionRequest::Report { generation, .. } = request;
                        CompletionResponse::Error {
                            generation,
                            error: "baza de date nu este disponibilă".to_string(),
                        }
                    }
                };
                if response_tx.send(response).is_err() {
                    break;
                }
            }
            logger::info("Completion worker channel disconnected, exiting");
        })
        .expect("Failed to spawn completion worker thread")
}
