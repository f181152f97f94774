use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::Settings,
    domain::{
        error::DomainError,
        models::player::{CommandSender, Player},
        services::{
            email_service::{EmailValidator, MailService},
            messaging_service::Messenger,
            recovery_password_service::RecoveryPasswordGenerator,
            registration_executor::RegistrationExecutor,
        },
    },
    usecase::register_command::RegisterCommand,
};

// Request

/// who issued the command, as reported by the game server
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SenderPayload {
    Player { name: String, uuid: Option<Uuid> },
    Console,
    CommandBlock,
}

/// json for a command invocation
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandRequest {
    pub sender: SenderPayload,
    #[serde(default)]
    pub args: Vec<String>,
}

// Response

/// json for command response: every message delivered to the sender, in order
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub messages: Vec<String>,
}

/// Sender that buffers its messages so they can be returned in the response
struct RecordingSender {
    name: String,
    player: Option<Player>,
    messages: Mutex<Vec<String>>,
}

impl RecordingSender {
    fn from_payload(payload: SenderPayload) -> Result<Self, DomainError> {
        let (name, player) = match payload {
            SenderPayload::Player { name, uuid } => {
                let player = Player::new(uuid.unwrap_or_else(Uuid::new_v4), name.clone())?;
                (name, Some(player))
            }
            SenderPayload::Console => ("CONSOLE".to_string(), None),
            SenderPayload::CommandBlock => ("@".to_string(), None),
        };
        Ok(Self {
            name,
            player,
            messages: Mutex::new(Vec::new()),
        })
    }

    fn into_messages(self) -> Vec<String> {
        self.messages.into_inner()
    }
}

impl CommandSender for RecordingSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_message(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }

    fn as_player(&self) -> Option<&Player> {
        self.player.as_ref()
    }
}

/* Router Function and Handler Function */

/// function return Router object
/// Suppose to be nested by main router
pub fn create_command_router<M, V, S, G, E>(
    register_command: RegisterCommand<M, V, S, G, E>,
    settings: Arc<Settings>,
) -> Router
where
    M: Messenger + 'static,
    V: EmailValidator + 'static,
    S: MailService + 'static,
    G: RecoveryPasswordGenerator + 'static,
    E: RegistrationExecutor + 'static,
{
    let state = AppState {
        register_command: Arc::new(register_command),
        settings,
    };

    Router::new()
        .route("/commands/register", post(register::<M, V, S, G, E>))
        .with_state(state)
}

pub struct AppState<M, V, S, G, E>
where
    M: Messenger,
    V: EmailValidator,
    S: MailService,
    G: RecoveryPasswordGenerator,
    E: RegistrationExecutor,
{
    pub register_command: Arc<RegisterCommand<M, V, S, G, E>>,
    pub settings: Arc<Settings>,
}

impl<M, V, S, G, E> Clone for AppState<M, V, S, G, E>
where
    M: Messenger,
    V: EmailValidator,
    S: MailService,
    G: RecoveryPasswordGenerator,
    E: RegistrationExecutor,
{
    fn clone(&self) -> Self {
        Self {
            register_command: Arc::clone(&self.register_command),
            settings: Arc::clone(&self.settings),
        }
    }
}

// handler function

/// handler function for /register
async fn register<M, V, S, G, E>(
    State(state): State<AppState<M, V, S, G, E>>,
    Json(payload): Json<CommandRequest>,
) -> impl IntoResponse
where
    M: Messenger + 'static,
    V: EmailValidator + 'static,
    S: MailService + 'static,
    G: RecoveryPasswordGenerator + 'static,
    E: RegistrationExecutor + 'static,
{
    let sender = match RecordingSender::from_payload(payload.sender) {
        Ok(sender) => sender,
        Err(e) => return (StatusCode::BAD_REQUEST, Json(e.to_string())).into_response(),
    };

    state
        .register_command
        .execute_command(&sender, &payload.args, &state.settings);

    let response = CommandResponse {
        messages: sender.into_messages(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
