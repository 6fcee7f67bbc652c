use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use axum::extract::ws::{self, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::{ErrorResponse, Response};
use axum::routing::{any, get, post};
use axum::{Json, Router};
use chat_model::message::ChatMessage;
use chat_model::Category;
use futures_util::{Sink, SinkExt as _, Stream, StreamExt as _};
use http::StatusCode;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::chat::session::ChatSession;
use crate::chat::{ChatResponder, Config, QuickAction};

struct AppState {
    responder: Arc<ChatResponder>,
    config: Config,
}

type AppStateArg = State<Arc<AppState>>;

fn bad_request(msg: impl Display) -> ErrorResponse {
    (StatusCode::BAD_REQUEST, msg.to_string()).into()
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatReply {
    category: Category,
    response: String,
}

async fn chat(
    State(state): AppStateArg,
    Json(body): Json<ChatRequest>,
) -> axum::response::Result<Json<ChatReply>> {
    debug!("chat({body:?})");
    let message = body.message.trim();
    if message.is_empty() {
        return Err(bad_request("Empty message"));
    }
    let (category, response) = state.responder.answer(message);
    Ok(Json(ChatReply {
        category,
        response: response.to_string(),
    }))
}

async fn quick_actions(State(state): AppStateArg) -> Json<Vec<QuickAction>> {
    Json(state.config.quick_actions.clone())
}

/// Events pushed to the widget over the chat stream.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
enum ChatEvent {
    /// Visitor has not written anything yet: show the unread badge.
    Notification,
    Typing,
    Message(ChatMessage),
}

async fn create_chat_stream(ws: WebSocketUpgrade, State(state): AppStateArg) -> Response {
    ws.on_upgrade(move |socket| chat_stream(socket, state))
}

async fn send_event<S>(sink: &mut S, event: &ChatEvent) -> Result<(), S::Error>
where
    S: Sink<ws::Message> + Unpin,
{
    let json_text = serde_json::to_string(event)
        .unwrap_or_else(|e| format!("{{ \"error\": \"JSON serialization failed: {e}\" }}"));
    sink.send(ws::Message::text(json_text)).await
}

async fn chat_stream(socket: WebSocket, state: Arc<AppState>) {
    info!("New chat stream started.");
    let (sink, stream) = socket.split();
    match run_chat_stream(sink, stream, &state).await {
        Ok(()) => info!("Chat stream closed."),
        Err(e) => info!("Chat stream closed with: {e}."),
    }
}

async fn run_chat_stream<S, R, E>(mut sink: S, mut stream: R, state: &AppState) -> Result<(), E>
where
    S: Sink<ws::Message, Error = E> + Unpin,
    R: Stream<Item = Result<ws::Message, E>> + Unpin,
{
    let mut session = ChatSession::new(state.responder.clone(), &state.config);
    let notification = tokio::time::sleep(state.config.notification_delay());
    tokio::pin!(notification);
    let mut chatting = false;

    loop {
        tokio::select! {
            () = &mut notification, if !chatting => {
                chatting = true;
                send_event(&mut sink, &ChatEvent::Notification).await?;
            }
            frame = stream.next() => match frame {
                Some(Ok(ws::Message::Text(text))) => {
                    chatting = true;
                    let Some(turn) = session.send_message(text.as_str()) else {
                        continue;
                    };
                    send_event(&mut sink, &ChatEvent::Typing).await?;
                    tokio::time::sleep(session.typing_delay()).await;
                    let reply = session.deliver_reply(&turn);
                    send_event(&mut sink, &ChatEvent::Message(reply)).await?;
                }
                Some(Ok(ws::Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
            }
        }
    }
    for message in session.messages() {
        debug!(
            "[{}] {:?}: {}",
            message.time_label(),
            message.sender,
            message.content
        );
    }
    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new().nest(
        "/api/v1",
        Router::new()
            .route("/chat", post(chat))
            .route("/quick_actions", get(quick_actions))
            .route("/chat_stream", any(create_chat_stream))
            .with_state(state),
    )
}

/// Serves until `shutdown` resolves. In-flight HTTP requests are drained; open chat
/// streams end with the process.
pub async fn serve<F>(config: Config, responder: ChatResponder, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.serving_addr.clone();
    let static_dir = config.static_serving_dir.clone();
    let state = Arc::new(AppState {
        responder: Arc::new(responder),
        config,
    });
    let app = router(state).fallback_service(ServeDir::new(static_dir));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;
    info!("Serving chat on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Api server failed")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::chat::build_responder;
    use axum::response::IntoResponse;
    use responder::ResponderConfig;
    use serde_json::Value;
    use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
    use tokio::sync::oneshot;
    use tokio::task::JoinHandle;

    fn test_config() -> Config {
        Config {
            response_seed: Some(11),
            ..Default::default()
        }
    }

    fn responder(config: &Config) -> ChatResponder {
        build_responder(config, ResponderConfig::default()).unwrap()
    }

    fn state() -> Arc<AppState> {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = test_config();
        let responder = responder(&config);
        Arc::new(AppState {
            responder: Arc::new(responder),
            config,
        })
    }

    struct ChatClient {
        frames: UnboundedSender<ws::Message>,
        events: UnboundedReceiver<ws::Message>,
        task: JoinHandle<Result<(), axum::Error>>,
    }

    /// Runs a chat stream over in-memory channels instead of a websocket.
    fn connect(state: Arc<AppState>) -> ChatClient {
        let (frames, frames_rx) = mpsc::unbounded_channel::<ws::Message>();
        let (events_tx, events) = mpsc::unbounded_channel::<ws::Message>();
        let stream = Box::pin(futures_util::stream::unfold(frames_rx, |mut rx| async move {
            rx.recv().await.map(|m| (Ok::<_, axum::Error>(m), rx))
        }));
        let sink = Box::pin(futures_util::sink::unfold(
            events_tx,
            |tx, m: ws::Message| async move {
                match tx.send(m) {
                    Ok(()) => Ok(tx),
                    Err(e) => Err(axum::Error::new(e)),
                }
            },
        ));
        let task = tokio::spawn(async move { run_chat_stream(sink, stream, &state).await });
        ChatClient {
            frames,
            events,
            task,
        }
    }

    fn decode(frame: ws::Message) -> Value {
        match frame {
            ws::Message::Text(text) => serde_json::from_str(text.as_str()).unwrap(),
            other => panic!("Unexpected frame: {other:?}"),
        }
    }

    impl ChatClient {
        fn send(&self, text: &str) {
            self.frames.send(ws::Message::text(text)).unwrap();
        }

        async fn next_event(&mut self) -> Option<Value> {
            self.events.recv().await.map(decode)
        }

        /// Closes the client side and returns whatever the server still sent.
        async fn close(self) -> Vec<Value> {
            let ChatClient {
                frames,
                mut events,
                task,
            } = self;
            drop(frames);
            task.await.unwrap().unwrap();
            let mut rest = vec![];
            while let Some(frame) = events.recv().await {
                rest.push(decode(frame));
            }
            rest
        }
    }

    #[tokio::test(start_paused = true)]
    async fn idle_visitor_gets_notification() {
        let start = tokio::time::Instant::now();
        let mut client = connect(state());
        let event = client.next_event().await.unwrap();
        assert_eq!(event["type"], "notification");
        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert!(client.close().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn chatting_visitor_gets_reply_and_no_notification() {
        let state = state();
        let mut client = connect(state.clone());
        client.send("   ");
        client.send("Can I see your portfolio?");

        let typing = client.next_event().await.unwrap();
        assert_eq!(typing["type"], "typing");
        let message = client.next_event().await.unwrap();
        assert_eq!(message["type"], "message");
        assert_eq!(message["sender"], "bot");
        let content = message["content"].as_str().unwrap();
        assert!(state
            .responder
            .responses(Category::Projects)
            .iter()
            .any(|r| r == content));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(client.close().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn blank_frame_produces_no_events() {
        let mut client = connect(state());
        client.send("");
        client.send(" \n ");
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(client.events.try_recv().is_err());
        assert!(client.close().await.is_empty());
    }

    #[tokio::test]
    async fn serve_stops_on_shutdown() {
        let config = Config {
            serving_addr: "127.0.0.1:0".into(),
            ..test_config()
        };
        let responder = responder(&config);
        let (stop, stopped) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(config, responder, async {
            let _ = stopped.await;
        }));
        stop.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server did not shut down")
            .unwrap()
            .unwrap();
    }

    fn request(message: &str) -> Json<ChatRequest> {
        Json(ChatRequest {
            message: message.into(),
        })
    }

    #[tokio::test]
    async fn chat_classifies_message() {
        let Json(reply) = chat(State(state()), request("How much does a website cost?"))
            .await
            .unwrap();
        assert_eq!(reply.category, Category::Pricing);
        assert!(reply.response.contains('€'));
    }

    #[tokio::test]
    async fn chat_rejects_blank_message() {
        let response = chat(State(state()), request("   ")).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn quick_actions_come_from_config() {
        let state = state();
        let Json(actions) = quick_actions(State(state.clone())).await;
        assert_eq!(actions, state.config.quick_actions);
        for action in actions {
            let Json(reply) = chat(State(state.clone()), request(&action.message))
                .await
                .unwrap();
            assert_ne!(reply.category, Category::Default, "{}", action.message);
        }
    }

    #[test]
    fn serialize_events() {
        assert_eq!(
            serde_json::to_value(ChatEvent::Notification).unwrap(),
            serde_json::json!({ "type": "notification" })
        );
        let message = ChatMessage::bot("Hi!", chrono::Local::now());
        let json = serde_json::to_value(ChatEvent::Message(message)).unwrap();
        assert_eq!(json["type"], Value::String("message".into()));
        assert_eq!(json["sender"], Value::String("bot".into()));
        assert_eq!(json["content"], Value::String("Hi!".into()));
    }
}
