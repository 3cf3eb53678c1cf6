//! WebSocket batch streaming handler.
//!
//! Protocol: the client sends one text frame per batch, holding a JSON
//! array of request item strings; the server replies with one text frame
//! holding the JSON array of result strings, same length, same order.
//! The stream ends only when the peer closes it - item failures are
//! reported in place and never terminate the connection.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use tracing::{debug, info, warn};

use valmark_engine::{BatchValuationService, ConnectionContext};

/// WebSocket upgrade handler.
pub async fn ws_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_socket)
}

/// Drives one valuation stream to completion.
///
/// The service and diagnostic context live exactly as long as the
/// connection; batches are handled one at a time in arrival order, so a
/// single in-flight valuation exists per stream.
async fn handle_socket(mut socket: WebSocket) {
    let service = BatchValuationService::new();
    let mut context = ConnectionContext::new();
    info!("valuation stream connected");

    while let Some(received) = socket.recv().await {
        let message = match received {
            Ok(message) => message,
            Err(error) => {
                warn!(%error, "stream receive error");
                break;
            }
        };

        match message {
            Message::Text(text) => {
                let batch = decode_batch(&text);
                let results = service.process_batch(&mut context, &batch);
                let frame = match serde_json::to_string(&results) {
                    Ok(frame) => frame,
                    Err(error) => {
                        // Result strings are valid JSON already; an
                        // envelope failure would be a bug, not bad input.
                        warn!(%error, "failed to encode response batch");
                        break;
                    }
                };
                if let Err(error) = socket.send(Message::Text(frame)).await {
                    warn!(%error, "stream send error");
                    break;
                }
            }
            Message::Close(_) => {
                debug!("close frame received");
                break;
            }
            // Pings are answered by the protocol layer; binary frames
            // are not part of the batch protocol.
            other => {
                debug!(?other, "ignoring non-text frame");
            }
        }
    }

    info!(
        batches = context.batches(),
        peer = context.peer().unwrap_or(""),
        peer_changes = context.peer_changes(),
        "valuation stream closed"
    );
}

/// Decodes a batch frame.
///
/// A frame that is not a JSON array of strings degrades to a single-item
/// batch, so the item-level decode error reaches the client as a failed
/// result instead of silently dropping the frame.
fn decode_batch(frame: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(frame) {
        Ok(batch) => batch,
        Err(error) => {
            warn!(%error, "frame is not a batch array; treating as single item");
            vec![frame.to_string()]
        }
    }
}
