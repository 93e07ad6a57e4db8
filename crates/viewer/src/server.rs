#![forbid(unsafe_code)]

use crate::api::{Board, route};
use crate::http::{Method, read_request, write_response};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;
use tracing::{debug, warn};

/// Serves connections one at a time on the calling thread, so intents are
/// applied to the board strictly in arrival order.
pub(crate) fn run_viewer(listener: TcpListener, board: &mut Board) -> std::io::Result<()> {
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(err) = handle_connection(stream, board) {
                    debug!(error = %err, "connection dropped");
                }
            }
            Err(err) => warn!(error = %err, "accept failed"),
        }
    }
    Ok(())
}

fn handle_connection(mut stream: TcpStream, board: &mut Board) -> std::io::Result<()> {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let Some(request) = read_request(&mut stream)? else {
        return Ok(());
    };

    let response = route(board, &request);
    debug!(
        method = %request.method,
        path = %request.target.path,
        status = response.status,
        "request served"
    );
    write_response(&mut stream, &response, request.method == Method::Head)
}
