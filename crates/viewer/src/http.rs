#![forbid(unsafe_code)]

use std::fmt;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;

const MAX_LINE_BYTES: u64 = 4096;
const MAX_HEADERS: usize = 64;
const MAX_BODY_BYTES: u64 = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Head,
    Post,
    Other(String),
}

impl Method {
    pub(crate) fn parse(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            _ => Method::Other(raw.to_string()),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Other(raw) => raw,
        }
    }

    /// HEAD is served by the GET handler with the body withheld.
    pub(crate) fn reads(&self) -> bool {
        matches!(self, Method::Get | Method::Head)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request target split at the first `?`. Neither half is decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Target {
    pub(crate) path: String,
    pub(crate) query: Option<String>,
}

impl Target {
    pub(crate) fn parse(raw: &str) -> Self {
        match raw.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                query: Some(query.to_string()),
            },
            None => Self {
                path: raw.to_string(),
                query: None,
            },
        }
    }

    /// Raw value of the first `key=value` pair named `key`.
    pub(crate) fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .as_deref()?
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }
}

#[derive(Debug)]
pub(crate) struct HttpRequest {
    pub(crate) method: Method,
    pub(crate) target: Target,
    pub(crate) if_none_match: Option<String>,
    pub(crate) body: Vec<u8>,
}

/// Reads one request. `Ok(None)` when the peer closed before sending a
/// request line.
pub(crate) fn read_request(stream: &mut TcpStream) -> std::io::Result<Option<HttpRequest>> {
    let mut reader = BufReader::new(stream);

    let Some(request_line) = read_line(&mut reader)? else {
        return Ok(None);
    };
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(target)) = (parts.next(), parts.next()) else {
        return Ok(None);
    };
    let method = Method::parse(method);
    let target = Target::parse(target);

    let mut content_length: u64 = 0;
    let mut if_none_match = None;
    for _ in 0..MAX_HEADERS {
        let Some(line) = read_line(&mut reader)? else {
            break;
        };
        if line.is_empty() {
            break;
        }
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "content-length" => content_length = value.parse().unwrap_or(0),
            "if-none-match" => if_none_match = Some(value.trim_matches('"').to_string()),
            _ => {}
        }
    }

    let mut body = Vec::new();
    reader
        .take(content_length.min(MAX_BODY_BYTES))
        .read_to_end(&mut body)?;

    Ok(Some(HttpRequest {
        method,
        target,
        if_none_match,
        body,
    }))
}

/// One CRLF-terminated line with the terminator stripped; `None` at EOF.
fn read_line<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut raw = Vec::new();
    let read = reader.take(MAX_LINE_BYTES).read_until(b'\n', &mut raw)?;
    if read == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&raw);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Percent-decodes one path segment. `+` is a literal here.
pub(crate) fn decode_path_segment(raw: &str) -> Option<String> {
    percent_decode(raw, false)
}

/// Percent-decodes a query value, where `+` stands for a space.
pub(crate) fn decode_query_value(raw: &str) -> Option<String> {
    percent_decode(raw, true)
}

/// `None` on empty input, malformed escapes or non-UTF-8 output.
fn percent_decode(raw: &str, plus_is_space: bool) -> Option<String> {
    if raw.is_empty() || raw.len() > 256 {
        return None;
    }
    let mut out = Vec::with_capacity(raw.len());
    let mut bytes = raw.bytes();
    while let Some(byte) = bytes.next() {
        out.push(match byte {
            b'%' => {
                let hi = (bytes.next()? as char).to_digit(16)?;
                let lo = (bytes.next()? as char).to_digit(16)?;
                u8::try_from(hi * 16 + lo).ok()?
            }
            b'+' if plus_is_space => b' ',
            other => other,
        });
    }
    String::from_utf8(out).ok()
}

pub(crate) struct Response {
    pub(crate) status: &'static str,
    pub(crate) content_type: &'static str,
    pub(crate) etag: Option<String>,
    pub(crate) allow: Option<&'static str>,
    pub(crate) body: Vec<u8>,
}

impl Response {
    pub(crate) fn json(status: &'static str, body: &serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json; charset=utf-8",
            etag: None,
            allow: None,
            body: body.to_string().into_bytes(),
        }
    }

    pub(crate) fn not_modified(etag: String) -> Self {
        Self {
            status: "304 Not Modified",
            content_type: "application/json; charset=utf-8",
            etag: Some(etag),
            allow: None,
            body: Vec::new(),
        }
    }

    pub(crate) fn with_etag(mut self, etag: String) -> Self {
        self.etag = Some(etag);
        self
    }

    pub(crate) fn with_allow(mut self, allow: &'static str) -> Self {
        self.allow = Some(allow);
        self
    }
}

pub(crate) fn write_response(
    stream: &mut TcpStream,
    response: &Response,
    head_only: bool,
) -> std::io::Result<()> {
    let mut head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nCache-Control: no-store\r\nConnection: close\r\n",
        response.status, response.content_type
    );
    if let Some(etag) = response.etag.as_deref() {
        head.push_str(&format!("ETag: \"{etag}\"\r\n"));
    }
    if let Some(allow) = response.allow {
        head.push_str(&format!("Allow: {allow}\r\n"));
    }
    head.push_str(&format!("Content-Length: {}\r\n\r\n", response.body.len()));

    stream.write_all(head.as_bytes())?;
    if !head_only {
        stream.write_all(&response.body)?;
    }
    stream.flush()
}
