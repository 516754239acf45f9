//! Streaming decoders (Bytes -> JSON Value)

use crate::pipeline::Decoder;
use crate::{BoxStream, Error, PipeResult};
use bytes::Bytes;
use futures::{stream, StreamExt};
use serde_json::Value;

/// Server-sent events decoder:
/// - frames are separated by a blank line
/// - `data:` lines of a frame are joined with `\n`; other fields and `:` comments are ignored
/// - frames without data are skipped
/// - CRLF, CR and LF all end a line
/// - stops on "[DONE]"
/// - a data payload that is not JSON is an error
pub struct SseDecoder {
    done_signal: String,
}

impl Default for SseDecoder {
    fn default() -> Self {
        Self {
            done_signal: "[DONE]".to_string(),
        }
    }
}

/// Data payload of one SSE frame, if it has any `data:` lines.
fn frame_data(frame: &str) -> Option<String> {
    let mut data: Option<String> = None;
    for line in frame.lines() {
        if line.starts_with(':') {
            continue;
        }
        let Some(rest) = line.strip_prefix("data:") else {
            continue;
        };
        let rest = rest.strip_prefix(' ').unwrap_or(rest);
        match data.as_mut() {
            Some(d) => {
                d.push('\n');
                d.push_str(rest);
            }
            None => data = Some(rest.to_string()),
        }
    }
    data.filter(|d| !d.trim().is_empty())
}

/// Append `bytes` with every line ending rewritten to `\n`.
///
/// `pending_cr` carries a trailing `\r` across calls so a CRLF split between two
/// network chunks still counts as one line ending.
fn push_normalized(buf: &mut Vec<u8>, bytes: &[u8], pending_cr: &mut bool) {
    for &b in bytes {
        if std::mem::take(pending_cr) && b == b'\n' {
            continue;
        }
        if b == b'\r' {
            buf.push(b'\n');
            *pending_cr = true;
        } else {
            buf.push(b);
        }
    }
}

fn find_frame_end(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\n\n")
}

enum Parsed {
    Frame(Value),
    Skip,
    Done,
}

#[async_trait::async_trait]
impl Decoder for SseDecoder {
    async fn decode_stream(
        &self,
        input: BoxStream<'static, Bytes>,
    ) -> PipeResult<BoxStream<'static, Value>> {
        let done_signal = self.done_signal.clone();

        let parse = move |raw: &[u8]| -> PipeResult<Parsed> {
            // Frames are only cut at "\n\n", so a multi-byte character is never split here.
            let text = String::from_utf8_lossy(raw);
            match frame_data(&text) {
                None => Ok(Parsed::Skip),
                Some(d) if d.trim() == done_signal => Ok(Parsed::Done),
                Some(d) => serde_json::from_str(&d)
                    .map(Parsed::Frame)
                    .map_err(Error::Serialization),
            }
        };

        // `None` state: finished (done signal, EOF, or after an error).
        let stream = stream::unfold(
            Some((input, Vec::<u8>::new(), false)),
            move |state| {
                let parse = parse.clone();
                async move {
                    let Some((mut input, mut buf, mut pending_cr)) = state else {
                        return None;
                    };
                    loop {
                        if let Some(idx) = find_frame_end(&buf) {
                            let frame: Vec<u8> = buf.drain(..idx + 2).collect();
                            match parse(&frame[..idx]) {
                                Ok(Parsed::Frame(v)) => {
                                    return Some((Ok(v), Some((input, buf, pending_cr))))
                                }
                                Ok(Parsed::Skip) => continue,
                                Ok(Parsed::Done) => return None,
                                Err(e) => return Some((Err(e), None)),
                            }
                        }

                        match input.next().await {
                            Some(Ok(bytes)) => push_normalized(&mut buf, &bytes, &mut pending_cr),
                            Some(Err(e)) => return Some((Err(e), None)),
                            None => {
                                // EOF without a trailing blank line: parse the remainder once.
                                return match parse(&buf) {
                                    Ok(Parsed::Frame(v)) => Some((Ok(v), None)),
                                    Ok(_) => None,
                                    Err(e) => Some((Err(e), None)),
                                };
                            }
                        }
                    }
                }
            },
        );

        Ok(Box::pin(stream))
    }
}
