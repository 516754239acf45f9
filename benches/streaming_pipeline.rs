//! Benchmarks for the streaming pipeline
//!
//! This benchmark measures:
//! - SSE frame decoding + delta extraction over a full response
//! - Printing fragments into an in-memory writer

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use journal_sentiment::pipeline::fragment_stream;
use journal_sentiment::{print_fragments, BoxStream, Error, Fragment};

/// Sample SSE frames (OpenAI-compatible chunk format)
const SSE_FRAMES: &[&str] = &[
    r#"data: {"id":"chatcmpl-123","object":"chat.completion.chunk","created":1694268190,"model":"llama-3.3-70b-versatile","choices":[{"index":0,"delta":{"role":"assistant","content":""},"finish_reason":null}]}"#,
    r#"data: {"id":"chatcmpl-123","object":"chat.completion.chunk","created":1694268190,"model":"llama-3.3-70b-versatile","choices":[{"index":0,"delta":{"content":"Overall"},"finish_reason":null}]}"#,
    r#"data: {"id":"chatcmpl-123","object":"chat.completion.chunk","created":1694268190,"model":"llama-3.3-70b-versatile","choices":[{"index":0,"delta":{"content":" Sentiment: "},"finish_reason":null}]}"#,
    r#"data: {"id":"chatcmpl-123","object":"chat.completion.chunk","created":1694268190,"model":"llama-3.3-70b-versatile","choices":[{"index":0,"delta":{"content":"Mixed"},"finish_reason":null}]}"#,
    r#"data: {"id":"chatcmpl-123","object":"chat.completion.chunk","created":1694268190,"model":"llama-3.3-70b-versatile","choices":[{"index":0,"delta":{},"finish_reason":"stop"}]}"#,
    "data: [DONE]",
];

fn sse_body(repeat: usize) -> String {
    let content = &SSE_FRAMES[1..4];
    let mut body = format!("{}\n\n", SSE_FRAMES[0]);
    for _ in 0..repeat {
        for frame in content {
            body.push_str(frame);
            body.push_str("\n\n");
        }
    }
    body.push_str(SSE_FRAMES[4]);
    body.push_str("\n\n");
    body.push_str(SSE_FRAMES[5]);
    body.push_str("\n\n");
    body
}

/// Split the body into fixed-size network-like chunks.
fn chunked(body: &str, size: usize) -> Vec<Bytes> {
    body.as_bytes()
        .chunks(size)
        .map(Bytes::copy_from_slice)
        .collect()
}

fn bench_decode(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("sse_decode");

    let body = sse_body(200);
    group.throughput(Throughput::Bytes(body.len() as u64));

    for size in [64usize, 1024, 16 * 1024] {
        let chunks = chunked(&body, size);
        group.bench_function(format!("decode_and_print_chunk_{}", size), |b| {
            b.to_async(&rt).iter(|| {
                let chunks = chunks.clone();
                async move {
                    let input: BoxStream<'static, Bytes> = Box::pin(futures::stream::iter(
                        chunks.into_iter().map(Ok::<Bytes, Error>),
                    ));
                    let stream = fragment_stream(input).await.unwrap();
                    let mut out = Vec::with_capacity(4096);
                    let stats = print_fragments(stream, &mut out).await.unwrap();
                    black_box(stats);
                }
            })
        });
    }

    group.finish();
}

fn bench_print(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("print_fragments");

    group.bench_function("print_1000_fragments", |b| {
        b.to_async(&rt).iter(|| async {
            let items: Vec<journal_sentiment::Result<Fragment>> =
                (0..1000).map(|_| Ok(Fragment::text("token "))).collect();
            let stream: BoxStream<'static, Fragment> = Box::pin(futures::stream::iter(items));
            let mut out = Vec::with_capacity(8 * 1024);
            black_box(print_fragments(stream, &mut out).await.unwrap());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_print);
criterion_main!(benches);
