//! Decoder benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use glyphstream::parser::decode;
use glyphstream::render::HeadlessDisplay;
use glyphstream::Session;

/// A stream that scatters characters across an 80x25 screen.
fn draw_char_stream(commands: usize) -> Vec<u8> {
    let mut stream = vec![0x01, 80, 25, 0];
    for i in 0..commands {
        let x = (i % 80) as u8;
        let y = (i % 25) as u8;
        stream.extend_from_slice(&[0x02, x, y, (i % 16) as u8, b'#']);
    }
    stream.push(0xFF);
    stream
}

/// A stream dominated by line rasterization.
fn draw_line_stream(commands: usize) -> Vec<u8> {
    let mut stream = vec![0x01, 80, 25, 0];
    for i in 0..commands {
        let x2 = (i % 80) as u8;
        let y2 = (i % 25) as u8;
        stream.extend_from_slice(&[0x03, 0, 0, x2, y2, 14, b'*']);
    }
    stream.push(0xFF);
    stream
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoder");

    let stream = draw_char_stream(1000);
    group.throughput(Throughput::Bytes(stream.len() as u64));
    group.bench_function("decode_draw_chars", |b| {
        b.iter(|| {
            let commands = decode(black_box(&stream)).unwrap();
            black_box(commands)
        })
    });

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    let chars = draw_char_stream(1000);
    group.throughput(Throughput::Bytes(chars.len() as u64));
    group.bench_function("replay_draw_chars", |b| {
        b.iter(|| {
            let mut session = Session::new(HeadlessDisplay::new());
            session.run(black_box(&chars)).unwrap();
            black_box(session.screen().width())
        })
    });

    let lines = draw_line_stream(200);
    group.throughput(Throughput::Bytes(lines.len() as u64));
    group.bench_function("replay_draw_lines", |b| {
        b.iter(|| {
            let mut session = Session::new(HeadlessDisplay::new());
            session.run(black_box(&lines)).unwrap();
            black_box(session.screen().width())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_session);
criterion_main!(benches);
