// ABOUTME: Benchmarks for PDU parsing and short message text decoding
// ABOUTME: Covers each alphabet so table lookups and the escape loop can be compared

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use smpp_decode::datatypes::DataCoding;
use smpp_decode::frame;
use smpp_decode::{TextDecoder, parse};
use std::io::Cursor;
use std::time::Duration;

fn deliver_sm(data_coding: u8, short_message: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.push(0x00);
    body.extend_from_slice(&[0x01, 0x01]);
    body.extend_from_slice(b"447700900123\0");
    body.extend_from_slice(&[0x01, 0x01]);
    body.extend_from_slice(b"447700900456\0");
    body.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, data_coding, 0x00]);
    body.push(short_message.len() as u8);
    body.extend_from_slice(short_message);

    let mut pdu = Vec::new();
    pdu.extend_from_slice(&((16 + body.len()) as u32).to_be_bytes());
    pdu.extend_from_slice(&[0x00, 0x00, 0x00, 0x05, 0, 0, 0, 0, 0, 0, 0, 1]);
    pdu.extend_from_slice(&body);
    pdu
}

fn gsm_payload() -> Vec<u8> {
    let mut payload = Vec::new();
    while payload.len() < 150 {
        payload.extend_from_slice(b"Price ");
        payload.extend_from_slice(&[0x1B, 0x65]);
        payload.extend_from_slice(b"5 ");
    }
    payload
}

fn ucs2_payload() -> Vec<u8> {
    "Ûñïçødē ".repeat(8).encode_utf16().flat_map(u16::to_be_bytes).collect()
}

fn roman8_payload() -> Vec<u8> {
    (0u8..140).map(|i| 0x80 | i).collect()
}

fn bench_frame_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_check");
    group.measurement_time(Duration::from_secs(5));

    let pdu = deliver_sm(0x00, &gsm_payload());
    group.bench_function("deliver_sm", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(black_box(pdu.as_slice()));
            frame::check(&mut cursor)
        })
    });
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.measurement_time(Duration::from_secs(5));

    let enquire_link = [
        0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01,
    ];
    group.bench_function("enquire_link", |b| b.iter(|| parse(black_box(&enquire_link))));

    let pdu = deliver_sm(0x00, &gsm_payload());
    group.bench_function("deliver_sm", |b| b.iter(|| parse(black_box(&pdu))));
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_text");
    group.measurement_time(Duration::from_secs(5));

    let decoder = TextDecoder::default();
    let cases = [
        ("gsm7", DataCoding::SmscDefault, gsm_payload()),
        ("ucs2", DataCoding::Ucs2, ucs2_payload()),
        ("roman8", DataCoding::OctetUnspecified, roman8_payload()),
        ("latin1", DataCoding::Latin1, roman8_payload()),
    ];

    for (name, data_coding, payload) in &cases {
        group.bench_with_input(BenchmarkId::new("alphabet", name), payload, |b, payload| {
            b.iter(|| decoder.decode(black_box(payload), *data_coding))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frame_check, bench_parse, bench_text);
criterion_main!(benches);
