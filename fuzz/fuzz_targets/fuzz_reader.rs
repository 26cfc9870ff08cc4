#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsonscan::chunk_utils::split_at_offsets;
use jsonscan::{Cursor, JsonReader, ReaderError, ReaderOptions, Token};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 5; // 1 flag byte + 4-byte split seed

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// JSON whitespace, plus bytes that are never valid between tokens.
static FILLER: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r", b",", b"\\", b"/", b"\"", b"]"];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed % 10 == 0 {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07);
        data[1..HEADER].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let mut prefix = HEADER;
        while prefix < size {
            let limit = max_size - prefix;
            prefix += append_filler(&mut data[prefix..], limit);
            prefix += append_value(&mut data[prefix..], size, limit);
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Appends up to 8 filler bytes, mostly whitespace.
fn append_filler(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let count = rng.random_range(0..=limit.min(8));
        for slot in &mut buf[..count] {
            let table = if rng.random_ratio(1, 16) { FILLER } else { &FILLER[..4] };
            *slot = table[rng.random_range(0..table.len())][0];
        }
        count
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let len = with_rng(|rng| rng.random_range(size / 2..size * 2 + 1).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..len).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("serializing an arbitrary value");
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(21)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            _ => {
                let members: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(members.into_iter().map(|(k, v)| (k, v.0))))
            }
        };
        Ok(ArbitraryValue(value))
    }
}

/// Reads until the end of input or the first error.
fn drain<'a, C: Cursor<'a>>(
    reader: JsonReader<'a, C>,
) -> (Vec<Token<'a>>, Option<ReaderError>) {
    let mut tokens = Vec::new();
    for token in reader {
        match token {
            Ok(token) => tokens.push(token),
            Err(error) => return (tokens, Some(error)),
        }
    }
    (tokens, None)
}

fn reader(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let split_seed = u32::from_le_bytes(data[1..HEADER].try_into().unwrap());
    let input = &data[HEADER..];

    let options = ReaderOptions {
        allow_multiple_json_values: flags & 1 != 0,
        allow_trailing_commas: flags & 2 != 0,
        allow_partial_input: flags & 4 != 0,
        ..ReaderOptions::default()
    };

    let mut rng = SmallRng::seed_from_u64(u64::from(split_seed));
    let cut_count = rng.random_range(0..=input.len().min(64));
    let cuts: Vec<usize> = (0..cut_count).map(|_| rng.random::<u32>() as usize).collect();
    let segments = split_at_offsets(input, &cuts);

    let contiguous = drain(JsonReader::with_options(input, options).unwrap());
    let segmented = drain(JsonReader::from_segments_with_options(&segments, options).unwrap());
    assert_eq!(contiguous, segmented, "segments {segments:?}");

    if let (tokens, None) = &contiguous {
        for token in tokens {
            assert!(token.start < input.len());
            assert!(token.depth <= options.max_depth);
        }
    }
}

fuzz_target!(|data: &[u8]| reader(data));
