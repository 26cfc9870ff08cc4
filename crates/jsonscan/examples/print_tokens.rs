//! Prints the tokens of a JSON document that arrives in irregular pieces,
//! the way a network buffer or a chunked HTTP body hands them over.
//!
//! The document is read twice: once as segments held together, and once
//! piece by piece with partial input allowed, carrying the reader state from
//! one piece to the next and finishing it once the last piece is in.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonscan --example print_tokens
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use jsonscan::{JsonReader, ReaderOptions, ReaderState, TokenKind};

fn main() {
    let pieces: [&[u8]; 6] = [
        br#"{"file": "ma"#,
        br#"in.rs", "li"#,
        br#"nes": [12, 4"#,
        br#"0, 7], "esc": "say \"#,
        br#""hi\"", "ok": tr"#,
        br#"ue}"#,
    ];

    println!("-- segments --");
    for token in JsonReader::from_segments(&pieces) {
        let token = token.expect("document is valid");
        let indent = "  ".repeat(token.depth);
        match token.kind {
            TokenKind::PropertyName => println!("{indent}{}:", token.value.as_bstr()),
            TokenKind::Value => println!(
                "{indent}{:?} {} ({})",
                token.value_kind,
                token.value.as_bstr(),
                if token.value.is_borrowed() { "borrowed" } else { "joined" }
            ),
            kind => println!("{indent}{kind:?}"),
        }
    }

    println!("-- pieces --");
    let options = ReaderOptions {
        allow_partial_input: true,
        ..ReaderOptions::default()
    };
    let mut state = ReaderState::new(options).expect("options are valid");
    let mut pending: Vec<u8> = Vec::new();
    for piece in pieces {
        pending.extend_from_slice(piece);
        let mut reader = JsonReader::with_state(&pending, state);
        while reader.read().expect("document is valid") {
            println!("{:?} {}", reader.token_kind(), reader.value().as_bstr());
        }
        let consumed = reader.position();
        state = reader.into_state();
        pending.drain(..consumed);
    }

    // Nothing more arrives: whatever is pending must now complete the document.
    let mut reader = JsonReader::with_state(&pending, state.finish());
    while reader.read().expect("document is complete") {
        println!("{:?} {}", reader.token_kind(), reader.value().as_bstr());
    }
    println!("finished at depth {}", reader.depth());
}
