//! Simple CLI that reads HTML from stdin and writes its plain content to stdout.
//!
//! Usage: `plain_content [--content-digests] [--node-indexes] [--blocks | --raw-blocks]`
//!
//! `--blocks` and `--raw-blocks` print a JSON block listing instead of HTML.

use plain_content::{
    encoding::decode_html, extract_text_blocks_as_plain_text, extract_text_blocks_raw,
    plain_content_bytes, Options, TextBlock,
};
use std::io::{self, Read};

enum Output {
    Html,
    Blocks,
    RawBlocks,
}

fn main() {
    let mut options = Options::default();
    let mut output = Output::Html;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--content-digests" => options.content_digests = true,
            "--node-indexes" => options.node_indexes = true,
            "--blocks" => output = Output::Blocks,
            "--raw-blocks" => output = Output::RawBlocks,
            other => eprintln!("Ignoring unknown argument: {other}"),
        }
    }

    // Read HTML from stdin
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let rendered = match output {
        Output::Html => plain_content_bytes(&html, &options),
        Output::Blocks => {
            extract_text_blocks_as_plain_text(&decode_html(&html)).map(|b| blocks_json(&b))
        }
        Output::RawBlocks => extract_text_blocks_raw(&decode_html(&html)).map(|b| blocks_json(&b)),
    };

    match rendered {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("Failed to render plain content: {err}");
            std::process::exit(1);
        }
    }
}

fn blocks_json(blocks: &[TextBlock]) -> String {
    serde_json::to_string(blocks).unwrap_or_default()
}
