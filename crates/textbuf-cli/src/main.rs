//! Demo driver for the `textbuf` crate.
//!
//! Takes no arguments: invoking with any argument prints a usage line and
//! exits with status 1. Otherwise it exercises a handful of operations,
//! prints the results to stdout, and exits 0.

use std::{env, process::ExitCode};

use textbuf::{RecordArray, TextBuffer};

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| String::from("textbuf"));
    if args.next().is_some() {
        println!("{program} takes no arguments.");
        return ExitCode::FAILURE;
    }

    let mut banner = TextBuffer::from("   the go gopher   ");
    banner.trim().make_title();
    println!("title:       {banner}");
    println!("length:      {}", banner.len());

    let haystack = TextBuffer::from("the quick brown fox jumps over the lazy dog");
    println!("find 'the':  {:?}", haystack.find("the"));
    println!("rfind 'the': {:?}", haystack.rfind("the"));
    println!("count 'o':   {}", haystack.count("o"));
    println!("ends 'dog':  {}", haystack.ends_with("dog"));

    match haystack.substring(4, 9) {
        Ok(word) => println!("substring:   {word}"),
        Err(err) => println!("substring:   {err}"),
    }

    let digits = TextBuffer::from("12345");
    println!("is_numeric:  {}", digits.is_numeric());
    println!("is_alpha:    {}", digits.is_alpha());

    let mut log = RecordArray::new();
    log.push(banner);
    log.push(digits);
    if let Some(first) = log.get(0) {
        println!("stored:      {first}");
    }

    ExitCode::SUCCESS
}
