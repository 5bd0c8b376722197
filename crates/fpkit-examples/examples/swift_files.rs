//! Filtering file names with reusable predicates.
//!
//! Usage: cargo run --example swift_files

use fpkit_core::predicate::{self, ends_with, has_extension, has_no_extension, starts_with};
use fpkit_core::seq::Sequence;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> fpkit_core::error::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let example_files: Sequence<&str> =
        Sequence::from(["README.md", "HelloWorld.swift", "FlappyBird.swift", "Makefile"]);

    let swift = example_files.filter(ends_with(".swift"));
    println!("swift:        {:?}", swift.as_slice());

    let markdown = example_files.filter(has_extension("md"));
    println!("markdown:     {:?}", markdown.as_slice());

    let bare = example_files.filter(has_no_extension());
    println!("no extension: {:?}", bare.as_slice());

    let hello = example_files.filter(starts_with("Hello"));
    println!("hello:        {:?}", hello.as_slice());

    let camel = example_files.filter(predicate::matches(r"^[A-Z][a-z]+[A-Z]")?);
    println!("camel case:   {:?}", camel.as_slice());

    tracing::info!(total = example_files.len(), swift = swift.len(), "filtered files");
    Ok(())
}
