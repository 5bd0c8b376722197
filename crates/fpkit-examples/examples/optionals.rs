//! Adding optional values without unwrapping.
//!
//! Usage: cargo run --example optionals

use fpkit_chain::prelude::*;
use fpkit_core::config::StageConfig;
use fpkit_core::optional::{add_optionals, chain_optional};
use fpkit_core::seq::{identity, identity_any};
use fpkit_core::stage::{Stage, StageExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let x: Option<i64> = Some(3);
    let y: Option<i64> = None;

    println!("x + x = {:?}", add_optionals(x, x));
    println!("x + y = {:?}", add_optionals(x, y));
    println!("noOp: {}", identity("Foo"));

    // The erased version hands back `Box<dyn Any>`; the caller has to guess
    // the type again.
    let erased = identity_any(Box::new("Bar"));
    match erased.downcast_ref::<&str>() {
        Some(s) => println!("noOpAny: {s}"),
        None => println!("noOpAny: not a &str"),
    }
    if erased.downcast_ref::<i64>().is_none() {
        println!("noOpAny: not an i64");
    }

    let greeting = chain_optional(Some("Hello"), Some("World"), |a, b| format!("{a}, {b}!"));
    println!("{greeting:?}");

    // Parse two fields of a record and add them only if both parse.
    let first = StageLambda::new(|line: String, _: &StageConfig| {
        line.split(',').next().and_then(|s| s.trim().parse::<i64>().ok())
    });
    let second = StageLambda::new(|line: String, _: &StageConfig| {
        line.split(',').nth(1).and_then(|s| s.trim().parse::<i64>().ok())
    });
    let add_fields =
        FanOut::new(first, second).pipe(ChainOptionalStage::new(|a: i64, b: i64| a + b));

    let config = StageConfig::new().with_tag("optionals");
    let lines = vec!["3, 4".to_string(), "3, oops".to_string(), "10".to_string()];
    for (line, sum) in lines.clone().into_iter().zip(add_fields.batch(lines, &config)) {
        match sum {
            Some(total) => println!("{line:>8} -> {total}"),
            None => tracing::info!(run_id = %config.run_id, line = %line, "record incomplete"),
        }
    }
}
