//! Map and reduce over a list of numbers.
//!
//! Usage: cargo run --example numbers

use fpkit_chain::prelude::*;
use fpkit_core::config::StageConfig;
use fpkit_core::seq::Sequence;
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

    let numbers = Sequence::from([1, 2, 3, 4, 5]);

    let larger_numbers = numbers.map(|n| n + 1);
    println!("larger: {:?}", larger_numbers.as_slice());

    let sum = numbers.reduce(0, |result, x| result + x);
    println!("sum:    {sum}");

    // The same computation as a stage pipeline.
    let config = StageConfig::new().with_tag("numbers");
    let pipeline = MapStage::new(|n: &i32| n + 1)
        .pipe(ReduceStage::new(0, |acc: i32, n: &i32| acc + n));
    let total = pipeline.invoke(numbers, &config);
    tracing::info!(run_id = %config.run_id, total, "pipeline finished");
    println!("sum of larger: {total}");
}
