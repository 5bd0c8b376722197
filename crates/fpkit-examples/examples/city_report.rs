//! City population report built from filter, map and reduce.
//!
//! Lists every city with over one million inhabitants together with its
//! population. The input is read as JSON from the first argument when one is
//! given, otherwise the built-in sample is used.
//!
//! Usage: cargo run --example city_report [-- '<json array of cities>']

use fpkit_chain::prelude::*;
use fpkit_core::config::StageConfig;
use fpkit_core::seq::Sequence;
use fpkit_core::stage::{Stage, StageExt};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Deserialize)]
struct City {
    name: String,
    /// Population in thousands of inhabitants.
    population: u64,
}

impl City {
    /// Population in inhabitants, or `None` if it does not fit in a `u64`.
    fn scaling_population(&self) -> Option<City> {
        let population = self.population.checked_mul(1000)?;
        Some(City {
            name: self.name.clone(),
            population,
        })
    }
}

/// Append one report line per city; cities whose population overflowed are
/// left out.
fn report_line(result: String, city: &Option<City>) -> String {
    match city {
        Some(c) => format!("{result}\n{}: {}", c.name, c.population),
        None => {
            tracing::warn!("skipping city with out-of-range population");
            result
        }
    }
}

fn sample_cities() -> Sequence<City> {
    [
        ("Orlando", 262),
        ("Boston", 4180),
        ("New York City", 8550),
        ("Berlin", 3562),
    ]
    .into_iter()
    .map(|(name, population)| City {
        name: name.into(),
        population,
    })
    .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cities: Sequence<City> = match std::env::args().nth(1) {
        Some(json) => serde_json::from_str(&json)?,
        None => sample_cities(),
    };

    // Method chaining directly on the sequence.
    let output = cities
        .filter(|c| c.population > 1000)
        .map(City::scaling_population)
        .reduce(String::from("City: Population"), report_line);
    println!("method chain:\n{output}\n");

    // The same report as a reusable stage pipeline.
    let config = StageConfig::new()
        .with_tag("city_report")
        .with_metadata("cities", serde_json::json!(cities.len()));
    let report = FilterStage::new(|c: &City| c.population > 1000)
        .pipe(MapStage::new(City::scaling_population))
        .pipe(ReduceStage::new(String::from("City: Population"), report_line));
    println!("stage pipeline:\n{}", report.invoke(cities, &config));

    tracing::info!(run_id = %config.run_id, config = %config.to_json()?, "report finished");
    Ok(())
}
