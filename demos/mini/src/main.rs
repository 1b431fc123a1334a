//! mini — smallest example for the rust_td transit directory engine.
//!
//! Builds a six-stop network with three buses directly from config structs
//! (no JSON involved) and prints bus summaries, stop listings, and a couple
//! of journeys.

use anyhow::Result;

use td_core::{GeoPoint, RoutingSettings};
use td_directory::{BusSeed, Config, Item, Leg, StopSeed, TransportDirectory};

// ── Network description ───────────────────────────────────────────────────────

fn stop(name: &str, lat: f64, lon: f64, distances: &[(&str, f64)]) -> Item {
    Item::Stop(StopSeed {
        name: name.to_owned(),
        coords: GeoPoint::new(lat, lon),
        road_distances: distances
            .iter()
            .map(|&(neighbour, d)| (neighbour.to_owned(), d))
            .collect(),
    })
}

/// Linear bus: the engine expects the palindromic traversal, so expand here
/// the way the JSON parser would.
fn linear_bus(name: &str, stops: &[&str]) -> Item {
    let mut route: Vec<String> = stops.iter().map(|s| s.to_string()).collect();
    for i in (0..route.len() - 1).rev() {
        route.push(route[i].clone());
    }
    Item::Bus(BusSeed {
        name: name.to_owned(),
        route,
        is_roundtrip: false,
    })
}

fn roundtrip_bus(name: &str, stops: &[&str]) -> Item {
    Item::Bus(BusSeed {
        name: name.to_owned(),
        route: stops.iter().map(|s| s.to_string()).collect(),
        is_roundtrip: true,
    })
}

fn network() -> Config {
    Config {
        items: vec![
            stop("Harbour", 59.93, 30.25, &[("Market", 900.0)]),
            stop("Market", 59.935, 30.26, &[("Old Town", 700.0), ("Station", 1400.0)]),
            stop("Old Town", 59.94, 30.27, &[("Station", 800.0)]),
            stop("Station", 59.945, 30.28, &[("Airport", 9000.0)]),
            stop("Airport", 59.99, 30.4, &[]),
            stop("Depot", 59.9, 30.2, &[]),
            linear_bus("11", &["Harbour", "Market", "Old Town"]),
            linear_bus("22", &["Market", "Station", "Airport"]),
            roundtrip_bus("ring", &["Market", "Old Town", "Station", "Market"]),
        ],
        routing_settings: RoutingSettings::from_wire(4.0, 36.0), // 4 min wait, 600 m/min
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let directory = TransportDirectory::build(network())?;
    println!(
        "directory: {} stops, {} buses",
        directory.stop_count(),
        directory.bus_count()
    );
    println!();

    for name in ["11", "22", "ring"] {
        let stats = directory.bus(name).expect("bus declared above");
        println!(
            "bus {name:>4}: {} stops ({} unique), {:.0} m road, curvature {:.2}",
            stats.stops_count,
            stats.unique_stops_count,
            stats.road_route_length,
            stats.curvature(),
        );
    }
    println!();

    for name in ["Market", "Airport", "Depot"] {
        let info = directory.stop(name).expect("stop declared above");
        println!("stop {name}: buses {:?}", info.buses);
    }
    println!();

    for (from, to) in [("Harbour", "Airport"), ("Old Town", "Harbour")] {
        match directory.route(from, to) {
            None => println!("{from} → {to}: not found"),
            Some(itinerary) => {
                println!("{from} → {to}: {:.1} min", itinerary.total_time);
                for leg in &itinerary.legs {
                    match *leg {
                        Leg::Wait { stop, time } => {
                            println!("    wait {time:.0} min at {stop}");
                        }
                        Leg::Ride { bus, span_count, time } => {
                            println!("    ride bus {bus} for {span_count} stops ({time:.1} min)");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
