//! The directory itself: one-shot builder plus the read-only query surface.
//!
//! # Build pipeline
//!
//! 1. Partition configuration items so stops precede buses — the stop count
//!    fixes `N` before any table is allocated.
//! 2. Add stops: intern names (ids in first-mention order), record
//!    coordinates, write road distances with symmetric defaulting.
//! 3. Add buses: resolve route names to ids, mark each visited stop.
//! 4. Compute the geo table.
//! 5. Fill direct spans, then close over transfers (the `routing` module).
//!
//! Duplicate stop or bus names are not errors: the name is interned once and
//! later items overwrite earlier data.  A route or distance entry naming a
//! stop no item declares is rejected — the dense tables are sized before any
//! bus is seen, so there is nowhere to put a stray stop.

use std::collections::{HashMap, HashSet};

use td_core::{BusId, RoutingSettings, StopId, TdError, TdResult};

use crate::config::{BusSeed, Config, Item, StopSeed};
use crate::info::{BusStats, Itinerary, Leg, StopInfo};
use crate::matrix::SquareMatrix;
use crate::model::{Bus, Stop};
use crate::routing::{self, RouteItem, RouteRecord};

/// An immutable transit network index.
///
/// Queries take `&self` and never mutate; a built directory may be shared
/// across threads by reference.
#[derive(Debug)]
pub struct TransportDirectory {
    pub(crate) stop_ids: HashMap<String, StopId>,
    pub(crate) stops: Vec<Stop>,
    pub(crate) bus_ids: HashMap<String, BusId>,
    pub(crate) buses: Vec<Bus>,

    /// Road distances in metres; `+∞` where no declaration exists.
    pub(crate) distances: SquareMatrix<f64>,
    /// Great-circle distances in metres; symmetric.
    pub(crate) geo_distances: SquareMatrix<f64>,
    /// Best-journey records; see the `routing` module.
    pub(crate) routes: SquareMatrix<RouteRecord>,

    pub(crate) settings: RoutingSettings,
}

// ── Construction ──────────────────────────────────────────────────────────────

impl TransportDirectory {
    /// Build the full directory from a parsed configuration.
    ///
    /// One-shot: the configuration is consumed and the result is frozen.
    pub fn build(config: Config) -> TdResult<Self> {
        let Config {
            items,
            routing_settings,
        } = config;

        let mut stop_seeds = Vec::new();
        let mut bus_seeds = Vec::new();
        for item in items {
            match item {
                Item::Stop(seed) => stop_seeds.push(seed),
                Item::Bus(seed) => bus_seeds.push(seed),
            }
        }

        // Names declared by actual Stop items; references outside this set
        // are structural errors.
        let declared: HashSet<String> =
            stop_seeds.iter().map(|seed| seed.name.clone()).collect();

        let stop_count = stop_seeds.len();
        let mut directory = Self {
            stop_ids: HashMap::with_capacity(stop_count),
            stops: vec![Stop::default(); stop_count],
            bus_ids: HashMap::with_capacity(bus_seeds.len()),
            buses: vec![Bus::default(); bus_seeds.len()],
            distances: SquareMatrix::filled(stop_count, f64::INFINITY),
            geo_distances: SquareMatrix::filled(stop_count, 0.0),
            routes: SquareMatrix::filled(stop_count, RouteRecord::UNREACHABLE),
            settings: routing_settings,
        };

        for seed in stop_seeds {
            directory.add_stop(seed, &declared)?;
        }
        for seed in bus_seeds {
            directory.add_bus(seed)?;
        }

        directory.compute_geo_distances();
        routing::fill_spans(
            &directory.buses,
            &directory.distances,
            &directory.settings,
            &mut directory.routes,
        );
        routing::close_transfers(
            directory.stop_ids.len(),
            directory.settings.wait_time,
            &mut directory.routes,
        );

        Ok(directory)
    }

    /// Intern a stop name, assigning the next dense id on first mention.
    fn register_stop(&mut self, name: &str) -> StopId {
        let next = StopId(self.stop_ids.len() as u16);
        *self.stop_ids.entry(name.to_owned()).or_insert(next)
    }

    /// Intern a bus name, assigning the next dense id on first mention.
    fn register_bus(&mut self, name: &str) -> BusId {
        let next = BusId(self.bus_ids.len() as u16);
        *self.bus_ids.entry(name.to_owned()).or_insert(next)
    }

    fn add_stop(&mut self, seed: StopSeed, declared: &HashSet<String>) -> TdResult<()> {
        let id = self.register_stop(&seed.name);
        {
            let stop = &mut self.stops[id.index()];
            stop.name = seed.name;
            stop.coords = seed.coords;
        }

        for (neighbour, distance) in seed.road_distances {
            if !declared.contains(&neighbour) {
                return Err(TdError::UndeclaredStop {
                    referrer: self.stops[id.index()].name.clone(),
                    stop: neighbour,
                });
            }
            let adjacent = self.register_stop(&neighbour);
            self.stops[id.index()].adjacent.insert(adjacent);
            self.distances[(id, adjacent)] = distance;
            // Symmetric default: only where the reverse direction has not
            // already been declared (first insertion into the reverse
            // adjacency set).  A later explicit declaration still wins
            // because the write above is unconditional.
            if self.stops[adjacent.index()].adjacent.insert(id) {
                self.distances[(adjacent, id)] = distance;
            }
        }
        Ok(())
    }

    fn add_bus(&mut self, seed: BusSeed) -> TdResult<()> {
        let id = self.register_bus(&seed.name);
        let mut route = Vec::with_capacity(seed.route.len());
        for stop_name in &seed.route {
            let stop_id = *self.stop_ids.get(stop_name).ok_or_else(|| {
                TdError::UndeclaredStop {
                    referrer: seed.name.clone(),
                    stop: stop_name.clone(),
                }
            })?;
            route.push(stop_id);
            self.stops[stop_id.index()].buses.insert(id);
        }

        let bus = &mut self.buses[id.index()];
        bus.name = seed.name;
        bus.route = route;
        bus.is_roundtrip = seed.is_roundtrip;
        Ok(())
    }

    fn compute_geo_distances(&mut self) {
        let n = self.stop_ids.len();
        for from in 0..n {
            for to in from..n {
                let d = self.stops[from]
                    .coords
                    .distance_m(self.stops[to].coords);
                let (from, to) = (StopId(from as u16), StopId(to as u16));
                self.geo_distances[(from, to)] = d;
                self.geo_distances[(to, from)] = d;
            }
        }
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

impl TransportDirectory {
    /// Number of registered stops.
    pub fn stop_count(&self) -> usize {
        self.stop_ids.len()
    }

    /// Number of registered buses.
    pub fn bus_count(&self) -> usize {
        self.bus_ids.len()
    }

    pub fn settings(&self) -> RoutingSettings {
        self.settings
    }

    /// Summary statistics for the named bus, or `None` if unknown.
    pub fn bus(&self, name: &str) -> Option<BusStats> {
        let id = *self.bus_ids.get(name)?;
        let route = &self.buses[id.index()].route;
        Some(BusStats {
            stops_count: route.len(),
            unique_stops_count: self.count_unique_stops(route),
            road_route_length: self.route_length(route, &self.distances),
            geo_route_length: self.route_length(route, &self.geo_distances),
        })
    }

    /// Sorted names of the buses serving the named stop, or `None` if unknown.
    pub fn stop(&self, name: &str) -> Option<StopInfo<'_>> {
        let id = *self.stop_ids.get(name)?;
        let mut buses: Vec<&str> = self.stops[id.index()]
            .buses
            .iter()
            .map(|bus| self.buses[bus.index()].name.as_str())
            .collect();
        buses.sort_unstable();
        Some(StopInfo { buses })
    }

    /// The fastest journey between two named stops.
    ///
    /// `None` if either name is unknown or no path exists.  A journey from a
    /// stop to itself is the empty itinerary with zero total time.
    pub fn route(&self, from: &str, to: &str) -> Option<Itinerary<'_>> {
        let from = *self.stop_ids.get(from)?;
        let to = *self.stop_ids.get(to)?;
        if from == to {
            return Some(Itinerary::empty());
        }
        let record = &self.routes[(from, to)];
        if !record.is_reachable() {
            return None;
        }
        Some(self.reconstruct(record))
    }

    fn count_unique_stops(&self, route: &[StopId]) -> usize {
        let mut seen = vec![false; self.stops.len()];
        let mut count = 0;
        for id in route {
            if !seen[id.index()] {
                seen[id.index()] = true;
                count += 1;
            }
        }
        count
    }

    fn route_length(&self, route: &[StopId], table: &SquareMatrix<f64>) -> f64 {
        route.windows(2).map(|pair| table[(pair[0], pair[1])]).sum()
    }

    /// Unfold a journey record into alternating wait and ride legs.
    ///
    /// Transfer records form an implicit binary tree over table cells; this
    /// is an iterative in-order traversal with an explicit stack of pending
    /// right subtrees.  Transfer chains can be O(N) deep, so recursion is
    /// deliberately avoided.
    fn reconstruct(&self, root: &RouteRecord) -> Itinerary<'_> {
        let mut legs = Vec::new();
        let mut total_time = 0.0;
        let mut pending: Vec<&RouteRecord> = Vec::new();
        let mut current = root;

        loop {
            match current.item {
                RouteItem::Transfer { from, middle, to } => {
                    pending.push(&self.routes[(middle, to)]);
                    current = &self.routes[(from, middle)];
                }
                RouteItem::Span {
                    from,
                    bus,
                    spans_count,
                } => {
                    total_time += self.settings.wait_time + current.time;
                    legs.push(Leg::Wait {
                        stop: self.stops[from.index()].name.as_str(),
                        time: self.settings.wait_time,
                    });
                    legs.push(Leg::Ride {
                        bus: self.buses[bus.index()].name.as_str(),
                        span_count: spans_count,
                        time: current.time,
                    });
                    match pending.pop() {
                        Some(next) => current = next,
                        None => break,
                    }
                }
                // Reachable records always carry provenance; the caller
                // checked `is_reachable` before descending.
                RouteItem::None => unreachable!("finite journey record without provenance"),
            }
        }

        Itinerary { total_time, legs }
    }
}
