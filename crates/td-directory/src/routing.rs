//! Journey table construction: direct-span filling and transfer closure.
//!
//! # Record semantics
//!
//! `records[(from, to)].time` is the minimum total ride time in minutes from
//! `from` to `to`, *excluding* the wait before first boarding.  The wait at
//! `from` is charged during itinerary reconstruction; every transfer inside
//! the journey charges one additional `wait_time` here.
//!
//! Two passes populate the table:
//!
//! 1. [`fill_spans`] — for every bus, the best contiguous single-bus ride
//!    between each ordered pair of its route positions.
//! 2. [`close_transfers`] — Floyd–Warshall over the table, composing rides
//!    through an intermediate stop at the cost of one wait.

use td_core::{BusId, RoutingSettings, StopId};

use crate::matrix::SquareMatrix;
use crate::model::Bus;

// ── Records ───────────────────────────────────────────────────────────────────

/// Provenance tag of a journey table cell.
///
/// Reconstruction never follows pointers: a `Transfer` names the two cells
/// `(from, middle)` and `(middle, to)` of the same table, which form an
/// implicit binary tree with `Span` leaves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RouteItem {
    /// Initial sentinel; only ever paired with an infinite time.
    None,
    /// A contiguous ride on one bus covering `spans_count` consecutive route
    /// positions starting at the position holding `from`.
    Span {
        from: StopId,
        bus: BusId,
        spans_count: u16,
    },
    /// Composition of `(from, middle)` and `(middle, to)`, one wait between.
    Transfer {
        from: StopId,
        middle: StopId,
        to: StopId,
    },
}

/// One cell of the journey table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RouteRecord {
    /// Ride time in minutes, excluding the initial wait.  `+∞` = unreachable.
    pub time: f64,
    pub item: RouteItem,
}

impl RouteRecord {
    pub const UNREACHABLE: RouteRecord = RouteRecord {
        time: f64::INFINITY,
        item: RouteItem::None,
    };

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.time.is_finite()
    }
}

// ── Pass 1: direct spans ──────────────────────────────────────────────────────

/// Fill the best single-bus ride for every ordered stop pair a bus connects.
///
/// For each bus the pass walks the stored route once, maintaining a prefix
/// array `span_time[j]` = ride time from position `j` to the current position
/// `i`.  A bus that revisits a stop produces a second, slower candidate for
/// the same cell; the strict `<` keeps the earlier one.
pub fn fill_spans(
    buses: &[Bus],
    distances: &SquareMatrix<f64>,
    settings: &RoutingSettings,
    records: &mut SquareMatrix<RouteRecord>,
) {
    for (index, bus) in buses.iter().enumerate() {
        let bus_id = BusId(index as u16);
        let route = &bus.route;
        let mut span_time = vec![0.0; route.len()];

        for i in 1..route.len() {
            let dt = distances[(route[i - 1], route[i])] / settings.velocity;
            for j in (0..i).rev() {
                span_time[j] += dt;
                let time = span_time[j];
                let cell = &mut records[(route[j], route[i])];
                if time < cell.time {
                    *cell = RouteRecord {
                        time,
                        item: RouteItem::Span {
                            from: route[j],
                            bus: bus_id,
                            spans_count: (i - j) as u16,
                        },
                    };
                }
            }
        }
    }
}

// ── Pass 2: transfer closure ──────────────────────────────────────────────────

/// Floyd–Warshall over the journey table with a wait penalty per composition.
///
/// `middle` iterates outermost; ties resolve to the lower `middle` because
/// the replacement test is strict.  O(N³) time, in-place.
pub fn close_transfers(
    stop_count: usize,
    wait_time: f64,
    records: &mut SquareMatrix<RouteRecord>,
) {
    let ids = |n: usize| (0..n as u16).map(StopId);

    for middle in ids(stop_count) {
        for from in ids(stop_count) {
            for to in ids(stop_count) {
                let through =
                    records[(from, middle)].time + wait_time + records[(middle, to)].time;
                if through < records[(from, to)].time {
                    records[(from, to)] = RouteRecord {
                        time: through,
                        item: RouteItem::Transfer { from, middle, to },
                    };
                }
            }
        }
    }
}
