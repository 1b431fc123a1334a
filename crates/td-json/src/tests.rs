//! Unit tests for the wire layer: document parsing, normalization, and
//! end-to-end request processing.

#[cfg(test)]
mod helpers {
    /// Scenario document: linear buses "1" = A–B and "2" = B–C (transfer at
    /// B), an isolated stop Z, 6 min wait, 30 km/h.
    pub const TRANSFER_DOCUMENT: &str = r#"{
        "base_requests": [
            { "type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.6,
              "road_distances": { "B": 1000 } },
            { "type": "Stop", "name": "B", "latitude": 55.6, "longitude": 37.7,
              "road_distances": { "C": 1000 } },
            { "type": "Stop", "name": "C", "latitude": 55.6, "longitude": 37.8,
              "road_distances": {} },
            { "type": "Stop", "name": "Z", "latitude": 55.6, "longitude": 37.9,
              "road_distances": {} },
            { "type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false },
            { "type": "Bus", "name": "2", "stops": ["B", "C"], "is_roundtrip": false }
        ],
        "routing_settings": { "bus_wait_time": 6, "bus_velocity": 30 },
        "stat_requests": []
    }"#;
}

// ── Document parsing and normalization ────────────────────────────────────────

#[cfg(test)]
mod parsing {
    use td_directory::config::Item;

    use crate::config::parse_document;

    #[test]
    fn linear_routes_palindromized() {
        let document = parse_document(super::helpers::TRANSFER_DOCUMENT).unwrap();
        let (config, _) = document.into_parts();

        let routes: Vec<&[String]> = config
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Bus(seed) => Some(seed.route.as_slice()),
                Item::Stop(_) => None,
            })
            .collect();

        assert_eq!(routes[0], ["A", "B", "A"]);
        assert_eq!(routes[1], ["B", "C", "B"]);
    }

    #[test]
    fn roundtrip_routes_unchanged() {
        let document = parse_document(
            r#"{
                "base_requests": [
                    { "type": "Stop", "name": "P", "latitude": 55.0, "longitude": 37.0,
                      "road_distances": {} },
                    { "type": "Bus", "name": "R", "stops": ["P", "P"], "is_roundtrip": true }
                ],
                "routing_settings": { "bus_wait_time": 6, "bus_velocity": 30 }
            }"#,
        )
        .unwrap();
        let (config, stats) = document.into_parts();

        let Item::Bus(seed) = &config.items[1] else {
            panic!("expected a bus item");
        };
        assert_eq!(seed.route, ["P", "P"]);
        assert!(seed.is_roundtrip);
        // stat_requests is optional and defaults to empty.
        assert!(stats.is_empty());
    }

    #[test]
    fn velocity_converted_to_metres_per_minute() {
        let document = parse_document(super::helpers::TRANSFER_DOCUMENT).unwrap();
        let (config, _) = document.into_parts();
        assert_eq!(config.routing_settings.velocity, 500.0);
        assert_eq!(config.routing_settings.wait_time, 6.0);
    }

    #[test]
    fn malformed_document_is_parse_error() {
        assert!(matches!(
            crate::process_document("{ not json"),
            Err(crate::JsonError::Parse(_))
        ));
    }

    #[test]
    fn undeclared_stop_is_build_error() {
        let result = crate::process_document(
            r#"{
                "base_requests": [
                    { "type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.6,
                      "road_distances": {} },
                    { "type": "Bus", "name": "1", "stops": ["A", "Ghost"],
                      "is_roundtrip": false }
                ],
                "routing_settings": { "bus_wait_time": 6, "bus_velocity": 30 },
                "stat_requests": []
            }"#,
        );
        assert!(matches!(result, Err(crate::JsonError::Build(_))));
    }
}

// ── End-to-end dispatch ───────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use serde_json::{json, Value};

    use td_core::GeoPoint;

    /// Run the transfer scenario with the given stat requests appended.
    fn run(stat_requests: Value) -> Vec<Value> {
        let mut document: Value =
            serde_json::from_str(super::helpers::TRANSFER_DOCUMENT).unwrap();
        document["stat_requests"] = stat_requests;
        let reply = crate::process_document(&document.to_string()).unwrap();
        serde_json::from_str(&reply).unwrap()
    }

    #[test]
    fn bus_summary() {
        let reply = run(json!([{ "id": 1, "type": "Bus", "name": "1" }]));
        let bus = &reply[0];

        assert_eq!(bus["request_id"], json!(1));
        assert_eq!(bus["stop_count"], json!(3)); // A,B,A
        assert_eq!(bus["unique_stop_count"], json!(2));
        assert_eq!(bus["route_length"], json!(2000));

        let geo_hop = GeoPoint::new(55.6, 37.6).distance_m(GeoPoint::new(55.6, 37.7));
        let expected = 2000.0 / (2.0 * geo_hop);
        let curvature = bus["curvature"].as_f64().unwrap();
        assert!((curvature - expected).abs() < 1e-4, "got {curvature}");
    }

    #[test]
    fn stop_listing_sorted() {
        let reply = run(json!([
            { "id": 1, "type": "Stop", "name": "B" },
            { "id": 2, "type": "Stop", "name": "Z" }
        ]));

        assert_eq!(reply[0], json!({ "request_id": 1, "buses": ["1", "2"] }));
        assert_eq!(reply[1], json!({ "request_id": 2, "buses": [] }));
    }

    #[test]
    fn route_with_transfer() {
        let reply = run(json!([{ "id": 7, "type": "Route", "from": "A", "to": "C" }]));

        assert_eq!(
            reply[0],
            json!({
                "request_id": 7,
                "total_time": 16.0,
                "items": [
                    { "type": "Wait", "stop_name": "A", "time": 6.0 },
                    { "type": "Bus", "bus": "1", "span_count": 1, "time": 2.0 },
                    { "type": "Wait", "stop_name": "B", "time": 6.0 },
                    { "type": "Bus", "bus": "2", "span_count": 1, "time": 2.0 }
                ]
            })
        );
    }

    #[test]
    fn route_to_self_is_empty() {
        let reply = run(json!([{ "id": 3, "type": "Route", "from": "A", "to": "A" }]));
        assert_eq!(
            reply[0],
            json!({ "request_id": 3, "total_time": 0.0, "items": [] })
        );
    }

    #[test]
    fn misses_report_not_found() {
        let reply = run(json!([
            { "id": 1, "type": "Route", "from": "A", "to": "Z" },
            { "id": 2, "type": "Route", "from": "A", "to": "Nowhere" },
            { "id": 3, "type": "Bus", "name": "999" },
            { "id": 4, "type": "Stop", "name": "Nowhere" }
        ]));

        for (index, id) in (1..=4).enumerate() {
            assert_eq!(
                reply[index],
                json!({ "request_id": id, "error_message": "not found" })
            );
        }
    }

    #[test]
    fn responses_preserve_request_order() {
        let reply = run(json!([
            { "id": 30, "type": "Stop", "name": "B" },
            { "id": 10, "type": "Bus", "name": "2" },
            { "id": 20, "type": "Route", "from": "B", "to": "C" }
        ]));

        assert_eq!(reply[0]["request_id"], json!(30));
        assert_eq!(reply[1]["request_id"], json!(10));
        assert_eq!(reply[2]["request_id"], json!(20));
    }
}
