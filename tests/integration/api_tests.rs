//! HTTP API integration tests
//!
//! Drives every endpoint through the same application factory the server
//! uses, including middleware and JSON error handling.

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::common::assertions::number;
    use crate::common::{IftaRequestFactory, RouteRequestFactory, TruckFactory, test_app};
    use actix_web::http::StatusCode;
    use actix_web::http::header::ContentType;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    // ==================== Service endpoints ====================

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = actix_test::init_service(test_app()).await;
        let resp =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("server").unwrap(), "MSR-Backend");

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(chrono::DateTime::parse_from_rfc3339(body["time"].as_str().unwrap()).is_ok());
    }

    #[actix_web::test]
    async fn test_info_endpoint_lists_routes() {
        let app = actix_test::init_service(test_app()).await;
        let body: Value =
            actix_test::call_and_read_body_json(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;

        assert_eq!(body["name"], "MSR Backend");
        assert_eq!(
            body["endpoints"],
            json!(["/v1/route/plan", "/v1/ifta/summary", "/v1/fuel/suggest"])
        );
    }

    // ==================== Route planning ====================

    #[actix_web::test]
    async fn test_route_plan_multi_leg() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/route/plan")
            .set_json(RouteRequestFactory::dallas_to_albuquerque())
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("x-request-id"));

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(number(&body, "total_distance_miles"), 777.2);
        assert_eq!(number(&body, "est_fuel_gallons"), 119.57);
        assert_eq!(number(&body, "toll_cost_est"), 23.32);
        assert_approx_eq!(number(&body, "est_fuel_cost"), 473.2, 0.011);
        assert_eq!(body["currency"], "USD");

        let legs = body["legs"].as_array().unwrap();
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[0]["from_label"], "Dallas, TX");
        assert_eq!(legs[1]["to_label"], "WP2");
        assert_eq!(legs[2]["to_label"], "Albuquerque, NM");
        let etas: Vec<u64> = legs
            .iter()
            .map(|leg| leg["eta_minutes"].as_u64().unwrap())
            .collect();
        assert_eq!(etas, vec![228, 292, 326]);

        let stops = body["suggested_fuel_stops"].as_array().unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0]["network"], "TA");
        assert_eq!(stops[0]["name"], "TA Station #100");
        assert_eq!(number(&body, "suggested_fuel_stops.0.gallons_to_buy"), 100.0);
        assert_eq!(stops[1]["network"], "Pilot");
        assert_eq!(number(&body, "suggested_fuel_stops.1.gallons_to_buy"), 19.6);
        assert_eq!(
            stops[1]["note"],
            "Mock suggestion \u{2014} replace with live pricing later."
        );
    }

    #[actix_web::test]
    async fn test_route_plan_single_hop() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/route/plan")
            .set_json(RouteRequestFactory::equator_hop(&["TA"]))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(number(&body, "total_distance_miles"), 76.0);
        assert_eq!(number(&body, "est_fuel_gallons"), 10.86);
        assert_eq!(body["suggested_fuel_stops"].as_array().unwrap().len(), 1);
        assert_eq!(number(&body, "suggested_fuel_stops.0.gallons_to_buy"), 10.9);
        assert_eq!(number(&body, "suggested_fuel_stops.0.price_per_gal"), 3.95);
    }

    #[actix_web::test]
    async fn test_route_plan_avoid_tolls() {
        let app = actix_test::init_service(test_app()).await;
        let mut payload = RouteRequestFactory::dallas_to_albuquerque();
        payload["avoid_tolls"] = json!(true);

        let req = actix_test::TestRequest::post()
            .uri("/v1/route/plan")
            .set_json(payload)
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(number(&body, "toll_cost_est"), 0.0);
        assert_eq!(number(&body, "total_distance_miles"), 777.2);
    }

    #[actix_web::test]
    async fn test_route_plan_rejects_low_mpg() {
        let app = actix_test::init_service(test_app()).await;
        let mut payload = RouteRequestFactory::equator_hop(&[]);
        payload["truck"] = TruckFactory::minimal(1.0, 200);

        let req = actix_test::TestRequest::post()
            .uri("/v1/route/plan")
            .set_json(payload)
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("truck.mpg")
        );
    }

    #[actix_web::test]
    async fn test_route_plan_rejects_unknown_network() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/route/plan")
            .set_json(RouteRequestFactory::equator_hop(&["Shell"]))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_route_plan_rejects_out_of_range_coordinates() {
        let app = actix_test::init_service(test_app()).await;
        let mut payload = RouteRequestFactory::equator_hop(&[]);
        payload["destination"] = json!({ "lat": 91.0, "lon": 0.0 });

        let req = actix_test::TestRequest::post()
            .uri("/v1/route/plan")
            .set_json(payload)
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    // ==================== IFTA ====================

    #[actix_web::test]
    async fn test_ifta_summary() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/ifta/summary")
            .insert_header(ContentType::json())
            .set_payload(IftaRequestFactory::quarter())
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["period"], "2025-Q1");
        assert_eq!(number(&body, "total_miles"), 150.0);
        assert_eq!(number(&body, "total_gallons"), 20.0);
        assert_eq!(number(&body, "mpg"), 7.5);

        assert_eq!(body["states"][0]["state"], "TX");
        assert_eq!(number(&body, "states.0.mpg"), 5.0);
        assert_eq!(body["states"][1]["state"], "NM");
        assert_eq!(number(&body, "states.1.gallons"), 0.0);
        assert!(body["states"][1]["mpg"].is_null());
    }

    #[actix_web::test]
    async fn test_ifta_summary_without_fuel() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/ifta/summary")
            .insert_header(ContentType::json())
            .set_payload(IftaRequestFactory::without_fuel())
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(number(&body, "mpg"), 0.0);
        assert!(body["states"][0]["mpg"].is_null());
    }

    #[actix_web::test]
    async fn test_ifta_summary_passes_negative_miles_through() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/ifta/summary")
            .set_json(json!({
                "period": "",
                "miles_by_state": { "TX": -5.0 },
                "gallons_by_state": {}
            }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["period"], "");
        assert_eq!(number(&body, "total_miles"), -5.0);
        assert_eq!(number(&body, "states.0.miles"), -5.0);
        assert_eq!(number(&body, "mpg"), 0.0);
    }

    #[actix_web::test]
    async fn test_ifta_summary_ties_round_to_even() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/ifta/summary")
            .set_json(json!({
                "period": "2025-Q3",
                "miles_by_state": { "TX": 100.125 },
                "gallons_by_state": {}
            }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(number(&body, "total_miles"), 100.12);
        assert_eq!(number(&body, "states.0.miles"), 100.12);
    }

    // ==================== Fuel suggestion ====================

    #[actix_web::test]
    async fn test_fuel_suggest() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/fuel/suggest")
            .set_json(json!({
                "network": "Loves",
                "route_distance_miles": 300.0,
                "truck": TruckFactory::minimal(6.0, 200)
            }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        let stops = body["recommended_stops"].as_array().unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0]["name"], "Loves Suggested");
        assert_eq!(number(&body, "recommended_stops.0.gallons_to_buy"), 50.0);
        assert_eq!(number(&body, "est_total_cost"), 201.5);
    }

    #[actix_web::test]
    async fn test_fuel_suggest_capped_by_tank() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/fuel/suggest")
            .set_json(json!({
                "network": "Pilot",
                "route_distance_miles": 2000.0,
                "truck": TruckFactory::minimal(5.0, 100)
            }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_approx_eq!(number(&body, "recommended_stops.0.gallons_to_buy"), 60.0);
        assert_approx_eq!(number(&body, "est_total_cost"), 239.4);
    }

    #[actix_web::test]
    async fn test_fuel_suggest_negative_distance_yields_negative_cost() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/fuel/suggest")
            .set_json(json!({
                "network": "TA",
                "route_distance_miles": -14.0,
                "truck": TruckFactory::minimal(7.0, 200)
            }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_approx_eq!(number(&body, "recommended_stops.0.gallons_to_buy"), -2.0);
        assert_approx_eq!(number(&body, "est_total_cost"), -7.9);
    }

    #[actix_web::test]
    async fn test_fuel_suggest_accepts_integral_float_tank() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/fuel/suggest")
            .set_json(json!({
                "network": "Loves",
                "route_distance_miles": 300.0,
                "truck": { "mpg": 6.0, "tank_capacity_gal": 200.0, "typical_weight_lbs": -1 }
            }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(number(&body, "recommended_stops.0.gallons_to_buy"), 50.0);
    }

    #[actix_web::test]
    async fn test_fuel_suggest_rejects_fractional_tank() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/v1/fuel/suggest")
            .set_json(json!({
                "network": "Loves",
                "route_distance_miles": 300.0,
                "truck": { "mpg": 6.0, "tank_capacity_gal": 200.5 }
            }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
