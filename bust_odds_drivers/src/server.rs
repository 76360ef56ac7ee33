use crate::request::{RawBustRequest, RequestError};
use crate::ConfigServer;
use actix_web::middleware::Logger;
use actix_web::web;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use bust_odds::BustQuery;

pub struct Server;

impl Server {
    pub async fn run(config: &ConfigServer) -> Result<(), std::io::Error> {
        log::info!(
            "starting HTTP server on {}:{}",
            config.host,
            config.port
        );
        let mut server = HttpServer::new(|| App::new().wrap(Logger::default()).configure(configure));
        if config.workers > 0 {
            server = server.workers(config.workers);
        }
        server
            .bind((config.host.as_str(), config.port))?
            .run()
            .await
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/dealer").route("/bust", web::post().to(get_bust_probability)))
        .route("/health", web::get().to(health));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json("ok")
}

/// Probability for the player to bust on the next card.
async fn get_bust_probability(body: web::Bytes) -> Result<HttpResponse, RequestError> {
    log::info!("enter... body={}", String::from_utf8_lossy(&body));

    let query = RawBustRequest::from_slice(&body)
        .and_then(BustQuery::try_from)
        .map_err(|err| {
            log::warn!("Invalid body content: {}", err);
            err
        })?;

    let report = query.report();
    log::info!(
        "exit... probability={} hand_total={} busting_cards={:?}",
        report.probability,
        report.hand_value.total,
        report.busting_cards
    );
    log::debug!("{:?}", report);

    Ok(HttpResponse::Ok().json(report.probability))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    async fn post_bust(body: Value) -> (StatusCode, Value) {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/dealer/bust")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn nineteen_against_a_single_ten() {
        let (status, body) = post_bust(json!({ "hand": [10, 9], "remainingCards": [10] })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_f64(), Some(1.0));
    }

    #[actix_web::test]
    async fn nineteen_against_mixed_cards() {
        let (status, body) =
            post_bust(json!({ "hand": [10, 9], "remainingCards": [1, 2, 3, 10] })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_f64(), Some(0.5));
    }

    #[actix_web::test]
    async fn ten_can_never_bust() {
        let (status, body) = post_bust(json!({
            "hand": [5, 5],
            "remainingCards": [2, 3, 4, 5, 6, 7, 8, 9, 10],
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_f64(), Some(0.0));
    }

    #[actix_web::test]
    async fn long_bag_of_tens_busts() {
        let remaining = vec![10; 65_536];
        let (status, body) =
            post_bust(json!({ "hand": [10, 10], "remainingCards": remaining })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_f64(), Some(1.0));
    }

    #[actix_web::test]
    async fn rejections_are_unprocessable() {
        let cases = [
            (
                json!({ "remainingCards": [1] }),
                "Missing 'hand' array in the message body.",
            ),
            (
                json!({ "hand": [12], "remainingCards": [1] }),
                "Wrong value found in 'hand': 12. Expected values are integer between 1 and 10 included",
            ),
            (
                json!({ "hand": [2] }),
                "Missing 'remainingCards' array in the message body.",
            ),
            (
                json!({ "hand": [2], "remainingCards": [] }),
                "There should be at least a value in 'remainingCards', 0 given",
            ),
            (
                json!({ "hand": [2], "remainingCards": ["A"] }),
                "Wrong value found in 'remainingCards': \"A\". Expected values are integer between 1 and 10 included",
            ),
        ];
        for (request, message) in cases {
            let (status, body) = post_bust(request).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body, json!(message));
        }
    }

    #[actix_web::test]
    async fn malformed_body_is_bad_request() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/dealer/bust")
            .set_payload("{ hand: ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn health_is_ok() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
