use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{App, test, web};

use disc_tally::controller::catalog::home;

mod common;

#[actix_web::test]
async fn home_page_lists_courses_in_the_dropdown() -> Result<(), Box<dyn std::error::Error>> {
    let config_and_pool = common::setup_catalog(include_str!("fixture_catalog.sql")).await?;

    let app = test::init_service(
        App::new()
            .app_data(Data::new(config_and_pool.clone()))
            .route("/home", web::get().to(home)),
    )
    .await;

    let req = test::TestRequest::get().uri("/home").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec())?;
    assert!(html.contains("Ale Discgolf"));
    assert!(html.contains("Skatas"));
    // Courses exist, so the start button is enabled.
    assert!(!html.contains("class=\"start-round\" disabled"));
    Ok(())
}

#[actix_web::test]
async fn home_page_with_an_empty_catalog_disables_round_start()
-> Result<(), Box<dyn std::error::Error>> {
    let config_and_pool = common::setup_catalog("").await?;

    let app = test::init_service(
        App::new()
            .app_data(Data::new(config_and_pool.clone()))
            .route("/home", web::get().to(home)),
    )
    .await;

    let req = test::TestRequest::get().uri("/home").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec())?;
    assert!(html.contains("class=\"start-round\" disabled"));
    Ok(())
}
