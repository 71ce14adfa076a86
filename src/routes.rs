use actix_web::web;

use crate::api::{address, attendance, employee};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employees/{id}
            .service(web::resource("/{id}").route(web::get().to(employee::get_employee)))
            // /employees/{id}/address
            .service(
                web::resource("/{id}/address")
                    .route(web::put().to(address::upsert_address))
                    .route(web::delete().to(address::delete_address)),
            ),
    );

    cfg.service(
        web::scope("/attendance")
            .service(web::resource("/clock-in").route(web::post().to(attendance::clock_in)))
            .service(
                web::resource("/clock-out/{employee_id}")
                    .route(web::put().to(attendance::clock_out)),
            )
            .service(
                web::resource("/open/{employee_id}")
                    .route(web::get().to(attendance::open_session)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::middleware::NormalizePath;
    use actix_web::web::Data;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use crate::db::test_pool;
    use crate::engine::AttendanceEngine;
    use crate::store::Store;

    // Full walkthrough: employee creation, the address precondition, both
    // clock transitions, and every failure mode in between.
    #[actix_web::test]
    async fn clock_in_out_walkthrough() {
        let pool = test_pool().await;
        let app = test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(Data::new(Store::new(pool.clone())))
                .app_data(Data::new(AttendanceEngine::new(pool.clone())))
                .configure(super::configure),
        )
        .await;

        // Create Ada.
        let req = test::TestRequest::post()
            .uri("/employees/")
            .set_json(json!({"name": "Ada", "email": "ada@x.com"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let ada: Value = test::read_body_json(res).await;
        assert_eq!(ada["id"], 1);
        assert_eq!(ada["email"], "ada@x.com");

        // Duplicate email.
        let req = test::TestRequest::post()
            .uri("/employees/")
            .set_json(json!({"name": "Imposter", "email": "ada@x.com"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "Email already registered");

        // No address yet, clock-in refused.
        let req = test::TestRequest::post()
            .uri("/attendance/clock-in/")
            .set_json(json!({"employee_id": 1}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "Employee must have an address to clock in.");

        // File the address.
        let req = test::TestRequest::put()
            .uri("/employees/1/address")
            .set_json(json!({
                "street": "1 Main", "city": "A", "state": "S", "zip_code": "00000"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        // Clock in.
        let req = test::TestRequest::post()
            .uri("/attendance/clock-in/")
            .set_json(json!({"employee_id": 1}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let opened: Value = test::read_body_json(res).await;
        assert_eq!(opened["employee_id"], 1);
        assert!(opened["clock_out"].is_null());

        // Clock state is readable without mutating it.
        let req = test::TestRequest::get()
            .uri("/attendance/open/1")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let open: Value = test::read_body_json(res).await;
        assert_eq!(open["id"], opened["id"]);

        // Clock in again.
        let req = test::TestRequest::post()
            .uri("/attendance/clock-in/")
            .set_json(json!({"employee_id": 1}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "Employee already clocked in.");

        // Clock out.
        let req = test::TestRequest::put()
            .uri("/attendance/clock-out/1")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let closed: Value = test::read_body_json(res).await;
        assert_eq!(closed["id"], opened["id"]);
        assert!(!closed["clock_out"].is_null());

        // Clock out again.
        let req = test::TestRequest::put()
            .uri("/attendance/clock-out/1")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "No open clock-in found for this employee.");

        // No open session left to read.
        let req = test::TestRequest::get()
            .uri("/attendance/open/1")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        // The list endpoint shows the closed session and the address.
        let req = test::TestRequest::get().uri("/employees/").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let listed: Value = test::read_body_json(res).await;
        assert_eq!(listed[0]["attendances"].as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["address"]["city"], "A");
    }

    #[actix_web::test]
    async fn clock_in_for_unknown_employee_is_404() {
        let pool = test_pool().await;
        let app = test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(Data::new(Store::new(pool.clone())))
                .app_data(Data::new(AttendanceEngine::new(pool.clone())))
                .configure(super::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/attendance/clock-in/")
            .set_json(json!({"employee_id": 99}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "Employee not found.");
    }

    #[actix_web::test]
    async fn address_routes_translate_absence_to_404() {
        let pool = test_pool().await;
        let app = test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(Data::new(Store::new(pool.clone())))
                .app_data(Data::new(AttendanceEngine::new(pool.clone())))
                .configure(super::configure),
        )
        .await;

        // Upsert against an unknown employee.
        let req = test::TestRequest::put()
            .uri("/employees/7/address")
            .set_json(json!({"city": "X"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "Employee not found");

        // Known employee, no address on file yet.
        let req = test::TestRequest::post()
            .uri("/employees/")
            .set_json(json!({"name": "Ada", "email": "ada@x.com"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete()
            .uri("/employees/1/address")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        // Now file one and delete it.
        let req = test::TestRequest::put()
            .uri("/employees/1/address")
            .set_json(json!({
                "street": "1 Main", "city": "A", "state": "S", "zip_code": "00000"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri("/employees/1/address")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }
}
