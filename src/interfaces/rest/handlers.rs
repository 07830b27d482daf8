use crate::application::service::PaymentService;
use crate::interfaces::rest::dto::{
    PaymentOrderDetailsResponse, PaymentOrderRequest, PaymentOrderResponse,
    PaymentOrderStatusResponse,
};
use crate::interfaces::rest::problem::Problem;
use actix_web::{web, HttpRequest, HttpResponse};

/// Mounts the payment-initiation API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payment-initiation")
            .route("/payment-orders", web::post().to(submit_payment_order))
            .route(
                "/payment-orders/{payment_order_id}",
                web::get().to(get_payment_order),
            )
            .route(
                "/payment-orders/{payment_order_id}/status",
                web::get().to(get_payment_order_status),
            ),
    );
}

/// `POST /payment-initiation/payment-orders`
///
/// Replies 201 with the creation summary. An idempotent replay of a known
/// external id also replies 201, carrying the originally stored order.
async fn submit_payment_order(
    service: web::Data<PaymentService>,
    request: HttpRequest,
    body: web::Json<PaymentOrderRequest>,
) -> HttpResponse {
    match service.initiate_payment(body.into_inner().into()).await {
        Ok(order) => HttpResponse::Created().json(PaymentOrderResponse::from(order)),
        Err(error) => Problem::validation_error(error.to_string(), request.path()).into_response(),
    }
}

/// `GET /payment-initiation/payment-orders/{payment_order_id}`
async fn get_payment_order(
    service: web::Data<PaymentService>,
    request: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let payment_order_id = path.into_inner();
    match service.get_payment_order(&payment_order_id).await {
        Some(order) => HttpResponse::Ok().json(PaymentOrderDetailsResponse::from(order)),
        None => not_found(&payment_order_id, &request),
    }
}

/// `GET /payment-initiation/payment-orders/{payment_order_id}/status`
async fn get_payment_order_status(
    service: web::Data<PaymentService>,
    request: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let payment_order_id = path.into_inner();
    match service.get_payment_status(&payment_order_id).await {
        Some(order) => HttpResponse::Ok().json(PaymentOrderStatusResponse::from(order)),
        None => not_found(&payment_order_id, &request),
    }
}

fn not_found(payment_order_id: &str, request: &HttpRequest) -> HttpResponse {
    Problem::not_found(
        format!("payment order not found: {payment_order_id}"),
        request.path(),
    )
    .into_response()
}
