// src/handlers/contact.rs
// DOCUMENTATION: Contact details endpoint

use crate::models::ContactInfo;
use actix_web::{web, HttpResponse, Responder};

/// GET /api/contact
pub async fn contact_info() -> impl Responder {
    HttpResponse::Ok().json(ContactInfo::dolly_hotel())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/contact", web::get().to(contact_info));
}
