use crate::api::{error::json_config, payroll};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub type ApiLimiter = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> anyhow::Result<ApiLimiter> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        60_000 / requests_per_min as u64
    };
    GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limit: {requests_per_min} requests/min"))
}

/// `/v1/payroll/...` resources, mounted under the API prefix.
pub fn payroll_scope() -> actix_web::Scope {
    web::scope("/v1/payroll")
        // /v1/payroll/history
        .service(web::resource("/history").route(web::post().to(payroll::payroll_history)))
        // /v1/payroll/weekly
        .service(web::resource("/weekly").route(web::post().to(payroll::weekly_hours)))
        // /v1/payroll/shortcuts/{shortcut}
        .service(
            web::resource("/shortcuts/{shortcut}").route(web::get().to(payroll::date_shortcut)),
        )
        // /v1/payroll/print
        .service(web::resource("/print").route(web::post().to(payroll::print_history)))
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, limiter: &ApiLimiter) {
    cfg.app_data(json_config());

    cfg.service(
        web::scope(api_prefix)
            .wrap(Governor::new(limiter)) // rate limiting
            .service(payroll_scope()),
    );
}

// POST /api/v1/payroll/history   snapshot + filters -> rows + weekly chart
// POST /api/v1/payroll/weekly    entries -> weekly chart only
// GET  /api/v1/payroll/shortcuts/{today|last-week|last-30-days|last-90-days}
// POST /api/v1/payroll/print     snapshot + filters -> printable HTML
