use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{error, info};
use warp::Filter;
use warp::http::StatusCode;

use crate::service::schedule_aggregator::ScheduleAggregator;
use crate::service::weight_config_service::WeightConfigService;

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    #[serde(default)]
    pub date: String,
}

pub fn routes(
    aggregator: ScheduleAggregator,
    weights: Arc<WeightConfigService>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| "OK");

    let schedules = warp::path("schedules")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<ScheduleQuery>())
        .and_then(move |query: ScheduleQuery| {
            let aggregator = aggregator.clone();
            async move {
                let result = aggregator.schedules_for_date(&query.date).await;
                Ok::<_, Infallible>(warp::reply::json(&result))
            }
        });

    let active_weights = warp::path!("weight-configs" / "active")
        .and(warp::get())
        .and_then(move || {
            let weights = weights.clone();
            async move {
                let reply = match weights.get_active().await {
                    Ok(active) => warp::reply::with_status(
                        warp::reply::json(&active),
                        StatusCode::OK,
                    ),
                    Err(e) => {
                        error!("Active weight config lookup failed: {}", e);
                        warp::reply::with_status(
                            warp::reply::json(&serde_json::json!({ "error": e.to_string() })),
                            StatusCode::BAD_GATEWAY,
                        )
                    }
                };
                Ok::<_, Infallible>(reply)
            }
        });

    health.or(schedules).or(active_weights)
}

pub async fn run_api(
    aggregator: ScheduleAggregator,
    weights: WeightConfigService,
    addr: SocketAddr,
) {
    info!("Serving schedule API on http://{}", addr);
    warp::serve(routes(aggregator, Arc::new(weights)))
        .run(addr)
        .await;
}
