use crate::Valuation;
use crate::dto::{
    ErrorResponse, EstimatedPriceResponse, LocationNamesResponse, PredictHomePriceRequest,
};
use crate::error::{ValuationError, ValuationErrorExt};
use crate::estimator::PriceQuery;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use homeval_derive::api_handler;
use homeval_kernel::domain::constants::VALUATION_TAG;
use homeval_kernel::server::ApiState;
use tracing::info;

#[api_handler(
    get,
    path = "/get_location_names",
    responses(
        (status = OK, description = "Known locations in model order", body = LocationNamesResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Valuation state unavailable", body = ErrorResponse),
    ),
    tag = VALUATION_TAG,
)]
pub(super) async fn get_location_names(
    State(state): State<ApiState>,
) -> Result<Json<LocationNamesResponse>, ValuationError> {
    let valuation = state.try_get_slice::<Valuation>().context("get_location_names")?;
    let locations = valuation.estimator.locations().to_vec();

    info!(count = locations.len(), "Location fetched");

    Ok(Json(LocationNamesResponse { locations }))
}

#[api_handler(
    post,
    path = "/predict_home_price",
    request_body = PredictHomePriceRequest,
    responses(
        (status = OK, description = "Estimated price in lakh", body = EstimatedPriceResponse),
        (status = BAD_REQUEST, description = "Malformed body, invalid field or unknown location", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Prediction failed", body = ErrorResponse),
    ),
    tag = VALUATION_TAG,
)]
pub(super) async fn predict_home_price(
    State(state): State<ApiState>,
    payload: Result<Json<PredictHomePriceRequest>, JsonRejection>,
) -> Result<Json<EstimatedPriceResponse>, ValuationError> {
    let Json(request) = payload.map_err(|rejection| ValuationError::InvalidInput {
        message: rejection.body_text().into(),
        context: None,
    })?;
    let query = PriceQuery::try_from(request)?;

    info!(
        location = %query.location,
        total_sqft = query.total_sqft,
        bhk = query.bhk,
        bath = query.bath,
        "Price prediction initiated"
    );

    let valuation = state.try_get_slice::<Valuation>().context("predict_home_price")?;
    let estimated_price = valuation.estimator.estimate(&query)?;

    Ok(Json(EstimatedPriceResponse { estimated_price }))
}
