use failure::Fail;
use futures::prelude::*;

use super::super::utils::{response_with_text, EXPOSITION_CONTENT_TYPE};
use super::Context;
use super::ControllerFuture;
use api::error::*;

pub fn get_metrics(ctx: &Context) -> ControllerFuture {
    info!("Serving /metrics");
    let metrics_service = ctx.metrics_service.clone();
    Box::new(
        metrics_service
            .get_metrics()
            .map_err(ectx!(convert))
            .and_then(|exposition| response_with_text(EXPOSITION_CONTENT_TYPE, exposition.to_string())),
    )
}
