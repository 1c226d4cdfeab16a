use futures::prelude::*;
use hyper::StatusCode;

use api::error::Error;
use super::super::utils::{json_error_response, response_with_text, HTML_CONTENT_TYPE};
use super::Context;
use super::ControllerFuture;

const INDEX_PAGE: &str = r#"<!doctype html>
<html>
    <head>
        <meta charset="utf-8">
        <title>Etherscan Exporter</title>
    </head>
    <body>
        <h1>Etherscan Exporter</h1>
        <p><a href="/metrics">Metrics</a></p>
        <p>Balances are exported as <code>etherscan_balance{account="..."}</code>, availability as <code>etherscan_up</code>.
        Earlier releases used <code>etherscan_up{account="..."}</code> for balances, update dashboards accordingly.</p>
    </body>
</html>
"#;

pub fn index(_ctx: &Context) -> ControllerFuture {
    info!("Serving /index");
    response_with_text(HTML_CONTENT_TYPE, INDEX_PAGE.to_string())
}

pub fn not_found(ctx: &Context) -> ControllerFuture {
    warn!("Requested url `{}` not found", ctx.uri);
    Box::new(Ok::<_, Error>(json_error_response(StatusCode::NOT_FOUND, "Not found")).into_future())
}
