//! Server-side rendering for Spin/WASI.

use std::sync::Once;

use leptos::{config::get_configuration, task::Executor as LeptosExecutor};
use leptos_wasi::{
    handler::HandlerError,
    prelude::{IncomingRequest, ResponseOutparam, WasiExecutor},
};
use wasi::exports::http::incoming_handler::Guest;
use wasi::http::proxy::export;

use crate::app::{shell, App};
use crate::config::{install_logging, site_config};
use crate::error::WebError;

static LOGGING: Once = Once::new();

struct DealServer;

impl Guest for DealServer {
    fn handle(request: IncomingRequest, response_out: ResponseOutparam) {
        LOGGING.call_once(|| {
            if let Err(e) = install_logging(&site_config()) {
                eprintln!("Logging init error: {e}");
            }
        });

        let executor = WasiExecutor::new(leptos_wasi::executor::Mode::Stalled);
        if let Err(e) = LeptosExecutor::init_local_custom_executor(executor.clone()) {
            tracing::error!(error = ?e, "executor init failed");
            return;
        }
        executor.run_until(async {
            if let Err(e) = handle_request(request, response_out).await {
                tracing::error!(error = %e, "request failed");
            }
        })
    }
}

fn handler_error(err: HandlerError) -> WebError {
    WebError::Server(format!("{err:?}"))
}

async fn handle_request(
    request: IncomingRequest,
    response_out: ResponseOutparam,
) -> Result<(), WebError> {
    use leptos_wasi::prelude::Handler;

    let conf = get_configuration(None).map_err(|e| WebError::Server(e.to_string()))?;
    let leptos_options = conf.leptos_options;

    Handler::build(request, response_out)
        .map_err(handler_error)?
        .generate_routes(App)
        .handle_with_context(move || shell(leptos_options.clone()), || {})
        .await
        .map_err(handler_error)?;

    Ok(())
}

export!(DealServer with_types_in wasi);
