//! Browser entry point, built with `trunk`
#![forbid(unsafe_code)]

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("starting SafeIMEI front end");
    safeimei_web::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("safeimei-web runs in the browser: build it with `trunk build` and serve it with safeimei-web-server");
}
