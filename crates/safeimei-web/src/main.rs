//! Static host for the SafeIMEI front end
#![forbid(unsafe_code)]

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging is configured from the loaded file, so a load failure is
    // reported only once the fallback subscriber is up.
    let (config, load_error) = match safeimei_core::Config::load() {
        Ok(config) => (config, None),
        Err(e) => (safeimei_core::Config::default(), Some(e)),
    };

    safeimei_core::init_logging(&config.logging)?;
    if let Some(e) = load_error {
        tracing::warn!("Failed to load config: {}, using defaults", e);
    }

    safeimei_web::serve(config).await?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
