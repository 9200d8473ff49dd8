#[cfg(target_arch = "wasm32")]
mod anchors;
#[cfg(target_arch = "wasm32")]
mod config;
#[cfg(target_arch = "wasm32")]
mod env;
#[cfg(target_arch = "wasm32")]
mod error;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod parallax;
#[cfg(target_arch = "wasm32")]
mod reveal;
#[cfg(target_arch = "wasm32")]
mod runtime;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod theme;
#[cfg(target_arch = "wasm32")]
mod widget;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = runtime::start() {
            gloo::console::warn!("portfolio-fx: startup failed", err.to_string());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("portfolio-fx only runs in the browser (wasm32)");
    }
}
