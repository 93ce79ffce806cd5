#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to init logger");

    leptos::mount::mount_to_body(windchill_client::app::App);
}

// Trunk always builds with `csr`; this stub only keeps native builds honest.
#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("windchill-client is a browser application; build it with Trunk");
}
