use trustshield::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Starting TrustShield landing page");
    yew::Renderer::<App>::new().render();
}
