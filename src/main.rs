use chat_mbti::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger already set: {}", e).into());
    }
    log::info!("Starting CHAT MBTI landing page");
    yew::Renderer::<App>::new().render();
}
