pub mod anim;
pub mod components;
pub mod config;
pub mod data;
pub mod dom;
pub mod error;
pub mod frame_loop;
pub mod pages;
pub mod playback;
pub mod sequence;

use yew::prelude::*;

use pages::landing::Landing;

#[function_component]
pub fn App() -> Html {
    html! { <Landing /> }
}
