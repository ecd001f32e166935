//! Main module for the Oratio practice timer using Yew.
//! Wires the session hook to the selection and countdown screens.

use oratio::Screen;
use yew::prelude::*;

mod components;
mod config;
mod fullscreen;
mod hooks;

use components::{Countdown, SelectedTopic, SpeechTypeSelector, TopicPickerPanel};
use config::*;
use fullscreen::on_fullscreen_click;
use hooks::use_session;

/// Root component: decides which screen is visible.
#[function_component]
pub fn App() -> Html {
    let session = use_session();
    let state = &session.state;

    let selection_screen = || {
        html! {
            <div class="selection-screen">
                <h1>{ APP_TITLE }</h1>
                <SpeechTypeSelector
                    selected={state.speech_type}
                    on_select={session.on_speech_type.clone()}
                />
                <div class="selection-detail">
                    if state.topic_picker_open {
                        <TopicPickerPanel on_pick={session.on_topic.clone()} />
                    } else if state.is_ready() {
                        if let Some(topic) = state.selected_topic.clone() {
                            <SelectedTopic heading={SELECTED_TOPIC_HEADING} {topic} />
                        }
                        <Countdown
                            key="selection-countdown"
                            duration_seconds={state.duration_seconds()}
                            on_complete={session.on_complete.clone()}
                        />
                        <button class="begin" onclick={session.on_begin.reform(|_| ())}>
                            { BEGIN_LABEL }
                        </button>
                    }
                </div>
            </div>
        }
    };

    let countdown_screen = || {
        html! {
            <div class="countdown-screen">
                <button class="back" onclick={session.on_back.reform(|_| ())}>{ BACK_LABEL }</button>
                if let Some(topic) = state.selected_topic.clone() {
                    <SelectedTopic heading={CURRENT_TOPIC_HEADING} {topic} />
                }
                <Countdown
                    duration_seconds={state.duration_seconds()}
                    on_complete={session.on_complete.clone()}
                />
            </div>
        }
    };

    html! {
        <div class="app">
            <button class="fullscreen" onclick={Callback::from(|_: MouseEvent| on_fullscreen_click())}>
                { FULLSCREEN_LABEL }
            </button>
            { match state.screen() {
                Screen::Selection => selection_screen(),
                Screen::Countdown => countdown_screen(),
            } }
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
