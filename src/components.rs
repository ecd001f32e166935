//! Yew view components for the Oratio UI.
//!
//! The selector, picker and topic banner are function components driven by
//! props. The countdown is a struct component because it owns the running
//! interval handle for as long as it is mounted.

use crate::config::{GENERATE_LABEL, THEME_SELECT_ID};
use gloo_timers::callback::Interval;
use log::warn;
use oratio::defaults::TICK_INTERVAL_MS;
use oratio::{CountdownTimer, SpeechType, TickOutcome, TickSource, Theme, Topic, TopicPicker};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Buttons for the three speech types.
#[derive(Properties, PartialEq)]
pub struct SpeechTypeSelectorProps {
    pub selected: Option<SpeechType>,
    pub on_select: Callback<SpeechType>,
}

#[function_component(SpeechTypeSelector)]
pub fn speech_type_selector(props: &SpeechTypeSelectorProps) -> Html {
    html! {
        <div class="speech-selector">
            { SpeechType::ALL.into_iter().map(|speech_type| {
                let class = classes!(
                    "speech-option",
                    (props.selected == Some(speech_type)).then_some("selected"),
                );
                let on_select = props.on_select.clone();
                html! {
                    <button
                        key={speech_type.name()}
                        {class}
                        onclick={Callback::from(move |_| on_select.emit(speech_type))}
                    >
                        { speech_type.label() }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopicPickerProps {
    pub on_pick: Callback<Topic>,
}

/// Theme dropdown, generate button and the generated topic list.
///
/// Mounted only while the picker is open, so each opening starts empty.
#[function_component(TopicPickerPanel)]
pub fn topic_picker_panel(props: &TopicPickerProps) -> Html {
    let picker = use_state(TopicPicker::new);

    let on_theme_change = {
        let picker = picker.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Theme>() {
                Ok(theme) => {
                    let mut next = (*picker).clone();
                    next.select_theme(theme);
                    picker.set(next);
                }
                Err(err) => warn!("{}", err),
            }
        })
    };

    let on_generate = {
        let picker = picker.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*picker).clone();
            next.generate();
            picker.set(next);
        })
    };

    let current = picker.theme();

    html! {
        <div class="topic-picker">
            <select id={THEME_SELECT_ID} onchange={on_theme_change}>
                { Theme::ALL.into_iter().map(|theme| html! {
                    <option value={theme.name()} selected={theme == current}>
                        { theme.label() }
                    </option>
                }).collect::<Html>() }
            </select>
            <button class="generate" onclick={on_generate}>{ GENERATE_LABEL }</button>
            if !picker.topics().is_empty() {
                <div class="topic-list">
                    { picker.topics().iter().map(|topic| {
                        let onclick = {
                            let picker = picker.clone();
                            let topic = topic.clone();
                            let on_pick = props.on_pick.clone();
                            Callback::from(move |_: MouseEvent| on_pick.emit(picker.pick(&topic)))
                        };
                        html! {
                            <button key={topic.id.clone()} class="topic" {onclick}>
                                { topic.text }
                            </button>
                        }
                    }).collect::<Html>() }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectedTopicProps {
    pub heading: AttrValue,
    pub topic: Topic,
}

#[function_component(SelectedTopic)]
pub fn selected_topic(props: &SelectedTopicProps) -> Html {
    html! {
        <div class="selected-topic">
            <h2>{ props.heading.clone() }</h2>
            <p>{ props.topic.text }</p>
        </div>
    }
}

/// Tick source backed by a browser interval; dropping the `Interval`
/// clears it.
pub struct IntervalTicks {
    on_tick: Callback<()>,
}

impl TickSource for IntervalTicks {
    type Handle = Interval;

    fn every_second(&mut self) -> Interval {
        let on_tick = self.on_tick.clone();
        Interval::new(TICK_INTERVAL_MS, move || on_tick.emit(()))
    }
}

pub enum CountdownMsg {
    Toggle,
    Reset,
    Tick,
    ToggleNumbers,
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub duration_seconds: u32,
    pub on_complete: Callback<()>,
}

/// Countdown ring with play/pause, reset and number visibility controls.
pub struct Countdown {
    timer: CountdownTimer<IntervalTicks>,
}

impl Component for Countdown {
    type Message = CountdownMsg;
    type Properties = CountdownProps;

    fn create(ctx: &Context<Self>) -> Self {
        let ticks = IntervalTicks {
            on_tick: ctx.link().callback(|_| CountdownMsg::Tick),
        };
        Self {
            timer: CountdownTimer::new(ctx.props().duration_seconds, ticks),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CountdownMsg::Toggle => self.timer.toggle(),
            CountdownMsg::Reset => {
                self.timer.reset();
                true
            }
            CountdownMsg::Tick => match self.timer.tick() {
                TickOutcome::Ignored => false,
                TickOutcome::Continued => true,
                TickOutcome::Completed => {
                    ctx.props().on_complete.emit(());
                    true
                }
            },
            CountdownMsg::ToggleNumbers => {
                self.timer.toggle_numbers_visible();
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let duration = ctx.props().duration_seconds;
        if duration != old_props.duration_seconds {
            self.timer.reconfigure(duration);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.timer.state();
        let link = ctx.link();
        let ring_style = format!(
            "background: conic-gradient(var(--tier-color) {:.2}%, transparent 0)",
            state.progress() * 100.0
        );

        html! {
            <div class="countdown">
                <div class={classes!("ring", state.tier().css_class())} style={ring_style}>
                    <div class="ring-inner">
                        if state.numbers_visible() {
                            <span class="time">{ state.formatted() }</span>
                        } else {
                            <span class="indicator"></span>
                        }
                    </div>
                </div>
                <div class="controls">
                    <button class="primary" onclick={link.callback(|_| CountdownMsg::Toggle)}>
                        { if state.is_running() { "Pause" } else { "Start" } }
                    </button>
                    <button onclick={link.callback(|_| CountdownMsg::Reset)}>{ "Reset" }</button>
                    <button onclick={link.callback(|_| CountdownMsg::ToggleNumbers)}>
                        { if state.numbers_visible() { "Hide time" } else { "Show time" } }
                    </button>
                </div>
            </div>
        }
    }
}
