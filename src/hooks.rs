use oratio::{SessionState, SpeechType, Topic};
use std::rc::Rc;
use yew::prelude::*;

/// Events the session screen reacts to.
pub enum SessionAction {
    SelectSpeechType(SpeechType),
    SelectTopic(Topic),
    Begin,
    Back,
    Complete,
}

#[derive(Default, PartialEq)]
struct SessionStore {
    state: SessionState,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        match action {
            SessionAction::SelectSpeechType(speech_type) => state.select_speech_type(speech_type),
            SessionAction::SelectTopic(topic) => state.select_topic(topic),
            SessionAction::Begin => {
                if !state.begin() {
                    log::warn!("Ignoring begin: selection is incomplete");
                }
            }
            SessionAction::Back => state.back(),
            SessionAction::Complete => state.complete(),
        }
        Rc::new(SessionStore { state })
    }
}

/// Snapshot of the session plus the callbacks that mutate it.
#[derive(Clone)]
pub struct SessionHandle {
    /// Current selection and navigation flags.
    pub state: SessionState,
    pub on_speech_type: Callback<SpeechType>,
    pub on_topic: Callback<Topic>,
    /// Enter the countdown screen (ignored until the selection is ready).
    pub on_begin: Callback<()>,
    pub on_back: Callback<()>,
    /// Wired to the countdown's completion signal.
    pub on_complete: Callback<()>,
}

/// Custom hook owning the session state for the root component.
#[hook]
pub fn use_session() -> SessionHandle {
    let store = use_reducer(SessionStore::default);

    let on_speech_type = {
        let store = store.clone();
        Callback::from(move |speech_type: SpeechType| {
            store.dispatch(SessionAction::SelectSpeechType(speech_type));
        })
    };

    let on_topic = {
        let store = store.clone();
        Callback::from(move |topic: Topic| store.dispatch(SessionAction::SelectTopic(topic)))
    };

    let dispatch_unit = |make: fn() -> SessionAction| {
        let store = store.clone();
        Callback::from(move |_: ()| store.dispatch(make()))
    };

    SessionHandle {
        state: store.state.clone(),
        on_speech_type,
        on_topic,
        on_begin: dispatch_unit(|| SessionAction::Begin),
        on_back: dispatch_unit(|| SessionAction::Back),
        on_complete: dispatch_unit(|| SessionAction::Complete),
    }
}
