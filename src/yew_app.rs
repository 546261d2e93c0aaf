use std::fmt;
use std::rc::Rc;

use shuriken_stadium_core::visual::{
    BUTTON_LABEL, CHARACTER_CLASS, PROJECTILE_CLASS, SPRITE_ALT, TITLE_TEXT,
};
use shuriken_stadium_core::{ThrowTimings, ThrowVisual};
use yew::prelude::*;

use crate::app_config::WidgetConfig;
use crate::throw_controller::ThrowController;

const ROOT_ID: &str = "app";

#[derive(Properties, PartialEq)]
struct AppProps {
    config: WidgetConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MountError {
    NoWindow,
    NoDocument,
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::NoWindow => write!(f, "no window available"),
            MountError::NoDocument => write!(f, "window has no document"),
        }
    }
}

impl std::error::Error for MountError {}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let debug = props.config.debug;
    let controller = use_state(|| ThrowController::new(ThrowTimings::default(), debug));
    let is_throwing = use_state(|| controller.is_throwing());
    {
        let controller = (*controller).clone();
        let is_throwing = is_throwing.clone();
        use_effect_with((), move |_| {
            let controller_for_cb = controller.clone();
            let subscription = controller.subscribe(Rc::new(move || {
                is_throwing.set(controller_for_cb.is_throwing());
            }));
            move || {
                drop(subscription);
                controller.shutdown();
            }
        });
    }

    let on_throw = {
        let controller = (*controller).clone();
        Callback::from(move |_: MouseEvent| controller.trigger())
    };

    let visual = ThrowVisual::from_flag(*is_throwing);
    html! {
        <div class="stadium">
            <div class="title">{ TITLE_TEXT }</div>
            <div class="character-container">
                <img
                    src={props.config.sprite_src.clone()}
                    alt={SPRITE_ALT}
                    class={classes!(CHARACTER_CLASS, visual.character_modifier())}
                />
                <div class={classes!(PROJECTILE_CLASS, visual.projectile_modifier())}></div>
                <div class="water-spiral"></div>
            </div>
            <div class="controls">
                <button class="btn" onclick={on_throw} disabled={visual.button_disabled()}>
                    { BUTTON_LABEL }
                </button>
            </div>
        </div>
    }
}

/// Mounts the widget on `#app`, or on `<body>` when the page has no such element.
pub(crate) fn mount(config: WidgetConfig) -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let props = AppProps { config };
    match document.get_element_by_id(ROOT_ID) {
        Some(root) => {
            let _app_handle = yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            let _app_handle = yew::Renderer::<App>::with_props(props).render();
        }
    }
    Ok(())
}
