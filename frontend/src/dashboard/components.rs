use crate::config::{APP_CONFIG, NOTIFICATION_DURATION, RIPPLE_DURATION};
use crate::dashboard::actions::{ActionKind, Stagger};
use crate::router::Route;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

fn reveal_style(delay: u32) -> String {
    format!("transition: opacity 0.5s ease, transform 0.5s ease; transition-delay: {delay}ms;")
}

fn reveal_motion(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-5"
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    pub kind: ActionKind,
    pub delay: u32,
    pub revealed: bool,
    pub on_action: Callback<ActionKind>,
}

#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let rippling = use_state(|| false);
    let ripple_timer = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let rippling = rippling.clone();
        let on_action = props.on_action.clone();
        let kind = props.kind;

        Callback::from(move |_: MouseEvent| {
            rippling.set(true);
            let rippling = rippling.clone();
            *ripple_timer.borrow_mut() =
                Some(Timeout::new(RIPPLE_DURATION, move || rippling.set(false)));
            on_action.emit(kind);
        })
    };

    html! {
        <button
            type="button"
            class={classes!("action-button", props.kind.class_name(), "relative", "overflow-hidden",
                            "bg-blue-600", "text-white", "p-4", "rounded", "text-center", "hover:bg-blue-700",
                            "transform", reveal_motion(props.revealed))}
            style={reveal_style(props.delay)}
            {onclick}
        >
            <div class="text-3xl mb-2">{ props.kind.icon() }</div>
            <div class="font-semibold">{ props.kind.display_name() }</div>
            {
                if *rippling {
                    html! { <span class="ripple"></span> }
                } else {
                    html! {}
                }
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: Option<String>,
    pub visible: bool,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };

    html! {
        <div
            class={classes!("dashboard-notification", "fixed", "bottom-5", "right-5", "z-50", "px-6", "py-4",
                            "rounded-lg", "shadow-lg", "bg-gray-800", "text-white", "transform",
                            "transition", "duration-300", reveal_motion(props.visible))}
        >
            { message }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub detail: AttrValue,
    pub delay: u32,
    pub revealed: bool,
    #[prop_or_default]
    pub to: Option<Route>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let body = html! {
        <>
            <h3 class="text-lg font-semibold text-gray-800">{ &props.title }</h3>
            <p class="text-sm text-gray-600">{ &props.detail }</p>
        </>
    };

    html! {
        <div
            class={classes!("stat-card", "bg-gray-100", "p-4", "rounded-lg", "transform", reveal_motion(props.revealed))}
            style={reveal_style(props.delay)}
        >
            {
                match &props.to {
                    Some(route) => html! {
                        <Link<Route> to={route.clone()} classes="block hover:underline">{ body }</Link<Route>>
                    },
                    None => body,
                }
            }
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let revealed = use_state(|| false);
    let notification = use_state(|| None::<String>);
    let notification_visible = use_state(|| false);
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    {
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(0, move || revealed.set(true));
            move || drop(timeout)
        });
    }

    // A newer click replaces the pending hide timer, which cancels it
    let on_action = {
        let notification = notification.clone();
        let notification_visible = notification_visible.clone();

        Callback::from(move |kind: ActionKind| {
            log::debug!("Dashboard action '{}' is not available yet", kind.class_name());
            notification.set(Some(kind.coming_soon_message().to_string()));
            notification_visible.set(true);

            let notification_visible = notification_visible.clone();
            *hide_timer.borrow_mut() = Some(Timeout::new(NOTIFICATION_DURATION, move || {
                notification_visible.set(false)
            }));
        })
    };

    let revealed = *revealed;
    let actions = ActionKind::all_variants();
    let mut stagger = Stagger::default();
    let header_delay = stagger.next_delay();
    let stat_delays = stagger.take(3);
    let action_delays = stagger.take(actions.len());
    let recent_delay = stagger.next_delay();

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-4xl mx-auto bg-white rounded-lg shadow-lg p-8">
                <div
                    class={classes!("dashboard-header", "flex", "justify-between", "items-center", "mb-6", "transform", reveal_motion(revealed))}
                    style={reveal_style(header_delay)}
                >
                    <h1 class="text-3xl font-bold text-gray-800">{ &APP_CONFIG.app_name }</h1>
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline text-sm">
                        {"Switch account"}
                    </Link<Route>>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
                    <StatCard
                        title="Trend Analysis"
                        detail="Find out what is trending for any category"
                        delay={stat_delays[0]}
                        {revealed}
                        to={Some(Route::Trending)}
                    />
                    <StatCard title="Content Ideas" detail="Coming soon" delay={stat_delays[1]} {revealed} />
                    <StatCard title="Scheduled Posts" detail="Coming soon" delay={stat_delays[2]} {revealed} />
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                    { for actions.into_iter().zip(action_delays).map(|(kind, delay)| html! {
                        <ActionButton {kind} {delay} {revealed} on_action={on_action.clone()} />
                    })}
                </div>

                <div
                    class={classes!("dashboard-recent", "bg-gray-100", "p-4", "rounded-lg", "transform", reveal_motion(revealed))}
                    style={reveal_style(recent_delay)}
                >
                    <h2 class="text-xl font-semibold text-gray-800 mb-2">{"Recent activity"}</h2>
                    <p class="text-gray-600">
                        {"Run a "}
                        <Link<Route> to={Route::Trending} classes="text-blue-600 hover:underline">{"trend analysis"}</Link<Route>>
                        {" to get started."}
                    </p>
                </div>
            </div>

            <Notification message={(*notification).clone()} visible={*notification_visible} />
        </div>
    }
}
