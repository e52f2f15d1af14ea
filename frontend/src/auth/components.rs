use crate::auth::validation::{password_length_flagged, LoginForm, SignupForm};
use crate::config::{AUTH_CARD_REVEAL_DELAY, LOGIN_ACTION, SIGNUP_ACTION};
use crate::router::Route;
use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_router::prelude::*;

fn bind_input(field: &UseStateHandle<String>) -> Callback<InputEvent> {
    let field = field.clone();
    Callback::from(move |e: InputEvent| {
        let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
        field.set(input_value);
    })
}

#[derive(Properties, PartialEq)]
pub struct AuthCardProps {
    pub title: String,
    pub children: Children,
}

#[function_component(AuthCard)]
pub fn auth_card(props: &AuthCardProps) -> Html {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(AUTH_CARD_REVEAL_DELAY, move || revealed.set(true));
            move || drop(timeout)
        });
    }

    let motion = if *revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-5"
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-700 p-4">
            <div class={classes!("auth-card", "bg-white", "p-8", "rounded-lg", "shadow-lg", "w-full", "max-w-md",
                                 "transition", "duration-500", "ease-in-out", "transform", motion)}>
                <div class="auth-header mb-6">
                    <h1 class="text-2xl font-bold text-gray-800 text-center">{ &props.title }</h1>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// Error banner contents. `attempt` changes on every rejected submit, so the
/// same message shown twice still counts as a new banner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BannerState {
    pub message: Option<String>,
    pub attempt: u32,
}

impl BannerState {
    pub fn show(&self, message: String) -> Self {
        Self {
            message: Some(message),
            attempt: self.attempt.wrapping_add(1),
        }
    }
}

fn scroll_to_center(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct AuthErrorProps {
    pub banner: BannerState,
}

#[function_component(AuthError)]
pub fn auth_error(props: &AuthErrorProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with(props.banner.clone(), move |banner| {
            if banner.message.is_some() {
                if let Some(element) = node.cast::<Element>() {
                    scroll_to_center(&element);
                }
            }
            || ()
        });
    }

    match &props.banner.message {
        Some(message) => html! {
            <div ref={node} class="error-message bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                { message }
            </div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct PasswordInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PasswordInput)]
pub fn password_input(props: &PasswordInputProps) -> Html {
    let visible = use_state(|| false);

    let on_toggle = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(!*visible))
    };

    html! {
        <div class="mb-4">
            <label for={props.id.clone()} class="block text-gray-700 text-sm font-bold mb-2">
                { &props.label }
            </label>
            <div class="relative">
                <input
                    id={props.id.clone()}
                    name={props.id.clone()}
                    type={if *visible { "text" } else { "password" }}
                    class="w-full p-3 pr-10 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                    value={props.value.clone()}
                    oninput={props.oninput.clone()}
                />
                <button
                    type="button"
                    class="password-toggle absolute right-3 top-1/2 -translate-y-1/2 bg-transparent border-0 text-gray-500 cursor-pointer"
                    onclick={on_toggle}
                >
                    { if *visible { "🔒" } else { "👁️" } }
                </button>
            </div>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: String,
    pub oninput: Callback<InputEvent>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    html! {
        <div class="mb-4">
            <label for={props.id.clone()} class="block text-gray-700 text-sm font-bold mb-2">
                { &props.label }
            </label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                value={props.value.clone()}
                oninput={props.oninput.clone()}
            />
        </div>
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let banner = use_state(BannerState::default);

    // Valid forms fall through to the browser's native POST
    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let banner = banner.clone();

        Callback::from(move |e: web_sys::SubmitEvent| {
            let form = LoginForm {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            if let Err(error) = form.validate() {
                e.prevent_default();
                log::debug!("Login form rejected: {error}");
                banner.set(banner.show(error.to_string()));
            }
        })
    };

    html! {
        <AuthCard title="Log in">
            <AuthError banner={(*banner).clone()} />
            <form method="post" action={LOGIN_ACTION} onsubmit={on_submit}>
                <TextField id="username" label="Username" value={(*username).clone()} oninput={bind_input(&username)} />
                <PasswordInput id="password" label="Password" value={(*password).clone()} oninput={bind_input(&password)} />
                <button type="submit" class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700">
                    {"Log in"}
                </button>
            </form>
            <p class="text-center text-sm text-gray-600 mt-4">
                {"No account yet? "}
                <Link<Route> to={Route::Signup} classes="text-blue-600 hover:underline">{"Sign up"}</Link<Route>>
            </p>
        </AuthCard>
    }
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let full_name = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let banner = use_state(BannerState::default);

    let form = SignupForm {
        username: (*username).clone(),
        email: (*email).clone(),
        full_name: (*full_name).clone(),
        password: (*password).clone(),
        confirm_password: (*confirm_password).clone(),
    };
    let password_match = form.password_match();
    let length_hint_class = if password_length_flagged(&form.password) {
        "text-xs text-red-600"
    } else {
        "text-xs text-gray-500"
    };

    let on_submit = {
        let banner = banner.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            if let Err(error) = form.validate() {
                e.prevent_default();
                log::debug!("Signup form rejected: {error}");
                banner.set(banner.show(error.to_string()));
            }
        })
    };

    html! {
        <AuthCard title="Create your account">
            <AuthError banner={(*banner).clone()} />
            <form method="post" action={SIGNUP_ACTION} onsubmit={on_submit}>
                <TextField id="username" label="Username" value={(*username).clone()} oninput={bind_input(&username)} />
                <TextField id="email" label="Email" input_type="email" value={(*email).clone()} oninput={bind_input(&email)} />
                <TextField id="full_name" label="Full name" value={(*full_name).clone()} oninput={bind_input(&full_name)} />
                <PasswordInput id="password" label="Password" value={(*password).clone()} oninput={bind_input(&password)}>
                    <small class={length_hint_class}>{"At least 8 characters"}</small>
                </PasswordInput>
                <PasswordInput id="confirm_password" label="Confirm password" value={(*confirm_password).clone()} oninput={bind_input(&confirm_password)}>
                    <small id="password_match_message" class={password_match.class()}>
                        { password_match.message() }
                    </small>
                </PasswordInput>
                <button type="submit" class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700">
                    {"Sign up"}
                </button>
            </form>
            <p class="text-center text-sm text-gray-600 mt-4">
                {"Already registered? "}
                <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">{"Log in"}</Link<Route>>
            </p>
        </AuthCard>
    }
}
