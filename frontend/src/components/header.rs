use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: AttrValue,
    pub on_navigate: Callback<String>,
    #[prop_or_default]
    pub children: Html,
}

/// Anchor that navigates inside the app instead of reloading the page
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let to = props.to.to_string();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(to.clone());
        })
    };

    html! {
        <a href={props.to.clone()} {onclick}>{props.children.clone()}</a>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub authenticated: bool,
    pub on_navigate: Callback<String>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="header">
            <h1>
                <NavLink to="/dashboard" on_navigate={props.on_navigate.clone()}>{"Bank App"}</NavLink>
            </h1>
            {if props.authenticated {
                html! { <button id="logout" class="btn" onclick={on_logout}>{"Logout"}</button> }
            } else { html! {} }}
        </header>
    }
}
