use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
}

/// Fades its children up into place once, when the page mounts. It does not
/// wait for the section to scroll into view, so content below the fold has
/// usually finished animating before it is seen. Animation lives in the
/// `.reveal` rule of the app stylesheet.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    html! {
        <div class="reveal">
            { for props.children.iter() }
        </div>
    }
}
